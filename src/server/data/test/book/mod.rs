use crate::server::{
    data::book::BookRepository,
    model::book::{BookListParams, BookSortField, CreateBookParams, SortDirection, UpdateBookParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod compare_and_set_stock;
mod create;
mod delete;
mod get_paginated;
mod update;
