use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_book;
