use crate::server::{data::order::OrderRepository, model::order::NewOrderItem};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user;
