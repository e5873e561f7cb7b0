use crate::server::data::cart_item::CartItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_quantity;
mod create;
mod delete;
mod find_by_user;
mod set_quantity;
