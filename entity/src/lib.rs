//! SeaORM entities for the bookstore schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations declared here
//! are also what `test_utils::builder::TestBuilder` uses to emit foreign keys when it builds
//! the in-memory test schema, so their `on_delete` actions must match the migrations.

pub mod prelude;

pub mod api_key;
pub mod book;
pub mod cart_item;
pub mod order;
pub mod order_item;
pub mod review;
pub mod user;
