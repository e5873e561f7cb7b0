pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_book_table;
mod m20250601_000003_create_cart_item_table;
mod m20250601_000004_create_order_table;
mod m20250601_000005_create_order_item_table;
mod m20250601_000006_create_review_table;
mod m20250601_000007_create_api_key_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_book_table::Migration),
            Box::new(m20250601_000003_create_cart_item_table::Migration),
            Box::new(m20250601_000004_create_order_table::Migration),
            Box::new(m20250601_000005_create_order_item_table::Migration),
            Box::new(m20250601_000006_create_review_table::Migration),
            Box::new(m20250601_000007_create_api_key_table::Migration),
        ]
    }
}
