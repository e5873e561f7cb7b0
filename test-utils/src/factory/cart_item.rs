//! Cart item factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a cart row for `user_id` holding `quantity` copies of `book_id`.
///
/// # Returns
/// - `Ok(entity::cart_item::Model)` - Created cart row
/// - `Err(DbErr)` - Database error during insert (e.g. unknown user or book)
pub async fn create_cart_item(
    db: &DatabaseConnection,
    user_id: i32,
    book_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        book_id: ActiveValue::Set(book_id),
        quantity: ActiveValue::Set(quantity),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
