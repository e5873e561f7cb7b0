//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a review of `book_id` by `user_id`.
///
/// # Arguments
/// - `rating` - Stored as given; the factory does not enforce the 1..=5 range
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    book_id: i32,
    user_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        book_id: ActiveValue::Set(book_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(format!("Rated {} out of 5", rating)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
