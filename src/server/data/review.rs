use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

/// Repository for book reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        book_id: i32,
        user_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            user_id: ActiveValue::Set(user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets a book's reviews, newest first.
    pub async fn find_by_book(&self, book_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::BookId.eq(book_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Deletes every review of a book and returns how many were removed.
    pub async fn delete_by_book(&self, book_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BookId.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
