use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review},
};

/// Service for book reviews. Every operation requires the book to exist.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_book_exists(&self, book_id: i32) -> Result<(), AppError> {
        if !BookRepository::new(self.db).exists(book_id).await? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }

    pub async fn add(
        &self,
        book_id: i32,
        user_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, AppError> {
        self.ensure_book_exists(book_id).await?;

        let review = ReviewRepository::new(self.db)
            .create(book_id, user_id, params)
            .await?;

        Ok(review)
    }

    /// Gets a book's reviews, newest first.
    pub async fn get_for_book(&self, book_id: i32) -> Result<Vec<Review>, AppError> {
        self.ensure_book_exists(book_id).await?;

        let reviews = ReviewRepository::new(self.db).find_by_book(book_id).await?;

        Ok(reviews)
    }

    /// Deletes every review of a book and returns how many were removed.
    pub async fn delete_for_book(&self, book_id: i32) -> Result<u64, AppError> {
        self.ensure_book_exists(book_id).await?;

        let deleted = ReviewRepository::new(self.db)
            .delete_by_book(book_id)
            .await?;

        tracing::info!("Deleted {} review(s) of book {}", deleted, book_id);

        Ok(deleted)
    }
}
