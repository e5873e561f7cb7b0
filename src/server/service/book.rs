//! Book service for business logic.
//!
//! Wraps the catalog repository with not-found handling and pagination metadata.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, BookListParams, CreateBookParams, PaginatedBooks, UpdateBookParams},
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db).create(params).await?;

        tracing::info!("Created book {} \"{}\"", book.id, book.title);

        Ok(book)
    }

    /// # Returns
    /// - `Ok(Book)` - Book found
    /// - `Err(AppError::NotFound)` - No book with that id
    pub async fn get_by_id(&self, book_id: i32) -> Result<Book, AppError> {
        BookRepository::new(self.db)
            .find_by_id(book_id)
            .await?
            .ok_or_else(book_not_found)
    }

    /// Lists books for one page with pagination metadata.
    ///
    /// `total_pages` is `ceil(total / limit)` and is 0 when nothing matches.
    pub async fn get_paginated(&self, params: BookListParams) -> Result<PaginatedBooks, AppError> {
        let (books, total) = BookRepository::new(self.db)
            .get_paginated(&params)
            .await?;

        let total_pages = total.div_ceil(params.limit);

        Ok(PaginatedBooks {
            books,
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
        })
    }

    /// # Returns
    /// - `Ok(Book)` - The updated book
    /// - `Err(AppError::NotFound)` - No book with that id
    pub async fn update(&self, book_id: i32, params: UpdateBookParams) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db)
            .update(book_id, params)
            .await?
            .ok_or_else(book_not_found)?;

        tracing::info!("Updated book {}", book.id);

        Ok(book)
    }

    /// # Returns
    /// - `Ok(Book)` - The book as it was before deletion
    /// - `Err(AppError::NotFound)` - No book with that id
    pub async fn delete(&self, book_id: i32) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db)
            .delete(book_id)
            .await?
            .ok_or_else(book_not_found)?;

        tracing::info!("Deleted book {}", book.id);

        Ok(book)
    }
}
