//! Book data repository for database operations.
//!
//! This module provides the `BookRepository` for the catalog: CRUD, the searchable and
//! sortable paginated listing, and the conditional stock update used while placing orders.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::book::{
    Book, BookListParams, BookSortField, CreateBookParams, SortDirection, UpdateBookParams,
};

/// Repository providing database operations for books.
///
/// Generic over the connection so it can run inside a transaction.
pub struct BookRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new book with `created_at` and `updated_at` set to now.
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let now = Utc::now();
        let search_text =
            entity::book::search_text(&params.title, &params.author, &params.genre);

        let entity = entity::book::ActiveModel {
            search_text: ActiveValue::Set(search_text),
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            description: ActiveValue::Set(params.description),
            genre: ActiveValue::Set(params.genre),
            price: ActiveValue::Set(params.price),
            stock: ActiveValue::Set(params.stock),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Finds a book by id.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, book_id: i32) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(book_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Checks whether a book exists.
    pub async fn exists(&self, book_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Book::find_by_id(book_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the supplied fields of `params` and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - The updated book
    /// - `Ok(None)` - No book with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        book_id: i32,
        params: UpdateBookParams,
    ) -> Result<Option<Book>, DbErr> {
        let Some(existing) = entity::prelude::Book::find_by_id(book_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let search_text = entity::book::search_text(
            params.title.as_deref().unwrap_or(&existing.title),
            params.author.as_deref().unwrap_or(&existing.author),
            params.genre.as_deref().unwrap_or(&existing.genre),
        );

        let mut active: entity::book::ActiveModel = existing.into();
        active.search_text = ActiveValue::Set(search_text);

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(author) = params.author {
            active.author = ActiveValue::Set(author);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(genre) = params.genre {
            active.genre = ActiveValue::Set(genre);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(stock) = params.stock {
            active.stock = ActiveValue::Set(stock);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Book::from_entity(entity)))
    }

    /// Deletes a book.
    ///
    /// Cart rows and reviews of the book are removed by cascade; order items keep their
    /// snapshot with `book_id` set to null.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - The book as it was before deletion
    /// - `Ok(None)` - No book with that id
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete(&self, book_id: i32) -> Result<Option<Book>, DbErr> {
        let Some(existing) = entity::prelude::Book::find_by_id(book_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::Book::delete_by_id(book_id)
            .exec(self.db)
            .await?;

        Ok(Some(Book::from_entity(existing)))
    }

    /// Gets one page of books matching the listing parameters.
    ///
    /// `search` is matched case-insensitively as a literal substring of title, author or
    /// genre; `%` and `_` in the term match only themselves.
    /// Ties in the sort column are broken by id in the same direction so pages never
    /// overlap.
    ///
    /// # Returns
    /// - `Ok((books, total))` - Books on the requested page and the count of all matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, params: &BookListParams) -> Result<(Vec<Book>, u64), DbErr> {
        use entity::book::Column;

        let mut query = entity::prelude::Book::find();

        if let Some(search) = &params.search {
            query = query.filter(Column::SearchText.like(substring_pattern(search)));
        }

        let column = match params.sort_by {
            BookSortField::Title => Column::Title,
            BookSortField::Author => Column::Author,
            BookSortField::Genre => Column::Genre,
            BookSortField::Price => Column::Price,
            BookSortField::Stock => Column::Stock,
            BookSortField::CreatedAt => Column::CreatedAt,
        };
        let direction = match params.sort_order {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let paginator = query
            .order_by(column, direction.clone())
            .order_by(Column::Id, direction)
            .paginate(self.db, params.limit);

        let total = paginator.num_items().await?;
        let books = paginator.fetch_page(params.page).await?;

        Ok((books.into_iter().map(Book::from_entity).collect(), total))
    }

    /// Sets a book's stock to `new_stock` only if it still equals `observed`.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was updated
    /// - `Ok(false)` - Stock changed since it was read, or the book is gone
    /// - `Err(DbErr)` - Database error during update
    pub async fn compare_and_set_stock(
        &self,
        book_id: i32,
        observed: i32,
        new_stock: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::Stock, Expr::value(new_stock))
            .col_expr(entity::book::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::book::Column::Id.eq(book_id))
            .filter(entity::book::Column::Stock.eq(observed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

/// Builds a `LIKE` pattern matching `term` as a literal, case-folded substring of
/// `search_text`.
fn substring_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
