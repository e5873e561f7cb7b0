//! Book factory for creating catalog entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db)
///     .title("Dune")
///     .genre("Science Fiction")
///     .price(12.99)
///     .stock(3)
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    description: String,
    genre: String,
    price: f64,
    stock: i32,
    created_at: DateTime<Utc>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`, author: `"Author {id}"`, genre: `"Fiction"`
    /// - price: `10.0`, stock: `10`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            description: format!("Description of book {}", id),
            genre: "Fiction".to_string(),
            price: 10.0,
            stock: 10,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Overrides the creation timestamp, useful for testing default ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let search_text = entity::book::search_text(&self.title, &self.author, &self.genre);

        entity::book::ActiveModel {
            search_text: ActiveValue::Set(search_text),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            description: ActiveValue::Set(self.description),
            genre: ActiveValue::Set(self.genre),
            price: ActiveValue::Set(self.price),
            stock: ActiveValue::Set(self.stock),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

/// Creates a book with a specific stock level.
pub async fn create_book_with_stock(
    db: &DatabaseConnection,
    stock: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).stock(stock).build().await
}
