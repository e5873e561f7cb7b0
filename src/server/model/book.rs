//! Book domain models and parameters.
//!
//! Covers the catalog entry itself, validated create and update parameters, and the
//! listing parameters (search, sort and pagination) parsed from the query string.

use chrono::{DateTime, Utc};

use crate::{
    model::book::{BookDto, BookQueryDto, CreateBookDto, PaginatedBooksDto, PaginationDto, UpdateBookDto},
    server::{error::AppError, util::validation::Validator},
};

/// Default page size for book listings.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;
/// Largest accepted page size for book listings.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub price: f64,
    /// Copies available. Never negative.
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Converts an entity model to a book domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            description: entity.description,
            genre: entity.genre,
            price: entity.price,
            stock: entity.stock,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            description: self.description,
            genre: self.genre,
            price: self.price,
            stock: self.stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn check_price(v: &mut Validator, price: f64) {
    v.check(
        price.is_finite() && price > 0.0,
        "price must be greater than 0",
    );
}

fn check_stock(v: &mut Validator, stock: i32) {
    v.check(stock >= 0, "stock must not be negative");
}

/// Validated fields for a new book.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub price: f64,
    pub stock: i32,
}

impl CreateBookParams {
    /// Validates a create request.
    ///
    /// Every field is required, strings must be non-blank, `price > 0` and `stock >= 0`.
    ///
    /// # Returns
    /// - `Ok(CreateBookParams)` - Valid request with trimmed strings
    /// - `Err(AppError::Validation)` - One entry per problem found
    pub fn try_from_dto(dto: CreateBookDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let title = v.required_text("title", dto.title);
        let author = v.required_text("author", dto.author);
        let description = v.required_text("description", dto.description);
        let genre = v.required_text("genre", dto.genre);
        let price = v.required("price", dto.price);
        let stock = v.required("stock", dto.stock);

        if let Some(price) = price {
            check_price(&mut v, price);
        }
        if let Some(stock) = stock {
            check_stock(&mut v, stock);
        }

        v.finish()?;

        match (title, author, description, genre, price, stock) {
            (Some(title), Some(author), Some(description), Some(genre), Some(price), Some(stock)) => {
                Ok(Self {
                    title,
                    author,
                    description,
                    genre,
                    price,
                    stock,
                })
            }
            _ => Err(AppError::InternalError(
                "Book validation passed with missing fields".to_string(),
            )),
        }
    }
}

/// Validated partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

impl UpdateBookParams {
    /// Validates an update request.
    ///
    /// Supplied fields follow the same rules as creation. A request that supplies no
    /// field at all is rejected.
    pub fn try_from_dto(dto: UpdateBookDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let params = Self {
            title: v.optional_text("title", dto.title),
            author: v.optional_text("author", dto.author),
            description: v.optional_text("description", dto.description),
            genre: v.optional_text("genre", dto.genre),
            price: dto.price,
            stock: dto.stock,
        };

        if let Some(price) = params.price {
            check_price(&mut v, price);
        }
        if let Some(stock) = params.stock {
            check_stock(&mut v, stock);
        }

        v.finish()?;

        if params.is_empty() {
            return Err(AppError::BadRequest(
                "At least one field must be provided".to_string(),
            ));
        }

        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.description.is_none()
            && self.genre.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}

/// Column a book listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortField {
    Title,
    Author,
    Genre,
    Price,
    Stock,
    CreatedAt,
}

impl BookSortField {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            "price" => Some(Self::Price),
            "stock" => Some(Self::Stock),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Parsed listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListParams {
    /// Trimmed search term; `None` when absent or blank.
    pub search: Option<String>,
    pub sort_by: BookSortField,
    pub sort_order: SortDirection,
    /// Zero-indexed page number.
    pub page: u64,
    pub limit: u64,
}

impl Default for BookListParams {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: BookSortField::CreatedAt,
            sort_order: SortDirection::Desc,
            page: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl BookListParams {
    /// Parses the listing query string, applying defaults for absent values.
    ///
    /// # Returns
    /// - `Ok(BookListParams)` - Parsed parameters
    /// - `Err(AppError::Validation)` - Unknown `sortBy`/`sortOrder` or `limit` outside 1..=100
    pub fn try_from_query(dto: BookQueryDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let defaults = Self::default();

        let sort_by = match dto.sort_by.as_deref() {
            None => defaults.sort_by,
            Some(value) => BookSortField::parse(value).unwrap_or_else(|| {
                v.check(
                    false,
                    "sortBy must be one of title, author, genre, price, stock, createdAt",
                );
                defaults.sort_by
            }),
        };

        let sort_order = match dto.sort_order.as_deref() {
            None => defaults.sort_order,
            Some(value) if value.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(value) if value.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => {
                v.check(false, "sortOrder must be asc or desc");
                defaults.sort_order
            }
        };

        let limit = dto.limit.unwrap_or(defaults.limit);
        v.check(
            (1..=MAX_PAGE_LIMIT).contains(&limit),
            format!("limit must be between 1 and {}", MAX_PAGE_LIMIT),
        );

        let page = dto.page.unwrap_or(defaults.page);
        let offset_in_range = page
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        v.check(offset_in_range, "page is too large for the given limit");

        v.finish()?;

        let search = dto
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            search,
            sort_by,
            sort_order,
            page,
            limit,
        })
    }
}

/// One page of a book listing with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBooks {
    pub books: Vec<Book>,
    /// Number of rows matching the search across all pages.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedBooks {
    pub fn into_dto(self) -> PaginatedBooksDto {
        PaginatedBooksDto {
            books: self.books.into_iter().map(Book::into_dto).collect(),
            pagination: PaginationDto {
                total: self.total,
                page: self.page,
                limit: self.limit,
                total_pages: self.total_pages,
            },
        }
    }
}
