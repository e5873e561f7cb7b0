use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto},
        book::{BookDto, BookQueryDto, CreateBookDto, PaginatedBooksDto, UpdateBookDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::book::{BookListParams, CreateBookParams, UpdateBookParams},
        service::book::BookService,
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

pub static BOOK_TAG: &str = "books";

/// POST /api/v1/books/add-book - Add a book to the catalog
///
/// # Authentication
/// Requires the ADMIN role
///
/// # Returns
/// - `201 Created`: The new book
/// - `400 Bad Request`: One entry in `errors` per invalid field
#[utoipa::path(
    post,
    path = "/api/v1/books/add-book",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book created", body = ApiResponseDto<BookDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateBookParams::try_from_dto(payload)?;
    let book = BookService::new(&state.db).create(params).await?;

    Ok(respond(
        StatusCode::CREATED,
        book.into_dto(),
        "Book created successfully",
    ))
}

/// PUT /api/v1/books/update/{bookId} - Update some fields of a book
///
/// # Authentication
/// Requires the ADMIN role
#[utoipa::path(
    put,
    path = "/api/v1/books/update/{bookId}",
    tag = BOOK_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Book updated", body = ApiResponseDto<BookDto>),
        (status = 400, description = "Validation failed or nothing to update", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateBookParams::try_from_dto(payload)?;
    let book = BookService::new(&state.db).update(book_id, params).await?;

    Ok(respond(
        StatusCode::OK,
        book.into_dto(),
        "Book updated successfully",
    ))
}

/// DELETE /api/v1/books/delete/{bookId} - Remove a book from the catalog
///
/// # Authentication
/// Requires the ADMIN role
///
/// # Returns
/// - `200 OK`: The deleted book
/// - `404 Not Found`: Unknown id
#[utoipa::path(
    delete,
    path = "/api/v1/books/delete/{bookId}",
    tag = BOOK_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponseDto<BookDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let book = BookService::new(&state.db).delete(book_id).await?;

    Ok(respond(
        StatusCode::OK,
        book.into_dto(),
        "Book deleted successfully",
    ))
}

/// GET /api/v1/books/get-all-books - Search, sort and page through the catalog
///
/// # Query Parameters
/// - `search`: Substring of title, author or genre (case-insensitive)
/// - `sortBy` / `sortOrder`: Ordering, defaults to newest first
/// - `page` / `limit`: Zero-indexed page and page size (default 10, max 100)
#[utoipa::path(
    get,
    path = "/api/v1/books/get-all-books",
    tag = BOOK_TAG,
    params(BookQueryDto),
    responses(
        (status = 200, description = "One page of books", body = ApiResponseDto<PaginatedBooksDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_all_books(
    State(state): State<AppState>,
    session: Session,
    AppQuery(query): AppQuery<BookQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = BookListParams::try_from_query(query)?;
    let books = BookService::new(&state.db).get_paginated(params).await?;

    Ok(respond(
        StatusCode::OK,
        books.into_dto(),
        "Books retrieved successfully",
    ))
}

/// GET /api/v1/books/get-book/{bookId} - Fetch one book
#[utoipa::path(
    get,
    path = "/api/v1/books/get-book/{bookId}",
    tag = BOOK_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = ApiResponseDto<BookDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let book = BookService::new(&state.db).get_by_id(book_id).await?;

    Ok(respond(
        StatusCode::OK,
        book.into_dto(),
        "Book retrieved successfully",
    ))
}
