use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, DeletedCountDto, ErrorDto},
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::{CreateReviewParams, Review},
        service::review::ReviewService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static REVIEW_TAG: &str = "reviews";

/// POST /api/v1/reviews/book/{bookId} - Review a book
#[utoipa::path(
    post,
    path = "/api/v1/reviews/book/{bookId}",
    tag = REVIEW_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponseDto<ReviewDto>),
        (status = 400, description = "Rating outside 1 to 5 or blank comment", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateReviewParams::try_from_dto(payload)?;
    let review = ReviewService::new(&state.db)
        .add(book_id, user.id, params)
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        review.into_dto(),
        "Review added successfully",
    ))
}

/// GET /api/v1/reviews/book/{bookId} - List a book's reviews, newest first
#[utoipa::path(
    get,
    path = "/api/v1/reviews/book/{bookId}",
    tag = REVIEW_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Reviews of the book", body = ApiResponseDto<Vec<ReviewDto>>),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db).get_for_book(book_id).await?;
    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok(respond(StatusCode::OK, reviews_dto, "Reviews retrieved"))
}

/// DELETE /api/v1/reviews/book/{bookId} - Delete every review of a book
///
/// # Authentication
/// Requires the ADMIN role
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/book/{bookId}",
    tag = REVIEW_TAG,
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Number of reviews removed", body = ApiResponseDto<DeletedCountDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn delete_reviews(
    State(state): State<AppState>,
    session: Session,
    AppPath(book_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = ReviewService::new(&state.db)
        .delete_for_book(book_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        DeletedCountDto { deleted },
        "Reviews deleted successfully",
    ))
}
