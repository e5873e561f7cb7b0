//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every response body
//! produced here is an [`ErrorDto`] envelope.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400, 401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failure binding the listener or serving connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was missing, was not JSON, or did not match the expected shape.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-numeric id.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Query string could not be parsed.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request with one entry per problem in `errors`.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Caller is authenticated but may not touch the resource.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// Request lost a race against a concurrent update, e.g. stock changed repeatedly
    /// while an order was being placed.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Builds an error envelope response.
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    errors: Vec<String>,
) -> Response {
    (
        status,
        Json(ErrorDto::new(status.as_u16(), message, errors)),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and envelope body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `BadRequest` and extractor rejections
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => {
                error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
            }
            Self::JsonRejection(rejection) => error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                vec![rejection.body_text()],
            ),
            Self::PathRejection(rejection) => error_response(
                StatusCode::BAD_REQUEST,
                "Invalid path parameter",
                vec![rejection.body_text()],
            ),
            Self::QueryRejection(rejection) => error_response(
                StatusCode::BAD_REQUEST,
                "Invalid query parameter",
                vec![rejection.body_text()],
            ),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg, Vec::new()),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg, Vec::new()),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg, Vec::new()),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg, Vec::new()),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Vec::new(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            Vec::new(),
        )
    }
}
