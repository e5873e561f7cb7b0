//! HTTP handlers.
//!
//! Each handler runs the `AuthGuard` first where the route requires it, converts the
//! request DTO into validated parameters, calls a service and wraps the result in the
//! success envelope. Errors bubble up as `AppError` and render as the error envelope.

pub mod auth;
pub mod book;
pub mod cart;
pub mod health;
pub mod order;
pub mod review;

#[cfg(test)]
mod test;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::api::ApiResponseDto;

/// Wraps `data` in the success envelope with a matching `statusCode`.
pub(crate) fn respond<T: Serialize>(status: StatusCode, data: T, message: &str) -> Response {
    (
        status,
        Json(ApiResponseDto::new(status.as_u16(), data, message)),
    )
        .into_response()
}
