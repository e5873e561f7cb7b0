use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapped around every successful response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseDto<T> {
    /// Mirrors the HTTP status code of the response.
    pub status_code: u16,
    pub data: T,
    pub message: String,
    /// Always `true`.
    pub success: bool,
}

impl<T> ApiResponseDto<T> {
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// Failure envelope returned for every error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Mirrors the HTTP status code of the response.
    pub status_code: u16,
    pub message: String,
    /// Always `false`.
    pub success: bool,
    /// Individual problems, e.g. one entry per invalid field. May be empty.
    pub errors: Vec<String>,
}

impl ErrorDto {
    pub fn new(status_code: u16, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            success: false,
            errors,
        }
    }
}

/// Result of a bulk delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedCountDto {
    pub deleted: u64,
}
