use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the caller's session.
    ///
    /// Results in 401 Unauthorized.
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    ///
    /// Results in 401 Unauthorized, the session is treated as stale.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a permission the endpoint requires.
    ///
    /// Results in 403 Forbidden. The inner message is logged, not returned.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Email unknown or password mismatch during login.
    ///
    /// Both cases share one message so a caller cannot tell which emails exist.
    /// Results in 400 Bad Request.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that already belongs to an account.
    ///
    /// Results in 400 Bad Request.
    #[error("User already exists")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `UserNotInDatabase` → 401 Unauthorized with "Unauthorized"
/// - `AccessDenied` → 403 Forbidden with "Forbidden"
/// - `InvalidCredentials` → 400 Bad Request with "Invalid credentials"
/// - `EmailTaken` → 400 Bad Request with "User already exists"
///
/// Session and permission failures are logged at debug level while the client receives a
/// generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized", Vec::new())
            }
            Self::AccessDenied(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::FORBIDDEN, "Forbidden", Vec::new())
            }
            Self::InvalidCredentials | Self::EmailTaken => {
                error_response(StatusCode::BAD_REQUEST, self.to_string(), Vec::new())
            }
        }
    }
}
