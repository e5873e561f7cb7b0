use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto},
        user::{ApiKeyDto, LoginDto, LoginResponseDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParams, RegisterUserParams},
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/v1/auth/register - Create an account
///
/// # Returns
/// - `201 Created`: The new identity, without the password hash
/// - `400 Bad Request`: Missing or blank fields, or the email is taken
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponseDto<UserDto>),
        (status = 400, description = "Invalid fields or user already exists", body = ErrorDto),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::try_from_dto(payload)?;

    let user = AuthService::new(&state.db).register(params).await?;

    Ok(respond(
        StatusCode::CREATED,
        user.into_dto(),
        "User registered successfully",
    ))
}

/// POST /api/v1/auth/login - Log in with email and password
///
/// On success the session id is cycled and the user id stored, which makes the session
/// layer send the signed `token` cookie.
///
/// # Returns
/// - `200 OK`: `{user: {name, email, role}}`
/// - `400 Bad Request`: Missing fields or invalid credentials; no cookie is set
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = ApiResponseDto<LoginResponseDto>),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::try_from_dto(payload)?;

    let user = AuthService::new(&state.db).login(params).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle().await?;
    auth_session.set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok(respond(
        StatusCode::OK,
        LoginResponseDto {
            user: user.into_login_dto(),
        },
        "Login successful",
    ))
}

/// GET /api/v1/auth/logout - End the current session
///
/// # Returns
/// - `200 OK`: Session deleted and cookie cleared, `data` is null
/// - `401 Unauthorized`: Not logged in
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthSession::new(&session).flush().await?;

    tracing::info!("User {} logged out", user.id);

    Ok(respond(StatusCode::OK, (), "Logout successful"))
}

/// GET /api/v1/auth/profile - Current user's identity
#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponseDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(respond(StatusCode::OK, user.into_dto(), "Profile retrieved"))
}

/// POST /api/v1/auth/api-key - Issue an API key to the current user
///
/// # Returns
/// - `201 Created`: `{id, key, userId, createdAt}`
/// - `401 Unauthorized`: Not logged in
#[utoipa::path(
    post,
    path = "/api/v1/auth/api-key",
    tag = AUTH_TAG,
    responses(
        (status = 201, description = "API key issued", body = ApiResponseDto<ApiKeyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn create_api_key(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let api_key = AuthService::new(&state.db).issue_api_key(user.id).await?;

    Ok(respond(
        StatusCode::CREATED,
        api_key.into_dto(),
        "API key created",
    ))
}
