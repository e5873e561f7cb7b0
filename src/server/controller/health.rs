use axum::response::IntoResponse;

/// GET / - Liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain"),
    ),
)]
pub async fn root() -> impl IntoResponse {
    "Hello world"
}
