use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto},
        order::{OrderDto, PlaceOrderDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{Order, PlaceOrderParams},
        service::order::OrderService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static ORDER_TAG: &str = "orders";

/// POST /api/v1/orders - Place an order
///
/// Stock for every line is reserved in one transaction; if any line fails nothing is
/// changed.
///
/// # Returns
/// - `201 Created`: The order with its items
/// - `400 Bad Request`: Empty order, invalid quantity, or insufficient stock
/// - `404 Not Found`: A line references an unknown book
/// - `409 Conflict`: Stock kept changing concurrently
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    request_body = PlaceOrderDto,
    responses(
        (status = 201, description = "Order placed", body = ApiResponseDto<OrderDto>),
        (status = 400, description = "Invalid order or insufficient stock", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 409, description = "Concurrent stock change", body = ErrorDto),
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<PlaceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = PlaceOrderParams::try_from_dto(payload)?;
    let order = OrderService::new(&state.db).place(user.id, params).await?;

    Ok(respond(
        StatusCode::CREATED,
        order.into_dto(),
        "Order placed successfully",
    ))
}

/// GET /api/v1/orders - List the caller's orders, newest first
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Caller's orders", body = ApiResponseDto<Vec<OrderDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db).get_orders(user.id).await?;
    let orders_dto: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok(respond(StatusCode::OK, orders_dto, "Orders retrieved"))
}

/// GET /api/v1/orders/{orderId} - Fetch one of the caller's orders
#[utoipa::path(
    get,
    path = "/api/v1/orders/{orderId}",
    tag = ORDER_TAG,
    params(("orderId" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = ApiResponseDto<OrderDto>),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    AppPath(order_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_order(user.id, order_id)
        .await?;

    Ok(respond(StatusCode::OK, order.into_dto(), "Order retrieved"))
}
