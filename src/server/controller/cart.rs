use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, DeletedCountDto, ErrorDto},
        cart::{AddCartItemDto, CartItemDto, UpdateCartItemDto},
    },
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::cart::{AddCartItemParams, AddedCartItem, CartItem, UpdateCartItemParams},
        service::cart::CartService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static CART_TAG: &str = "cart";

/// GET /api/v1/cart - List the caller's cart
#[utoipa::path(
    get,
    path = "/api/v1/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart rows with book title and price", body = ApiResponseDto<Vec<CartItemDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = CartService::new(&state.db).get_cart(user.id).await?;
    let items_dto: Vec<CartItemDto> = items.into_iter().map(CartItem::into_dto).collect();

    Ok(respond(StatusCode::OK, items_dto, "Cart retrieved"))
}

/// POST /api/v1/cart - Add copies of a book to the cart
///
/// # Returns
/// - `201 Created`: A new cart row
/// - `200 OK`: The existing row for the book was incremented
/// - `400 Bad Request`: Invalid quantity or resulting quantity exceeds stock
/// - `404 Not Found`: Unknown book
#[utoipa::path(
    post,
    path = "/api/v1/cart",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 201, description = "Added to cart", body = ApiResponseDto<CartItemDto>),
        (status = 200, description = "Cart quantity incremented", body = ApiResponseDto<CartItemDto>),
        (status = 400, description = "Invalid quantity or not enough stock", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = AddCartItemParams::try_from_dto(payload)?;
    let added = CartService::new(&state.db).add(user.id, params).await?;

    Ok(match added {
        AddedCartItem::Created(item) => {
            respond(StatusCode::CREATED, item.into_dto(), "Book added to cart")
        }
        AddedCartItem::Updated(item) => {
            respond(StatusCode::OK, item.into_dto(), "Cart quantity updated")
        }
    })
}

/// PATCH /api/v1/cart/{cartId} - Set the quantity of a cart row
#[utoipa::path(
    patch,
    path = "/api/v1/cart/{cartId}",
    tag = CART_TAG,
    params(("cartId" = i32, Path, description = "Cart row id")),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Quantity replaced", body = ApiResponseDto<CartItemDto>),
        (status = 400, description = "Invalid quantity or not enough stock", body = ErrorDto),
        (status = 404, description = "No such row in the caller's cart", body = ErrorDto),
    ),
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    session: Session,
    AppPath(cart_item_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateCartItemParams::try_from_dto(payload)?;
    let item = CartService::new(&state.db)
        .update(user.id, cart_item_id, params)
        .await?;

    Ok(respond(StatusCode::OK, item.into_dto(), "Cart item updated"))
}

/// DELETE /api/v1/cart/remove/{cartId} - Remove one row from the cart
#[utoipa::path(
    delete,
    path = "/api/v1/cart/remove/{cartId}",
    tag = CART_TAG,
    params(("cartId" = i32, Path, description = "Cart row id")),
    responses(
        (status = 200, description = "Row removed"),
        (status = 404, description = "No such row in the caller's cart", body = ErrorDto),
    ),
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    session: Session,
    AppPath(cart_item_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CartService::new(&state.db)
        .remove(user.id, cart_item_id)
        .await?;

    Ok(respond(StatusCode::OK, (), "Cart item removed"))
}

/// DELETE /api/v1/cart/clear - Empty the cart
#[utoipa::path(
    delete,
    path = "/api/v1/cart/clear",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Number of rows removed", body = ApiResponseDto<DeletedCountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let deleted = CartService::new(&state.db).clear(user.id).await?;

    Ok(respond(
        StatusCode::OK,
        DeletedCountDto { deleted },
        "Cart cleared",
    ))
}
