use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        book::{self, BOOK_TAG},
        cart::{self, CART_TAG},
        health,
        order::{self, ORDER_TAG},
        review::{self, REVIEW_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookstore API", description = "Bookstore e-commerce REST backend"),
    tags(
        (name = AUTH_TAG, description = "Registration, login and API keys"),
        (name = BOOK_TAG, description = "Book catalog"),
        (name = CART_TAG, description = "Shopping cart"),
        (name = ORDER_TAG, description = "Order placement and history"),
        (name = REVIEW_TAG, description = "Book reviews"),
    )
)]
struct ApiDoc;

/// Registers every route together with its OpenAPI operation.
///
/// Handlers sharing a path must be registered in the same `routes!` call.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::profile))
        .routes(routes!(auth::create_api_key))
        .routes(routes!(book::create_book))
        .routes(routes!(book::update_book))
        .routes(routes!(book::delete_book))
        .routes(routes!(book::get_all_books))
        .routes(routes!(book::get_book))
        .routes(routes!(cart::get_cart, cart::add_to_cart))
        .routes(routes!(cart::update_cart_item))
        .routes(routes!(cart::remove_cart_item))
        .routes(routes!(cart::clear_cart))
        .routes(routes!(order::place_order, order::get_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(
            review::add_review,
            review::get_reviews,
            review::delete_reviews
        ))
}

/// Builds the application router with the Swagger UI at `/swagger-ui`.
///
/// Session, tracing and CORS layers are applied by the caller.
pub fn router(state: AppState) -> Router {
    let (router, openapi) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .with_state(state)
}
