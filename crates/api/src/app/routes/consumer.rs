//! Consumer cart endpoints.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use bazaar_auth::Role;
use bazaar_cart::CartLineUpdate;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route(
        "/cart",
        get(get_cart)
            .post(add_product)
            .put(update_line)
            .delete(remove_product),
    )
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Consumer) {
        return response;
    }

    match services.cart.get_cart(ctx.principal()) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Json(body): Json<dto::AddCartProductRequest>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Consumer) {
        return response;
    }

    match services.cart.add_product(ctx.principal(), body.product_id) {
        Ok(_view) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "Product added to cart" })),
        )
            .into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn update_line(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Json(body): Json<dto::UpdateCartLineRequest>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Consumer) {
        return response;
    }

    let update = CartLineUpdate {
        line_id: body.line_id,
        quantity: body.quantity,
    };
    match services.cart.update_line(ctx.principal(), update) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Json(body): Json<dto::RemoveCartProductRequest>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Consumer) {
        return response;
    }

    match services.cart.remove_product(ctx.principal(), body.product_id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}
