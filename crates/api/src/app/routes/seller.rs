//! Seller catalog endpoints.
//!
//! Paths are nested under `/api/auth/seller`. The create route keeps the
//! doubled `/seller/product` segment from the observed surface, so the full
//! path is `POST /api/auth/seller/seller/product`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use bazaar_auth::Role;
use bazaar_core::ProductId;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/seller/product", post(create_product))
        .route("/product", get(list_products).put(update_product))
        .route("/product/:id", get(get_product).delete(delete_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Seller) {
        return response;
    }

    match services.catalog.create(ctx.principal(), body.into_draft()) {
        Ok(product) => {
            let location = format!("/api/auth/seller/product/{}", product.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(product),
            )
                .into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Seller) {
        return response;
    }

    match services.catalog.list_owned(ctx.principal()) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Seller) {
        return response;
    }

    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };
    match services.catalog.get_owned(ctx.principal(), product_id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Seller) {
        return response;
    }

    let (product_id, draft) = body.into_parts();
    match services.catalog.update(ctx.principal(), product_id, draft) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(response) = common::guard(&ctx, Role::Seller) {
        return response;
    }

    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };
    match services.catalog.delete(ctx.principal(), product_id) {
        Ok(removed) => (StatusCode::OK, Json(removed)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
