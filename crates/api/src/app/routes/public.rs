//! Unauthenticated endpoints: login and product search.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/product/search", get(search))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.auth.authenticate(&body.username, &body.password) {
        Ok(token) => (
            StatusCode::OK,
            Json(dto::JwtResponse { token, status: 200 }),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let keyword = query.keyword.unwrap_or_default();
    match services.catalog.search(&keyword) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
