use axum::Router;

pub mod common;
pub mod consumer;
pub mod public;
pub mod seller;
pub mod system;

/// Router for all authenticated endpoints, nested under `/api/auth`.
pub fn router() -> Router {
    Router::new()
        .nest("/consumer", consumer::router())
        .nest("/seller", seller::router())
}
