//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: store/service wiring and fixture seeding
//! - `routes/`: HTTP routes + handlers (one file per surface area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use chrono::Duration;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(
    jwt_secret: &[u8],
    token_ttl: Duration,
    seed_fixtures: bool,
) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(jwt_secret, token_ttl, seed_fixtures)?);
    let auth_state = middleware::AuthState {
        auth: services.auth.clone(),
    };

    // Authenticated routes: bearer token → resolved principal.
    let protected = routes::router()
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    let app = Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/public", routes::public::router())
        .nest("/api/auth", protected)
        .layer(ServiceBuilder::new().layer(Extension(services)));

    Ok(app)
}
