//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bazaar_auth::AuthError;
use bazaar_cart::CartError;
use bazaar_catalog::CatalogError;
use bazaar_core::DomainError;

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Invalid username or password",
        ),
        AuthError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "unauthenticated")
        }
        AuthError::PrincipalNotFound => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "unauthenticated")
        }
        AuthError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
        AuthError::Store(e) => store_error(e),
    }
}

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        // Principal no longer resolves: treated as an auth failure, not a 404.
        CatalogError::SellerNotFound => {
            json_error(StatusCode::UNAUTHORIZED, "seller_not_found", "Seller not found")
        }
        CatalogError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "Product not found")
        }
        CatalogError::Domain(e) => domain_error(e),
        CatalogError::Store(e) => store_error(e),
    }
}

pub fn cart_error_to_response(err: CartError) -> axum::response::Response {
    match err {
        CartError::UserNotFound => {
            json_error(StatusCode::NOT_FOUND, "user_not_found", "User not found")
        }
        CartError::CartNotFound => {
            json_error(StatusCode::NOT_FOUND, "cart_not_found", "Cart not found")
        }
        CartError::ProductNotFound => {
            json_error(StatusCode::NOT_FOUND, "product_not_found", "Product not found")
        }
        CartError::DuplicateProduct => json_error(
            StatusCode::CONFLICT,
            "duplicate_product",
            "Product already exists in cart",
        ),
        CartError::Unimplemented => json_error(
            StatusCode::NOT_IMPLEMENTED,
            "not_implemented",
            "operation not implemented",
        ),
        CartError::Store(e) => store_error(e),
    }
}

fn domain_error(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

/// Store faults are request-fatal and deliberately opaque to the client.
fn store_error(err: bazaar_core::StoreError) -> axum::response::Response {
    tracing::error!("store failure: {err}");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        "internal storage failure",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
