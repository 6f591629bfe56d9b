//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};

use bazaar_catalog::ProductDraft;
use bazaar_core::{CartLineId, CategoryId, ProductId};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response shape kept from the observed surface: the status code is
/// mirrored into the body.
#[derive(Debug, Serialize)]
pub struct JwtResponse {
    pub token: String,
    pub status: u16,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddCartProductRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartLineRequest {
    pub line_id: CartLineId,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct RemoveCartProductRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            price: self.price,
            category_id: self.category_id,
        }
    }
}

/// Update carries the target id in the body; the path has no id segment.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl UpdateProductRequest {
    pub fn into_parts(self) -> (ProductId, ProductDraft) {
        (
            self.id,
            ProductDraft {
                name: self.name,
                price: self.price,
                category_id: self.category_id,
            },
        )
    }
}
