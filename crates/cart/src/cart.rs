use serde::{Deserialize, Serialize};

use bazaar_catalog::Product;
use bazaar_core::{AccountId, CartId, CartLineId, ProductId};

/// A shopping cart record.
///
/// # Invariants
/// - Exactly one cart per owning account; created lazily on the first cart
///   mutation (never on read).
/// - `total_amount` equals the sum of `price * quantity` over the cart's
///   lines and is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub total_amount: f64,
    pub owner_id: AccountId,
}

impl Cart {
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            id: CartId::new(),
            total_amount: 0.0,
            owner_id,
        }
    }
}

/// One row binding a cart to a single product with a quantity.
///
/// At most one line exists per (cart, product) pair; the cart exclusively
/// owns its lines (cart deletion cascades).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A cart joined with its lines, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub cart_id: CartId,
    pub total_amount: f64,
    pub lines: Vec<CartLineView>,
}

impl CartView {
    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|l| l.product.id == product_id)
    }
}

/// A cart line joined with its product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: CartLineId,
    pub product: Product,
    pub quantity: u32,
}
