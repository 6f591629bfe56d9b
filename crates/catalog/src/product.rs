use serde::{Deserialize, Serialize};

use bazaar_core::{AccountId, CategoryId, DomainError, DomainResult, ProductId, StoreResult};

/// A product listing.
///
/// # Invariants
/// - `price` is non-negative and finite.
/// - `seller_id` always references the owning seller; scoped operations force
///   it back to the acting principal, so ownership cannot be transferred
///   through a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub seller_id: AccountId,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(draft: ProductDraft, seller_id: AccountId) -> Self {
        Self {
            id: ProductId::new(),
            name: draft.name,
            price: draft.price,
            seller_id,
            category_id: draft.category_id,
        }
    }
}

/// Caller-supplied product fields, before ownership is assigned.
///
/// The referenced category is trusted as given: existence is deliberately not
/// validated on create/update (observed behavior of the system this models).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl ProductDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(())
    }
}

/// Product storage port.
///
/// The `*_owned` methods are scoped lookups: parameterized by both the
/// product id and the owner id, so existence and ownership misses are the
/// same `None` to callers.
pub trait ProductStore: Send + Sync {
    fn insert(&self, product: Product) -> StoreResult<()>;

    /// Global (unscoped) lookup, used by the cart engine.
    fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

    fn list_by_seller(&self, seller_id: AccountId) -> StoreResult<Vec<Product>>;

    fn find_owned(&self, seller_id: AccountId, id: ProductId) -> StoreResult<Option<Product>>;

    /// Overwrite an existing product record by id.
    fn update(&self, product: Product) -> StoreResult<()>;

    fn delete_owned(&self, seller_id: AccountId, id: ProductId) -> StoreResult<Option<Product>>;

    /// Case-insensitive substring match on product name or category name.
    fn search(&self, keyword: &str) -> StoreResult<Vec<Product>>;
}
