//! Cart storage port.

use bazaar_catalog::Product;
use bazaar_core::{AccountId, CartId, StoreResult};

use crate::cart::CartView;

/// Outcome of an atomic line insert.
#[derive(Debug, Clone, PartialEq)]
pub enum LineInsert {
    /// Line inserted; the view reflects the recomputed total.
    Inserted(CartView),

    /// A line for this (cart, product) pair already exists. No state changed.
    DuplicateLine,
}

/// Storage port for carts and their lines.
///
/// `insert_line` is the concurrency-sensitive operation: implementations must
/// perform the duplicate check, the line insert, and the total recomputation
/// under a single atomic boundary, so two concurrent adds of the same
/// (cart, product) pair can never both succeed.
pub trait CartStore: Send + Sync {
    /// Fetch the cart owned by `owner_id`, joined with its lines.
    /// `None` if the cart was never materialized.
    fn find_by_owner(&self, owner_id: AccountId) -> StoreResult<Option<CartView>>;

    /// Materialize the owner's cart if absent (total 0, no lines).
    fn find_or_create_by_owner(&self, owner_id: AccountId) -> StoreResult<CartView>;

    /// Atomically insert a line for `product` unless one already exists, and
    /// recompute the cart total as the sum of line subtotals.
    fn insert_line(
        &self,
        cart_id: CartId,
        product: &Product,
        quantity: u32,
    ) -> StoreResult<LineInsert>;

    /// Delete a cart and, in the same step, all of its lines.
    fn delete_cart(&self, cart_id: CartId) -> StoreResult<()>;
}
