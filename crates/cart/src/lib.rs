//! `bazaar-cart` — the cart-consistency engine.
//!
//! Maintains the one-to-one user→cart relationship, cart lines, and the
//! running total. The two invariants with teeth live here:
//!
//! - at most one line per (cart, product) pair — a duplicate add is a
//!   client-visible conflict, never a quantity merge;
//! - the cart total always equals the sum of line subtotals, recomputed
//!   inside the store's atomic insert.

pub mod cart;
pub mod service;
pub mod store;

pub use cart::{Cart, CartLine, CartLineView, CartView};
pub use service::{CartError, CartLineUpdate, CartService};
pub use store::{CartStore, LineInsert};
