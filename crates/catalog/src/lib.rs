//! `bazaar-catalog` — seller-scoped product listings and public search.
//!
//! Products are owned exclusively by their seller: every mutating operation
//! is parameterized by the resolved principal, and scoped lookups make
//! "missing" and "owned by someone else" indistinguishable to the caller.

pub mod category;
pub mod product;
pub mod service;

pub use category::{Category, CategoryStore};
pub use product::{Product, ProductDraft, ProductStore};
pub use service::{CatalogError, CatalogService};
