//! In-memory storage adapters.
//!
//! Each adapter keeps its state behind a single `RwLock`, which is what makes
//! the port-level atomicity contracts hold: any write takes the whole lock,
//! so check-then-insert sequences inside one call cannot interleave.

mod account;
mod cart;
mod catalog;

pub use account::InMemoryAccountStore;
pub use cart::InMemoryCartStore;
pub use catalog::{InMemoryCategoryStore, InMemoryProductStore};
