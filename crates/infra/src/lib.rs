//! Infrastructure layer: storage adapters and seed fixtures.
//!
//! Everything here implements the storage ports declared by the domain
//! crates. The only adapters today are in-memory ones; a database-backed
//! set would slot in behind the same traits.

pub mod fixtures;
pub mod memory;

pub use memory::{InMemoryAccountStore, InMemoryCartStore, InMemoryCategoryStore, InMemoryProductStore};
