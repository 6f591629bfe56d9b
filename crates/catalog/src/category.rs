use serde::{Deserialize, Serialize};

use bazaar_core::{CategoryId, StoreResult};

/// A product category.
///
/// # Invariants
/// - `name` is unique across the store.
/// - Categories are seeded at bootstrap and not otherwise mutated by this
///   core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }
}

/// Category storage port.
pub trait CategoryStore: Send + Sync {
    fn insert(&self, category: Category) -> StoreResult<()>;

    fn find_by_id(&self, id: CategoryId) -> StoreResult<Option<Category>>;

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>>;
}
