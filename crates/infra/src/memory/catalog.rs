use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bazaar_catalog::{Category, CategoryStore, Product, ProductStore};
use bazaar_core::{AccountId, CategoryId, ProductId, StoreError, StoreResult};

fn poisoned(what: &str) -> StoreError {
    StoreError::unavailable(format!("{what} lock poisoned"))
}

/// In-memory category store.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    inner: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn insert(&self, category: Category) -> StoreResult<()> {
        self.inner
            .write()
            .map_err(|_| poisoned("category store"))?
            .insert(category.id, category);
        Ok(())
    }

    fn find_by_id(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| poisoned("category store"))?
            .get(&id)
            .cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| poisoned("category store"))?
            .values()
            .find(|c| c.name == name)
            .cloned())
    }
}

/// In-memory product store.
///
/// Holds a reference to the category store so `search` can match against
/// category names as well as product names.
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
    categories: Arc<dyn CategoryStore>,
}

impl InMemoryProductStore {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            categories,
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<ProductId, Product>>> {
        self.inner.read().map_err(|_| poisoned("product store"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<ProductId, Product>>> {
        self.inner.write().map_err(|_| poisoned("product store"))
    }
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, product: Product) -> StoreResult<()> {
        self.write()?.insert(product.id, product);
        Ok(())
    }

    fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn list_by_seller(&self, seller_id: AccountId) -> StoreResult<Vec<Product>> {
        Ok(self
            .read()?
            .values()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect())
    }

    fn find_owned(&self, seller_id: AccountId, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self
            .read()?
            .get(&id)
            .filter(|p| p.seller_id == seller_id)
            .cloned())
    }

    fn update(&self, product: Product) -> StoreResult<()> {
        self.write()?.insert(product.id, product);
        Ok(())
    }

    fn delete_owned(&self, seller_id: AccountId, id: ProductId) -> StoreResult<Option<Product>> {
        let mut map = self.write()?;
        if map.get(&id).is_some_and(|p| p.seller_id == seller_id) {
            Ok(map.remove(&id))
        } else {
            Ok(None)
        }
    }

    fn search(&self, keyword: &str) -> StoreResult<Vec<Product>> {
        let needle = keyword.to_lowercase();
        let mut hits = Vec::new();
        for product in self.read()?.values() {
            if product.name.to_lowercase().contains(&needle) {
                hits.push(product.clone());
                continue;
            }
            let category_hit = self
                .categories
                .find_by_id(product.category_id)?
                .is_some_and(|c| c.name.to_lowercase().contains(&needle));
            if category_hit {
                hits.push(product.clone());
            }
        }
        Ok(hits)
    }
}
