use std::collections::HashMap;
use std::sync::RwLock;

use bazaar_auth::{Account, AccountStore};
use bazaar_core::{AccountId, StoreError, StoreResult};

/// In-memory identity store, keyed by username (the unique key).
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<String, Account>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("account store lock poisoned"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Account>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("account store lock poisoned"))
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
        Ok(self.read()?.get(username).cloned())
    }

    fn find_by_id(&self, id: AccountId) -> StoreResult<Option<Account>> {
        Ok(self.read()?.values().find(|a| a.id == id).cloned())
    }

    fn exists_by_username(&self, username: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(username))
    }

    fn insert(&self, account: Account) -> StoreResult<()> {
        self.write()?.insert(account.username.clone(), account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_auth::Role;

    #[test]
    fn round_trips_by_username_and_id() {
        let store = InMemoryAccountStore::new();
        let account = Account::new("jack", "hash", Role::Consumer);
        let id = account.id;
        store.insert(account.clone()).unwrap();

        assert_eq!(store.find_by_username("jack").unwrap(), Some(account.clone()));
        assert_eq!(store.find_by_id(id).unwrap(), Some(account));
        assert!(store.exists_by_username("jack").unwrap());
        assert!(!store.exists_by_username("jill").unwrap());
    }
}
