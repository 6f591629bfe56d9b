//! Account model and the identity-store port.

use serde::{Deserialize, Serialize};

use bazaar_core::{AccountId, StoreResult};

use crate::Role;

/// A registered account.
///
/// # Invariants
/// - `username` is unique across the store.
/// - Accounts are created at registration/seed time and never deleted in this
///   core's scope; everything except the password hash is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    /// PHC-format password hash. Never serialized to API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

impl Account {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: AccountId::new(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

/// Identity-store port: lookup of account records.
///
/// Implementations provide row-level atomic read/write; callers treat any
/// `StoreError` as fatal to the request.
pub trait AccountStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>>;

    fn find_by_id(&self, id: AccountId) -> StoreResult<Option<Account>>;

    fn exists_by_username(&self, username: &str) -> StoreResult<bool>;

    /// Insert a new account. Fails the uniqueness invariant as a store-level
    /// conflict only at seed/registration time, which is outside this core's
    /// request paths.
    fn insert(&self, account: Account) -> StoreResult<()>;
}
