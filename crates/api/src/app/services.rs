//! Service wiring: stores, hashing, tokens, and the domain services.

use std::sync::Arc;

use chrono::Duration;

use bazaar_auth::{
    AccountStore, Argon2PasswordHasher, AuthService, Hs256TokenService, PasswordHasher,
};
use bazaar_cart::{CartService, CartStore};
use bazaar_catalog::{CatalogService, CategoryStore, ProductStore};
use bazaar_infra::fixtures;
use bazaar_infra::memory::{
    InMemoryAccountStore, InMemoryCartStore, InMemoryCategoryStore, InMemoryProductStore,
};

/// Everything the handlers need, behind one `Arc` in request extensions.
pub struct AppServices {
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub cart: CartService,
}

/// Wire the in-memory stores into the domain services.
///
/// `seed_fixtures` loads the development dataset; black-box tests rely on it.
pub fn build_services(
    jwt_secret: &[u8],
    token_ttl: Duration,
    seed_fixtures: bool,
) -> anyhow::Result<AppServices> {
    let accounts: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
    let categories: Arc<dyn CategoryStore> = Arc::new(InMemoryCategoryStore::new());
    let products: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new(categories.clone()));
    let carts: Arc<dyn CartStore> = Arc::new(InMemoryCartStore::new());

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    if seed_fixtures {
        fixtures::seed(&accounts, &categories, &products, &carts, hasher.as_ref())?;
    }

    let tokens = Arc::new(Hs256TokenService::new(jwt_secret, token_ttl));
    let auth = AuthService::new(accounts.clone(), hasher, tokens);
    let catalog = CatalogService::new(accounts.clone(), products.clone());
    let cart = CartService::new(accounts, products, carts);

    Ok(AppServices {
        auth,
        catalog,
        cart,
    })
}
