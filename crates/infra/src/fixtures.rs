//! Seed fixtures for development and black-box tests.

use std::sync::Arc;

use anyhow::Context;

use bazaar_auth::{Account, AccountStore, PasswordHasher, Role};
use bazaar_cart::{CartStore, LineInsert};
use bazaar_catalog::{Category, CategoryStore, Product, ProductDraft, ProductStore};
use bazaar_core::{AccountId, CartId, CategoryId, ProductId};

/// Ids of the seeded records, for tests that need to reference them.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub jack: AccountId,
    pub bob: AccountId,
    pub apple: AccountId,
    pub glaxo: AccountId,
    pub categories: Vec<CategoryId>,
    pub ipad: ProductId,
    pub crocin: ProductId,
    pub harry_potter: ProductId,
    pub jack_cart: CartId,
    pub bob_cart: CartId,
}

/// Every seeded account shares this password.
pub const SEED_PASSWORD: &str = "pass_word";

/// Load the development dataset: two consumers, two sellers, five categories,
/// three products, and a pre-filled cart for `jack` (one Crocin line,
/// quantity 2, total 20.0).
pub fn seed(
    accounts: &Arc<dyn AccountStore>,
    categories: &Arc<dyn CategoryStore>,
    products: &Arc<dyn ProductStore>,
    carts: &Arc<dyn CartStore>,
    hasher: &dyn PasswordHasher,
) -> anyhow::Result<SeedData> {
    // One hash per account: every PHC string carries its own salt.
    let hash = || {
        hasher
            .hash(SEED_PASSWORD)
            .map_err(|e| anyhow::anyhow!("hashing seed password: {e}"))
    };

    let jack = Account::new("jack", hash()?, Role::Consumer);
    let bob = Account::new("bob", hash()?, Role::Consumer);
    let apple = Account::new("apple", hash()?, Role::Seller);
    let glaxo = Account::new("glaxo", hash()?, Role::Seller);
    let (jack_id, bob_id, apple_id, glaxo_id) = (jack.id, bob.id, apple.id, glaxo.id);
    for account in [jack, bob, apple, glaxo] {
        accounts.insert(account)?;
    }

    let mut category_ids = Vec::new();
    for name in ["Fashion", "Electronics", "Books", "Groceries", "Medicines"] {
        let category = Category::new(name);
        category_ids.push(category.id);
        categories.insert(category)?;
    }
    let electronics = category_ids[1];
    let books = category_ids[2];
    let medicines = category_ids[4];

    let ipad = Product::new(
        ProductDraft {
            name: "Apple iPad 10.2 8th Gen WiFi iOS Tablet".to_string(),
            price: 29190.0,
            category_id: electronics,
        },
        apple_id,
    );
    let crocin = Product::new(
        ProductDraft {
            name: "Crocin pain relief tablet".to_string(),
            price: 10.0,
            category_id: medicines,
        },
        glaxo_id,
    );
    let harry_potter = Product::new(
        ProductDraft {
            name: "Harry Potter noval".to_string(),
            price: 10.0,
            category_id: books,
        },
        apple_id,
    );
    let (ipad_id, crocin_id, harry_potter_id) = (ipad.id, crocin.id, harry_potter.id);
    products.insert(ipad)?;
    products.insert(crocin.clone())?;
    products.insert(harry_potter)?;

    let jack_cart = carts.find_or_create_by_owner(jack_id)?;
    match carts.insert_line(jack_cart.cart_id, &crocin, 2)? {
        LineInsert::Inserted(view) => {
            tracing::debug!(total = view.total_amount, "seeded jack's cart");
        }
        LineInsert::DuplicateLine => {
            anyhow::bail!("seed cart unexpectedly already held the product")
        }
    }
    let bob_cart = carts
        .find_or_create_by_owner(bob_id)
        .context("materializing bob's empty cart")?;

    tracing::info!("seed fixtures loaded");

    Ok(SeedData {
        jack: jack_id,
        bob: bob_id,
        apple: apple_id,
        glaxo: glaxo_id,
        categories: category_ids,
        ipad: ipad_id,
        crocin: crocin_id,
        harry_potter: harry_potter_id,
        jack_cart: jack_cart.cart_id,
        bob_cart: bob_cart.cart_id,
    })
}
