//! The cart engine: add-product state machine and its invariants.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bazaar_auth::{AccountStore, Principal};
use bazaar_catalog::ProductStore;
use bazaar_core::{CartLineId, ProductId, StoreError};

use crate::cart::CartView;
use crate::store::{CartStore, LineInsert};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CartError {
    /// The acting principal's account no longer resolves.
    #[error("User not found")]
    UserNotFound,

    /// The cart was never materialized; reads do not create it.
    #[error("Cart not found")]
    CartNotFound,

    #[error("Product not found")]
    ProductNotFound,

    /// The cart already holds a line for this product. Strict
    /// add-once-then-conflict: no quantity merge.
    #[error("Product already exists in cart")]
    DuplicateProduct,

    /// The operation exists at the boundary but is not yet implemented.
    #[error("operation not implemented")]
    Unimplemented,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Requested change to an existing cart line. Accepted at the boundary,
/// currently not acted upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineUpdate {
    pub line_id: CartLineId,
    pub quantity: u32,
}

/// The cart engine.
///
/// Per-user lifecycle: absent → materialized → (lines added) → materialized.
/// No implemented transition removes a cart or empties it.
#[derive(Clone)]
pub struct CartService {
    accounts: Arc<dyn AccountStore>,
    products: Arc<dyn ProductStore>,
    carts: Arc<dyn CartStore>,
}

impl CartService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        products: Arc<dyn ProductStore>,
        carts: Arc<dyn CartStore>,
    ) -> Self {
        Self {
            accounts,
            products,
            carts,
        }
    }

    /// Fetch the principal's cart with its lines. Never materializes.
    pub fn get_cart(&self, principal: &Principal) -> Result<CartView, CartError> {
        let account = self
            .accounts
            .find_by_username(&principal.username)?
            .ok_or(CartError::UserNotFound)?;

        self.carts
            .find_by_owner(account.id)?
            .ok_or(CartError::CartNotFound)
    }

    /// Add one unit of a product to the principal's cart.
    ///
    /// Materializes the cart on first use. A product already in the cart is a
    /// conflict, checked twice: once against the fetched view (cheap,
    /// preserves the observable check-before-resolve ordering) and again
    /// inside the store's atomic insert, which is what holds the invariant
    /// under concurrent adds.
    pub fn add_product(
        &self,
        principal: &Principal,
        product_id: ProductId,
    ) -> Result<CartView, CartError> {
        let account = self
            .accounts
            .find_by_username(&principal.username)?
            .ok_or(CartError::UserNotFound)?;

        let cart = self.carts.find_or_create_by_owner(account.id)?;

        if cart.contains_product(product_id) {
            return Err(CartError::DuplicateProduct);
        }

        let product = self
            .products
            .find_by_id(product_id)?
            .ok_or(CartError::ProductNotFound)?;

        match self.carts.insert_line(cart.cart_id, &product, 1)? {
            LineInsert::Inserted(view) => {
                tracing::info!(
                    user = %principal.username,
                    product_id = %product_id,
                    total = view.total_amount,
                    "product added to cart"
                );
                Ok(view)
            }
            LineInsert::DuplicateLine => Err(CartError::DuplicateProduct),
        }
    }

    /// Reserved boundary operation; fails explicitly rather than silently
    /// succeeding.
    pub fn update_line(
        &self,
        _principal: &Principal,
        _update: CartLineUpdate,
    ) -> Result<CartView, CartError> {
        Err(CartError::Unimplemented)
    }

    /// Reserved boundary operation; fails explicitly rather than silently
    /// succeeding. Note: until this is implemented there is no path that
    /// decreases a cart total.
    pub fn remove_product(
        &self,
        _principal: &Principal,
        _product_id: ProductId,
    ) -> Result<CartView, CartError> {
        Err(CartError::Unimplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    use bazaar_auth::{Account, Role};
    use bazaar_catalog::{Product, ProductDraft};
    use bazaar_core::{AccountId, CartId, CategoryId, StoreResult};

    use crate::cart::{Cart, CartLineView};

    struct MapAccountStore(RwLock<HashMap<String, Account>>);

    impl AccountStore for MapAccountStore {
        fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
            Ok(self.0.read().unwrap().get(username).cloned())
        }

        fn find_by_id(&self, id: AccountId) -> StoreResult<Option<Account>> {
            Ok(self.0.read().unwrap().values().find(|a| a.id == id).cloned())
        }

        fn exists_by_username(&self, username: &str) -> StoreResult<bool> {
            Ok(self.0.read().unwrap().contains_key(username))
        }

        fn insert(&self, account: Account) -> StoreResult<()> {
            self.0
                .write()
                .unwrap()
                .insert(account.username.clone(), account);
            Ok(())
        }
    }

    struct MapProductStore(RwLock<HashMap<ProductId, Product>>);

    impl ProductStore for MapProductStore {
        fn insert(&self, product: Product) -> StoreResult<()> {
            self.0.write().unwrap().insert(product.id, product);
            Ok(())
        }

        fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
            Ok(self.0.read().unwrap().get(&id).cloned())
        }

        fn list_by_seller(&self, seller_id: AccountId) -> StoreResult<Vec<Product>> {
            Ok(self
                .0
                .read()
                .unwrap()
                .values()
                .filter(|p| p.seller_id == seller_id)
                .cloned()
                .collect())
        }

        fn find_owned(&self, seller_id: AccountId, id: ProductId) -> StoreResult<Option<Product>> {
            Ok(self
                .0
                .read()
                .unwrap()
                .get(&id)
                .filter(|p| p.seller_id == seller_id)
                .cloned())
        }

        fn update(&self, product: Product) -> StoreResult<()> {
            self.0.write().unwrap().insert(product.id, product);
            Ok(())
        }

        fn delete_owned(
            &self,
            seller_id: AccountId,
            id: ProductId,
        ) -> StoreResult<Option<Product>> {
            let mut map = self.0.write().unwrap();
            if map.get(&id).is_some_and(|p| p.seller_id == seller_id) {
                Ok(map.remove(&id))
            } else {
                Ok(None)
            }
        }

        fn search(&self, keyword: &str) -> StoreResult<Vec<Product>> {
            let needle = keyword.to_lowercase();
            Ok(self
                .0
                .read()
                .unwrap()
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }

    /// Single-lock cart state: the atomic-insert contract holds trivially.
    #[derive(Default)]
    struct MapCartStore {
        inner: RwLock<MapCartState>,
    }

    #[derive(Default)]
    struct MapCartState {
        carts: HashMap<AccountId, Cart>,
        lines: HashMap<CartId, Vec<CartLineView>>,
    }

    impl MapCartState {
        fn view(&self, cart: &Cart) -> CartView {
            CartView {
                cart_id: cart.id,
                total_amount: cart.total_amount,
                lines: self.lines.get(&cart.id).cloned().unwrap_or_default(),
            }
        }
    }

    impl CartStore for MapCartStore {
        fn find_by_owner(&self, owner_id: AccountId) -> StoreResult<Option<CartView>> {
            let state = self.inner.read().unwrap();
            Ok(state.carts.get(&owner_id).map(|c| state.view(c)))
        }

        fn find_or_create_by_owner(&self, owner_id: AccountId) -> StoreResult<CartView> {
            let mut state = self.inner.write().unwrap();
            if !state.carts.contains_key(&owner_id) {
                state.carts.insert(owner_id, Cart::new(owner_id));
            }
            let cart = state.carts[&owner_id].clone();
            Ok(state.view(&cart))
        }

        fn insert_line(
            &self,
            cart_id: CartId,
            product: &Product,
            quantity: u32,
        ) -> StoreResult<LineInsert> {
            let mut state = self.inner.write().unwrap();
            let state = &mut *state;
            let lines = state.lines.entry(cart_id).or_default();
            if lines.iter().any(|l| l.product.id == product.id) {
                return Ok(LineInsert::DuplicateLine);
            }
            lines.push(CartLineView {
                id: CartLineId::new(),
                product: product.clone(),
                quantity,
            });
            let total: f64 = lines
                .iter()
                .map(|l| l.product.price * f64::from(l.quantity))
                .sum();

            let cart = state
                .carts
                .values_mut()
                .find(|c| c.id == cart_id)
                .expect("cart exists for inserted line");
            cart.total_amount = total;
            let cart = cart.clone();
            Ok(LineInsert::Inserted(state.view(&cart)))
        }

        fn delete_cart(&self, cart_id: CartId) -> StoreResult<()> {
            let mut state = self.inner.write().unwrap();
            state.carts.retain(|_, c| c.id != cart_id);
            state.lines.remove(&cart_id);
            Ok(())
        }
    }

    struct Fixture {
        service: CartService,
        jack: Principal,
        products: Arc<MapProductStore>,
        seller_id: AccountId,
    }

    fn setup() -> Fixture {
        let accounts = Arc::new(MapAccountStore(RwLock::new(HashMap::new())));
        let seller = Account::new("apple", "hash", Role::Seller);
        let seller_id = seller.id;
        accounts.insert(seller).unwrap();
        accounts
            .insert(Account::new("jack", "hash", Role::Consumer))
            .unwrap();

        let products = Arc::new(MapProductStore(RwLock::new(HashMap::new())));
        let carts = Arc::new(MapCartStore::default());
        let service = CartService::new(accounts, products.clone(), carts);

        Fixture {
            service,
            jack: Principal {
                username: "jack".to_string(),
                role: Role::Consumer,
            },
            products,
            seller_id,
        }
    }

    fn add_widget(fixture: &Fixture, name: &str, price: f64) -> Product {
        let product = Product::new(
            ProductDraft {
                name: name.to_string(),
                price,
                category_id: CategoryId::new(),
            },
            fixture.seller_id,
        );
        fixture.products.insert(product.clone()).unwrap();
        product
    }

    #[test]
    fn get_cart_before_any_add_is_not_found() {
        let fixture = setup();
        assert_eq!(
            fixture.service.get_cart(&fixture.jack).unwrap_err(),
            CartError::CartNotFound
        );
    }

    #[test]
    fn first_add_materializes_cart_with_one_line() {
        let fixture = setup();
        let widget = add_widget(&fixture, "Widget", 10.0);

        let view = fixture
            .service
            .add_product(&fixture.jack, widget.id)
            .unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 1);
        assert_eq!(view.total_amount, 10.0);

        // The cart is now readable.
        let read = fixture.service.get_cart(&fixture.jack).unwrap();
        assert_eq!(read, view);
    }

    #[test]
    fn duplicate_add_conflicts_and_changes_nothing() {
        let fixture = setup();
        let widget = add_widget(&fixture, "Widget", 10.0);

        fixture
            .service
            .add_product(&fixture.jack, widget.id)
            .unwrap();
        let before = fixture.service.get_cart(&fixture.jack).unwrap();

        assert_eq!(
            fixture
                .service
                .add_product(&fixture.jack, widget.id)
                .unwrap_err(),
            CartError::DuplicateProduct
        );

        let after = fixture.service.get_cart(&fixture.jack).unwrap();
        assert_eq!(before, after);
        assert_eq!(after.total_amount, 10.0);
    }

    #[test]
    fn unknown_product_is_not_found_and_side_effect_free_on_lines() {
        let fixture = setup();
        assert_eq!(
            fixture
                .service
                .add_product(&fixture.jack, ProductId::new())
                .unwrap_err(),
            CartError::ProductNotFound
        );

        // The cart was materialized by the attempt, but stays empty.
        let view = fixture.service.get_cart(&fixture.jack).unwrap();
        assert!(view.lines.is_empty());
        assert_eq!(view.total_amount, 0.0);
    }

    #[test]
    fn distinct_products_accumulate_total() {
        let fixture = setup();
        let widget = add_widget(&fixture, "Widget", 10.0);
        let gadget = add_widget(&fixture, "Gadget", 2.5);

        fixture
            .service
            .add_product(&fixture.jack, widget.id)
            .unwrap();
        let view = fixture
            .service
            .add_product(&fixture.jack, gadget.id)
            .unwrap();
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total_amount, 12.5);
    }

    #[test]
    fn unknown_user_fails_before_touching_the_cart() {
        let fixture = setup();
        let ghost = Principal {
            username: "ghost".to_string(),
            role: Role::Consumer,
        };
        assert_eq!(
            fixture
                .service
                .add_product(&ghost, ProductId::new())
                .unwrap_err(),
            CartError::UserNotFound
        );
    }

    #[test]
    fn update_and_remove_are_explicitly_unimplemented() {
        let fixture = setup();
        let widget = add_widget(&fixture, "Widget", 10.0);
        fixture
            .service
            .add_product(&fixture.jack, widget.id)
            .unwrap();
        let line_id = fixture.service.get_cart(&fixture.jack).unwrap().lines[0].id;

        assert_eq!(
            fixture
                .service
                .update_line(
                    &fixture.jack,
                    CartLineUpdate {
                        line_id,
                        quantity: 3
                    }
                )
                .unwrap_err(),
            CartError::Unimplemented
        );
        assert_eq!(
            fixture
                .service
                .remove_product(&fixture.jack, widget.id)
                .unwrap_err(),
            CartError::Unimplemented
        );

        // And neither touched the cart.
        let view = fixture.service.get_cart(&fixture.jack).unwrap();
        assert_eq!(view.lines[0].quantity, 1);
        assert_eq!(view.total_amount, 10.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any interleaving of adds leaves no duplicate lines,
            /// every quantity at 1, and the total equal to the sum of the
            /// distinct products' prices.
            #[test]
            fn adds_preserve_uniqueness_and_total(
                picks in proptest::collection::vec(0usize..4, 1..20),
                prices in proptest::collection::vec(0.0f64..1000.0, 4),
            ) {
                let fixture = setup();
                let products: Vec<Product> = prices
                    .iter()
                    .enumerate()
                    .map(|(i, p)| add_widget(&fixture, &format!("p{i}"), *p))
                    .collect();

                for &pick in &picks {
                    match fixture.service.add_product(&fixture.jack, products[pick].id) {
                        Ok(_) | Err(CartError::DuplicateProduct) => {}
                        Err(e) => panic!("unexpected cart error: {e}"),
                    }
                }

                let view = fixture.service.get_cart(&fixture.jack).unwrap();

                let mut seen: Vec<ProductId> = view.lines.iter().map(|l| l.product.id).collect();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), view.lines.len());

                for line in &view.lines {
                    prop_assert_eq!(line.quantity, 1);
                }

                let expected: f64 = view.lines.iter().map(|l| l.product.price).sum();
                prop_assert!((view.total_amount - expected).abs() < 1e-9);
            }
        }
    }
}
