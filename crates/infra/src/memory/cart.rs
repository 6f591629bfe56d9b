use std::collections::HashMap;
use std::sync::RwLock;

use bazaar_cart::{Cart, CartLineView, CartStore, CartView, LineInsert};
use bazaar_catalog::Product;
use bazaar_core::{AccountId, CartId, CartLineId, StoreError, StoreResult};

/// In-memory cart store.
///
/// Carts and their lines live behind one `RwLock`, which is what makes
/// `insert_line` atomic: the duplicate check, the insert, and the total
/// recomputation all happen under a single write guard.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    carts: HashMap<AccountId, Cart>,
    lines: HashMap<CartId, Vec<CartLineView>>,
}

impl State {
    fn view(&self, cart: &Cart) -> CartView {
        CartView {
            cart_id: cart.id,
            total_amount: cart.total_amount,
            lines: self.lines.get(&cart.id).cloned().unwrap_or_default(),
        }
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, State>> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("cart store lock poisoned"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("cart store lock poisoned"))
    }
}

impl CartStore for InMemoryCartStore {
    fn find_by_owner(&self, owner_id: AccountId) -> StoreResult<Option<CartView>> {
        let state = self.read()?;
        Ok(state.carts.get(&owner_id).map(|c| state.view(c)))
    }

    fn find_or_create_by_owner(&self, owner_id: AccountId) -> StoreResult<CartView> {
        let mut state = self.write()?;
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
        let mut state = self.write()?;
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
            .ok_or_else(|| StoreError::unavailable("cart row missing for line insert"))?;
        cart.total_amount = total;
        let cart = cart.clone();
        Ok(LineInsert::Inserted(state.view(&cart)))
    }

    fn delete_cart(&self, cart_id: CartId) -> StoreResult<()> {
        let mut state = self.write()?;
        state.carts.retain(|_, c| c.id != cart_id);
        state.lines.remove(&cart_id);
        Ok(())
    }
}
