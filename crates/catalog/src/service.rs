//! Seller-scoped catalog operations.

use std::sync::Arc;

use thiserror::Error;

use bazaar_auth::{Account, AccountStore, Principal};
use bazaar_core::{DomainError, ProductId, StoreError};

use crate::product::{Product, ProductDraft, ProductStore};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The acting principal's account no longer resolves.
    #[error("Seller not found")]
    SellerNotFound,

    /// Product missing, or owned by a different seller. The two causes are
    /// intentionally merged so other sellers' product ids never leak.
    #[error("Product not found")]
    NotFound,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Catalog access, scoped to the owning seller.
///
/// Role enforcement (SELLER) happens at the transport boundary; the service
/// additionally re-resolves the account so a stale principal fails cleanly.
#[derive(Clone)]
pub struct CatalogService {
    accounts: Arc<dyn AccountStore>,
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(accounts: Arc<dyn AccountStore>, products: Arc<dyn ProductStore>) -> Self {
        Self { accounts, products }
    }

    fn resolve_seller(&self, principal: &Principal) -> Result<Account, CatalogError> {
        self.accounts
            .find_by_username(&principal.username)?
            .ok_or(CatalogError::SellerNotFound)
    }

    /// Create a listing owned by the acting seller.
    ///
    /// The referenced category is saved as given, without an existence check.
    pub fn create(
        &self,
        principal: &Principal,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        let seller = self.resolve_seller(principal)?;
        draft.validate()?;

        let product = Product::new(draft, seller.id);
        self.products.insert(product.clone())?;

        tracing::info!(seller = %seller.username, product_id = %product.id, "product created");
        Ok(product)
    }

    pub fn list_owned(&self, principal: &Principal) -> Result<Vec<Product>, CatalogError> {
        let seller = self.resolve_seller(principal)?;
        Ok(self.products.list_by_seller(seller.id)?)
    }

    pub fn get_owned(
        &self,
        principal: &Principal,
        product_id: ProductId,
    ) -> Result<Product, CatalogError> {
        let seller = self.resolve_seller(principal)?;
        self.products
            .find_owned(seller.id, product_id)?
            .ok_or(CatalogError::NotFound)
    }

    /// Overwrite an owned listing. The seller field is forced back to the
    /// acting principal regardless of the payload.
    pub fn update(
        &self,
        principal: &Principal,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        let seller = self.resolve_seller(principal)?;
        let existing = self
            .products
            .find_owned(seller.id, product_id)?
            .ok_or(CatalogError::NotFound)?;
        draft.validate()?;

        let updated = Product {
            id: existing.id,
            name: draft.name,
            price: draft.price,
            seller_id: seller.id,
            category_id: draft.category_id,
        };
        self.products.update(updated.clone())?;
        Ok(updated)
    }

    /// Remove an owned listing, returning the removed record.
    pub fn delete(
        &self,
        principal: &Principal,
        product_id: ProductId,
    ) -> Result<Product, CatalogError> {
        let seller = self.resolve_seller(principal)?;
        let removed = self
            .products
            .delete_owned(seller.id, product_id)?
            .ok_or(CatalogError::NotFound)?;

        tracing::info!(seller = %seller.username, product_id = %removed.id, "product deleted");
        Ok(removed)
    }

    /// Public keyword search over product and category names.
    ///
    /// A blank keyword is a caller error.
    pub fn search(&self, keyword: &str) -> Result<Vec<Product>, CatalogError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(DomainError::validation("keyword must not be blank").into());
        }
        Ok(self.products.search(keyword)?)
    }
}
