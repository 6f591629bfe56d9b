//! Authorization guard: credential verification, token minting, and
//! principal resolution.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use bazaar_core::StoreError;

use crate::account::AccountStore;
use crate::password::PasswordHasher;
use crate::token::TokenService;
use crate::Role;

/// Resolved caller identity after token validation.
///
/// Every core operation takes the principal as an explicit argument; there is
/// no ambient "current user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately generic: unknown user, bad password and verifier faults
    /// all collapse here so the response never enables username enumeration.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token missing, invalid, or expired.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Token was valid but the bound username no longer resolves.
    #[error("principal not found")]
    PrincipalNotFound,

    /// Role mismatch for the requested operation.
    #[error("forbidden")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates a username/password pair against stored credentials.
///
/// Side-effect-free; fails closed on every path.
#[derive(Clone)]
pub struct CredentialVerifier {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialVerifier {
    pub fn new(accounts: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.accounts.find_by_username(username) {
            Ok(Some(account)) => self.hasher.verify(password, &account.password_hash),
            Ok(None) => false,
            Err(e) => {
                tracing::debug!("credential lookup failed: {e}");
                false
            }
        }
    }
}

/// The authorization guard.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    verifier: CredentialVerifier,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        let verifier = CredentialVerifier::new(accounts.clone(), hasher);
        Self {
            accounts,
            verifier,
            tokens,
        }
    }

    /// Authenticate a username/password pair and mint a bearer token.
    ///
    /// Every failure is the same [`AuthError::InvalidCredentials`] value.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !self.verifier.verify(username, password) {
            tracing::debug!(username, "authentication rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let account = self
            .accounts
            .find_by_username(username)
            .map_err(|_| AuthError::InvalidCredentials)?
            .ok_or(AuthError::InvalidCredentials)?;

        self.tokens
            .issue(&account.username, account.role)
            .map_err(|_| AuthError::InvalidCredentials)
    }

    /// Validate a bearer token and resolve the current principal.
    ///
    /// The account is re-fetched so the role reflects current store state,
    /// not the role recorded at issue time.
    pub fn resolve_principal(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self
            .tokens
            .validate(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        let account = self
            .accounts
            .find_by_username(&claims.sub)?
            .ok_or(AuthError::PrincipalNotFound)?;

        Ok(Principal {
            username: account.username,
            role: account.role,
        })
    }
}

/// Pure role check.
///
/// - No IO
/// - No panics
pub fn require_role(principal: &Principal, role: Role) -> Result<(), AuthError> {
    if principal.role != role {
        return Err(AuthError::Forbidden);
    }
    Ok(())
}
