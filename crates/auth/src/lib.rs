//! `bazaar-auth` — authentication/authorization boundary.
//!
//! This crate owns the identity-store port, credential verification, token
//! issue/validation, and the guard that turns a bearer token into a resolved
//! [`Principal`]. It is intentionally decoupled from HTTP and storage.

pub mod account;
pub mod claims;
pub mod guard;
pub mod password;
pub mod roles;
pub mod token;

pub use account::{Account, AccountStore};
pub use claims::{TokenClaims, TokenValidationError, validate_claims};
pub use guard::{AuthError, AuthService, CredentialVerifier, Principal, require_role};
pub use password::{Argon2PasswordHasher, PasswordHasher};
pub use roles::Role;
pub use token::{Hs256TokenService, TokenError, TokenService};
