use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of an account, used for per-role access to mutating operations.
///
/// Exactly two roles exist: consumers own carts, sellers own product listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Consumer,
    Seller,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Consumer => "CONSUMER",
            Role::Seller => "SELLER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = bazaar_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONSUMER" => Ok(Role::Consumer),
            "SELLER" => Ok(Role::Seller),
            other => Err(bazaar_core::DomainError::validation(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("CONSUMER".parse::<Role>().unwrap(), Role::Consumer);
        assert_eq!("SELLER".parse::<Role>().unwrap(), Role::Seller);
        assert!("ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_screaming() {
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"SELLER\"");
    }
}
