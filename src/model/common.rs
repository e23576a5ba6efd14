//! Identifiers and primitive types shared by every sub-model.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Our election IDs are integers, assigned sequentially from 1.
pub type ElectionId = u32;
/// Our candidate IDs are integers, assigned sequentially from 1 within each election.
pub type CandidateId = u32;
/// Voting weight, in the token ledger's smallest unit.
pub type Weight = u128;

/// An externally-addressable principal.
///
/// Addresses are hex strings and compare case-insensitively, so the
/// canonical form is lowercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Address(String);

impl Address {
    /// Create an address, normalising to the canonical lowercase form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Address {
        pub fn example1() -> Self {
            Address::new("0xA11CE0000000000000000000000000000000000A")
        }

        pub fn example2() -> Self {
            Address::new("0xB0B00000000000000000000000000000000000B2")
        }

        pub fn example3() -> Self {
            Address::new("0xCafe000000000000000000000000000000000003")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_compare_case_insensitively() {
        assert_eq!(
            Address::new("0xABCDEF0123"),
            Address::new("0xabcdef0123")
        );
    }

    #[test]
    fn addresses_normalise_on_deserialise() {
        let address: Address = serde_json::from_str("\"0xABCDEF0123\"").unwrap();
        assert_eq!(address, Address::new("0xabcdef0123"));
    }
}
