//! The token-ledger collaborator that voting weight is read from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::common::{Address, Weight};

/// Read-only view of the fungible token ledger.
///
/// The ledger only ever reads balances; a balance must be stable for the
/// duration of a single `cast_vote` call.
pub trait TokenLedger {
    /// The balance of the given address, in the token's smallest unit.
    fn balance_of(&self, address: &Address) -> Weight;
}

/// Errors from the in-memory token ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Weight, need: Weight },
}

/// A fixed-supply, in-memory token ledger.
///
/// Stands in for the external token contract in tests and benchmarks; the
/// whole supply is minted to a treasury address and moved around with
/// [`transfer`](Self::transfer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedSupplyLedger {
    balances: BTreeMap<Address, Weight>,
}

impl FixedSupplyLedger {
    /// Mint the entire supply to the treasury address.
    pub fn new(treasury: Address, supply: Weight) -> Self {
        let mut balances = BTreeMap::new();
        balances.insert(treasury, supply);
        Self { balances }
    }

    /// Move tokens between holders.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Weight,
    ) -> Result<(), TokenError> {
        let have = self.balance_of(from);
        if have < amount {
            return Err(TokenError::InsufficientBalance { have, need: amount });
        }
        if let Some(balance) = self.balances.get_mut(from) {
            *balance -= amount;
        }
        *self.balances.entry(to.clone()).or_insert(0) += amount;
        Ok(())
    }
}

impl TokenLedger for FixedSupplyLedger {
    fn balance_of(&self, address: &Address) -> Weight {
        self.balances.get(address).copied().unwrap_or(0)
    }
}
