//! The authoritative election ledger and its operation surface.
//!
//! Operations are grouped by sub-model: election lifecycle in
//! [`elections`], candidacy in [`nominations`], registration and ballots
//! in [`voting`], and pre-flight checks in [`eligibility`]. All of them
//! go through the one [`Ledger`] handle over the shared store.

mod elections;
mod eligibility;
mod nominations;
mod voting;

use crate::config::Config;
use crate::store::Store;
use crate::tokens::TokenLedger;

/// The authoritative ledger.
///
/// Mutating intents take `&mut self` and apply as a whole or not at all;
/// queries take `&self` and never mutate. Concurrent submissions must be
/// ordered before they reach this type: there is no locking primitive
/// here, and none is needed under exclusive access.
#[derive(Debug)]
pub struct Ledger<T> {
    store: Store,
    tokens: T,
    config: Config,
}

impl<T: TokenLedger> Ledger<T> {
    /// Create a ledger over the given store, token collaborator and
    /// configuration.
    pub fn new(store: Store, tokens: T, config: Config) -> Self {
        Self {
            store,
            tokens,
            config,
        }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Read-only access to the token collaborator.
    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Mutable access to the token collaborator.
    ///
    /// The ledger itself never mutates balances; this exists so an
    /// embedder can apply external transfers between intents.
    pub fn tokens_mut(&mut self) -> &mut T {
        &mut self.tokens
    }
}
