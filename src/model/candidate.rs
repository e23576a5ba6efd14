use serde::{Deserialize, Serialize};

use super::common::{Address, CandidateId, Weight};

/// A candidate standing in a single election.
///
/// Identified by `(election, candidate ID)`; the ID is immutable once
/// assigned and candidates are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate unique ID within its election.
    pub id: CandidateId,
    /// The principal who nominated this candidate. At most one slot each.
    pub nominator: Address,
    /// Display name.
    pub name: String,
    /// Opaque reference to the candidate's manifesto.
    pub manifesto_uri: String,
    /// Sum of the weights of all votes received.
    pub vote_count: Weight,
}

impl Candidate {
    /// Create a new candidate with a zero tally.
    pub fn new(
        id: CandidateId,
        nominator: Address,
        name: String,
        manifesto_uri: String,
    ) -> Self {
        Self {
            id,
            nominator,
            name,
            manifesto_uri,
            vote_count: 0,
        }
    }
}
