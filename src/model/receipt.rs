use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CandidateId, ElectionId, Weight};

/// Acknowledgement of a created election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionReceipt {
    /// The newly assigned election ID.
    pub election_id: ElectionId,
    /// The ledger time the election was created at.
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement of a successful nomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominationReceipt {
    pub election_id: ElectionId,
    /// The newly assigned candidate ID.
    pub candidate_id: CandidateId,
}

/// Acknowledgement of a successfully cast vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub election_id: ElectionId,
    pub candidate_id: CandidateId,
    /// The weight frozen into the tally.
    pub weight: Weight,
    pub cast_at: DateTime<Utc>,
}
