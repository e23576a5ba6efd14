use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, CandidateId, ElectionId, Weight};

/// Per-election record of a voter's registration and cast vote.
///
/// `vote` is a one-way latch: it is set at most once and never cleared,
/// and the candidate/weight pair inside is immutable from that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    /// Whether the voter has completed the explicit registration step.
    pub registered: bool,
    /// The cast vote, if any.
    pub vote: Option<CastVote>,
}

impl VoterRecord {
    /// Whether the voting latch has tripped.
    pub fn has_voted(&self) -> bool {
        self.vote.is_some()
    }
}

/// The evidence frozen by a successful vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVote {
    /// The candidate voted for.
    pub candidate: CandidateId,
    /// The voter's token balance at the moment of casting. Never re-read.
    pub weight: Weight,
}

/// One entry in the append-only vote log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    pub election_id: ElectionId,
    pub voter: Address,
    pub candidate_id: CandidateId,
    pub weight: Weight,
    pub cast_at: DateTime<Utc>,
}
