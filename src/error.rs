use thiserror::Error;

use crate::model::{
    common::{Address, CandidateId, ElectionId},
    election::Phase,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Typed rejections returned by the ledger.
///
/// A rejection never leaves partial state behind; callers recover by
/// resubmitting with corrected input or waiting for a phase change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no election with ID {0}")]
    NotFound(ElectionId),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(&'static str),

    #[error("election {election} is in the {phase} phase, which does not allow {action}")]
    PhaseViolation {
        election: ElectionId,
        phase: Phase,
        action: &'static str,
    },

    #[error("{nominator} already holds a candidate slot in election {election}")]
    DuplicateCandidacy {
        election: ElectionId,
        nominator: Address,
    },

    #[error("no candidate with ID {candidate} in election {election}")]
    UnknownCandidate {
        election: ElectionId,
        candidate: CandidateId,
    },

    #[error("{voter} is not registered to vote in election {election}")]
    NotRegistered {
        election: ElectionId,
        voter: Address,
    },

    #[error("{voter} has already voted in election {election}")]
    AlreadyVoted {
        election: ElectionId,
        voter: Address,
    },

    #[error("{0} holds no voting tokens")]
    NoVotingPower(Address),

    #[error("{0} is not authorised to administer elections")]
    Unauthorized(Address),
}
