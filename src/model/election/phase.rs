use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Where an election sits in its lifecycle.
///
/// Derived from the current time and the election record on every call
/// that needs it; never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before nominations open.
    Scheduled,
    /// Nominations are open.
    Nomination,
    /// Nominations have closed, voting has not yet opened.
    BetweenPhases,
    /// Voting is open.
    Voting,
    /// Voting has closed, or the election was deactivated.
    Ended,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scheduled => "Scheduled",
            Self::Nomination => "Nomination",
            Self::BetweenPhases => "BetweenPhases",
            Self::Voting => "Voting",
            Self::Ended => "Ended",
        };
        write!(f, "{name}")
    }
}

/// A point-in-time view of an election's phase clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStatus {
    /// The phase at the queried instant.
    pub phase: Phase,
    /// Seconds until the next phase transition, if one is still to come.
    pub seconds_until_next: Option<i64>,
}
