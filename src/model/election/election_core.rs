use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::common::{ElectionId, Weight};

use super::phase::{Phase, TimeStatus};

/// Core election data, as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// Unique ID.
    pub id: ElectionId,
    /// Top-level metadata.
    #[serde(flatten)]
    pub metadata: ElectionMetadata,
    /// Sum of the weights of every vote cast so far.
    pub total_votes: Weight,
}

/// A view on just the election's top-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionMetadata {
    /// Election name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The four-timestamp schedule driving the phase clock.
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Cleared by deactivation. Terminal.
    pub active: bool,
}

/// The four ordered timestamps of an election.
///
/// Strictly increasing; immutable once the election is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub nomination_start: DateTime<Utc>,
    pub nomination_end: DateTime<Utc>,
    pub voting_start: DateTime<Utc>,
    pub voting_end: DateTime<Utc>,
}

impl Schedule {
    /// Reject out-of-order or zero-length phases.
    pub fn validate(&self) -> Result<()> {
        if self.nomination_start >= self.nomination_end {
            return Err(Error::InvalidSchedule(
                "nominations must open strictly before they close",
            ));
        }
        if self.nomination_end >= self.voting_start {
            return Err(Error::InvalidSchedule(
                "voting must open strictly after nominations close",
            ));
        }
        if self.voting_start >= self.voting_end {
            return Err(Error::InvalidSchedule(
                "voting must open strictly before it closes",
            ));
        }
        Ok(())
    }

    /// The phase at `now`, ignoring deactivation.
    ///
    /// Each window includes its start instant and excludes its end.
    fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if now < self.nomination_start {
            Phase::Scheduled
        } else if now < self.nomination_end {
            Phase::Nomination
        } else if now < self.voting_start {
            Phase::BetweenPhases
        } else if now < self.voting_end {
            Phase::Voting
        } else {
            Phase::Ended
        }
    }

    /// The next phase boundary after `now`, if any.
    fn next_transition(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        [
            self.nomination_start,
            self.nomination_end,
            self.voting_start,
            self.voting_end,
        ]
        .into_iter()
        .find(|boundary| *boundary > now)
    }
}

impl Election {
    /// Create a new election with no candidates and no votes.
    pub fn new(id: ElectionId, name: String, description: String, schedule: Schedule) -> Self {
        Self {
            id,
            metadata: ElectionMetadata {
                name,
                description,
                schedule,
                active: true,
            },
            total_votes: 0,
        }
    }

    /// The phase at `now`. A deactivated election is `Ended` regardless of time.
    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if !self.metadata.active {
            return Phase::Ended;
        }
        self.metadata.schedule.phase_at(now)
    }

    /// The phase at `now` plus the seconds remaining until the next transition.
    pub fn time_status(&self, now: DateTime<Utc>) -> TimeStatus {
        let phase = self.phase_at(now);
        let seconds_until_next = match phase {
            Phase::Ended => None,
            _ => self
                .metadata
                .schedule
                .next_transition(now)
                .map(|boundary| (boundary - now).num_seconds()),
        };
        TimeStatus {
            phase,
            seconds_until_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::model::election::ElectionSpec;

    use super::*;

    fn example_election() -> Election {
        ElectionSpec::example().into_election(1)
    }

    #[test]
    fn validate_rejects_equal_bounds() {
        let mut schedule = Schedule::example();
        schedule.voting_start = schedule.nomination_end;
        assert!(matches!(
            schedule.validate(),
            Err(Error::InvalidSchedule(_))
        ));
    }

    #[test]
    fn validate_rejects_reversed_windows() {
        let mut schedule = Schedule::example();
        std::mem::swap(&mut schedule.voting_start, &mut schedule.voting_end);
        assert!(matches!(
            schedule.validate(),
            Err(Error::InvalidSchedule(_))
        ));

        let mut schedule = Schedule::example();
        schedule.nomination_start = schedule.voting_end + Duration::seconds(1);
        assert!(matches!(
            schedule.validate(),
            Err(Error::InvalidSchedule(_))
        ));
    }

    #[test]
    fn phase_windows_include_start_and_exclude_end() {
        let election = example_election();
        let t = Schedule::example_origin();

        assert_eq!(election.phase_at(t - Duration::seconds(1)), Phase::Scheduled);
        assert_eq!(election.phase_at(t), Phase::Nomination);
        assert_eq!(
            election.phase_at(t + Duration::seconds(99)),
            Phase::Nomination
        );
        assert_eq!(
            election.phase_at(t + Duration::seconds(100)),
            Phase::BetweenPhases
        );
        assert_eq!(
            election.phase_at(t + Duration::seconds(101)),
            Phase::Voting
        );
        assert_eq!(
            election.phase_at(t + Duration::seconds(199)),
            Phase::Voting
        );
        assert_eq!(election.phase_at(t + Duration::seconds(200)), Phase::Ended);
    }

    #[test]
    fn phase_is_a_pure_function_of_time() {
        let election = example_election();
        let instant = Schedule::example_origin() + Duration::seconds(150);

        let first = election.phase_at(instant);
        let second = election.phase_at(instant);
        assert_eq!(first, second);
        assert_eq!(first, Phase::Voting);
    }

    #[test]
    fn deactivated_election_is_ended_at_any_time() {
        let mut election = example_election();
        election.metadata.active = false;

        let t = Schedule::example_origin();
        assert_eq!(election.phase_at(t - Duration::seconds(1)), Phase::Ended);
        assert_eq!(election.phase_at(t + Duration::seconds(50)), Phase::Ended);
    }

    #[test]
    fn time_status_counts_down_to_the_next_boundary() {
        let election = example_election();
        let t = Schedule::example_origin();

        let status = election.time_status(t + Duration::seconds(10));
        assert_eq!(status.phase, Phase::Nomination);
        assert_eq!(status.seconds_until_next, Some(90));

        let status = election.time_status(t + Duration::seconds(250));
        assert_eq!(status.phase, Phase::Ended);
        assert_eq!(status.seconds_until_next, None);
    }
}
