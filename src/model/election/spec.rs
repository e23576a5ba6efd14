use serde::{Deserialize, Serialize};

use crate::model::common::ElectionId;

use super::{Election, Schedule};

/// An election specification, as submitted by a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSpec {
    /// Election name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The phase schedule.
    #[serde(flatten)]
    pub schedule: Schedule,
}

impl ElectionSpec {
    /// Convert this spec into a proper election with its assigned unique ID.
    pub fn into_election(self, id: ElectionId) -> Election {
        Election::new(id, self.name, self.description, self.schedule)
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;

    impl Schedule {
        /// The fixed instant `example()` schedules are measured from, so
        /// tests never depend on the wall clock.
        pub fn example_origin() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        }

        /// Nominations `[T, T+100)`, voting `[T+101, T+200)`, with
        /// `T = example_origin()`.
        pub fn example() -> Self {
            let t = Self::example_origin();
            Self {
                nomination_start: t,
                nomination_end: t + Duration::seconds(100),
                voting_start: t + Duration::seconds(101),
                voting_end: t + Duration::seconds(200),
            }
        }
    }

    impl ElectionSpec {
        pub fn example() -> Self {
            Self {
                name: "Student Union President".to_string(),
                description: "Annual election for the union presidency.".to_string(),
                schedule: Schedule::example(),
            }
        }

        pub fn example2() -> Self {
            Self {
                name: "Treasurer".to_string(),
                description: "Who should hold the purse strings?".to_string(),
                schedule: Schedule::example(),
            }
        }
    }
}
