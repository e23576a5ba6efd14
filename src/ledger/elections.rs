//! Election Registry: the election lifecycle and its phase clock.

use chrono::{DateTime, Utc};
use log::info;

use crate::error::{Error, Result};
use crate::model::{
    common::{Address, ElectionId},
    election::{Election, ElectionSpec, Phase, TimeStatus},
    receipt::ElectionReceipt,
};
use crate::tokens::TokenLedger;

use super::Ledger;

impl<T: TokenLedger> Ledger<T> {
    /// Create a new election from the given spec.
    ///
    /// The four schedule timestamps must be strictly increasing, and the
    /// creator must pass the configured allowlist. Returns a receipt
    /// carrying the newly assigned ID; IDs are sequential and never
    /// reused.
    pub fn create_election(
        &mut self,
        spec: ElectionSpec,
        creator: &Address,
        now: DateTime<Utc>,
    ) -> Result<ElectionReceipt> {
        if !self.config.may_administer(creator) {
            return Err(Error::Unauthorized(creator.clone()));
        }
        spec.schedule.validate()?;

        let id = self.store.next_election_id();
        let election = spec.into_election(id);
        info!(
            "{creator} created election {id} ({})",
            election.metadata.name
        );
        self.store.insert_election(election);

        Ok(ElectionReceipt {
            election_id: id,
            created_at: now,
        })
    }

    /// Deactivate an election whose voting window has closed. Terminal.
    ///
    /// Deactivating an already-inactive election is a no-op success.
    pub fn deactivate_election(
        &mut self,
        election_id: ElectionId,
        caller: &Address,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !self.config.may_administer(caller) {
            return Err(Error::Unauthorized(caller.clone()));
        }
        let election = self.election(election_id)?;
        if !election.metadata.active {
            return Ok(());
        }
        let phase = election.phase_at(now);
        if phase != Phase::Ended {
            return Err(Error::PhaseViolation {
                election: election_id,
                phase,
                action: "deactivation",
            });
        }

        self.store
            .election_mut(election_id)
            .expect("existence checked above")
            .metadata
            .active = false;
        info!("{caller} deactivated election {election_id}");
        Ok(())
    }

    /// Fetch a single election.
    pub fn election(&self, election_id: ElectionId) -> Result<&Election> {
        self.store
            .election(election_id)
            .ok_or(Error::NotFound(election_id))
    }

    /// All elections ever created, in ID order.
    pub fn elections(&self) -> impl Iterator<Item = &Election> {
        self.store.elections()
    }

    /// Elections still inside their lifecycle at `now`.
    pub fn active_elections(&self, now: DateTime<Utc>) -> Vec<&Election> {
        self.store
            .elections()
            .filter(|election| election.phase_at(now) != Phase::Ended)
            .collect()
    }

    /// The phase of the given election at `now`.
    pub fn phase_of(&self, election_id: ElectionId, now: DateTime<Utc>) -> Result<Phase> {
        Ok(self.election(election_id)?.phase_at(now))
    }

    /// The phase clock of the given election at `now`.
    pub fn time_status(&self, election_id: ElectionId, now: DateTime<Utc>) -> Result<TimeStatus> {
        Ok(self.election(election_id)?.time_status(now))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::ledger::fixtures::{at, ledger, ledger_with_election, t0, treasury};
    use crate::model::{common::Address, election::Schedule};
    use crate::store::Store;
    use crate::tokens::FixedSupplyLedger;

    use super::*;

    #[test]
    fn zero_length_phase_is_rejected_then_fixed_spec_is_accepted() {
        let mut ledger = ledger();

        let mut spec = ElectionSpec::example();
        spec.schedule.voting_start = spec.schedule.nomination_end;
        let result = ledger.create_election(spec, &treasury(), t0());
        assert!(matches!(result, Err(Error::InvalidSchedule(_))));
        assert!(ledger.elections().next().is_none());

        let receipt = ledger
            .create_election(ElectionSpec::example(), &treasury(), t0())
            .unwrap();
        assert_eq!(receipt.election_id, 1);
        assert_eq!(receipt.created_at, t0());
    }

    #[test]
    fn election_ids_are_sequential() {
        let mut ledger = ledger();

        let first = ledger
            .create_election(ElectionSpec::example(), &treasury(), t0())
            .unwrap();
        let second = ledger
            .create_election(ElectionSpec::example2(), &treasury(), t0())
            .unwrap();

        assert_eq!(first.election_id, 1);
        assert_eq!(second.election_id, 2);
        assert_eq!(ledger.elections().count(), 2);
    }

    #[test]
    fn creation_is_gated_by_the_allowlist() {
        let admin = Address::example1();
        let outsider = Address::example2();
        let tokens = FixedSupplyLedger::new(treasury(), 1_000);
        let config = Config::with_creators(vec![admin.clone()]);
        let mut ledger = Ledger::new(Store::new(), tokens, config);

        let result = ledger.create_election(ElectionSpec::example(), &outsider, t0());
        assert_eq!(result, Err(Error::Unauthorized(outsider)));

        assert!(ledger
            .create_election(ElectionSpec::example(), &admin, t0())
            .is_ok());
    }

    #[test]
    fn deactivation_requires_the_ended_phase() {
        let mut ledger = ledger_with_election();

        let result = ledger.deactivate_election(1, &treasury(), at(50));
        assert_eq!(
            result,
            Err(Error::PhaseViolation {
                election: 1,
                phase: Phase::Nomination,
                action: "deactivation",
            })
        );
        assert!(ledger.election(1).unwrap().metadata.active);

        ledger.deactivate_election(1, &treasury(), at(250)).unwrap();
        assert!(!ledger.election(1).unwrap().metadata.active);

        // Idempotent on a second call.
        ledger.deactivate_election(1, &treasury(), at(250)).unwrap();
        assert!(!ledger.election(1).unwrap().metadata.active);
    }

    #[test]
    fn unknown_election_is_not_found() {
        let ledger = ledger();

        assert_eq!(ledger.phase_of(7, t0()), Err(Error::NotFound(7)));
        assert_eq!(ledger.election(7).err(), Some(Error::NotFound(7)));
    }

    #[test]
    fn active_elections_excludes_ended_ones() {
        let mut ledger = ledger_with_election();
        ledger
            .create_election(ElectionSpec::example2(), &treasury(), t0())
            .unwrap();

        assert_eq!(ledger.active_elections(at(50)).len(), 2);

        // Election 2 is deactivated; election 1 runs out of schedule.
        ledger.deactivate_election(2, &treasury(), at(250)).unwrap();
        assert!(ledger.active_elections(at(250)).is_empty());
    }

    #[test]
    fn time_status_reports_the_next_transition() {
        let ledger = ledger_with_election();

        let status = ledger.time_status(1, at(150)).unwrap();
        assert_eq!(status.phase, Phase::Voting);
        assert_eq!(status.seconds_until_next, Some(50));
    }

    #[test]
    fn schedules_are_immutable_after_creation() {
        let mut ledger = ledger_with_election();
        let before = ledger.election(1).unwrap().metadata.schedule;

        // No mutating intent touches the schedule; a full pass over the
        // lifecycle leaves it bit-identical.
        ledger.deactivate_election(1, &treasury(), at(250)).unwrap();
        assert_eq!(ledger.election(1).unwrap().metadata.schedule, before);
        assert_eq!(before, Schedule::example());
    }
}
