//! Ballot Ledger: voter registration, vote casting and tallies.

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::{Error, Result};
use crate::model::{
    common::{Address, CandidateId, ElectionId, Weight},
    election::Phase,
    receipt::VoteReceipt,
    voter::{CastVote, VoteEvent, VoterRecord},
};
use crate::tokens::TokenLedger;

use super::Ledger;

impl<T: TokenLedger> Ledger<T> {
    /// Register `caller` to vote in the given election.
    ///
    /// Open from the gap after nominations close through the end of the
    /// voting window. Registration is a distinct, explicit step; casting
    /// never registers implicitly. Re-registering is a no-op success.
    pub fn register_voter(
        &mut self,
        election_id: ElectionId,
        caller: &Address,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let election = self.election(election_id)?;
        let phase = election.phase_at(now);
        if !matches!(phase, Phase::BetweenPhases | Phase::Voting) {
            return Err(Error::PhaseViolation {
                election: election_id,
                phase,
                action: "voter registration",
            });
        }

        let record = self.store.voter_entry(election_id, caller.clone());
        if !record.registered {
            record.registered = true;
            debug!("{caller} registered to vote in election {election_id}");
        }
        Ok(())
    }

    /// Cast `caller`'s vote for the given candidate.
    ///
    /// Preconditions run in a fixed order and the first failure wins with
    /// no state change: the election must be in its `Voting` phase, the
    /// candidate must exist, the caller must be registered, must not have
    /// voted, and must hold a positive balance. On success the caller's
    /// current balance is frozen as the vote's weight and applied to the
    /// candidate tally and the election total in the same step.
    pub fn cast_vote(
        &mut self,
        election_id: ElectionId,
        candidate_id: CandidateId,
        caller: &Address,
        now: DateTime<Utc>,
    ) -> Result<VoteReceipt> {
        let weight = self.check_vote(election_id, Some(candidate_id), caller, now)?;

        // Every check passed; nothing below can fail.
        self.store
            .voter_mut(election_id, caller)
            .expect("registration checked above")
            .vote = Some(CastVote {
            candidate: candidate_id,
            weight,
        });
        self.store
            .candidate_mut(election_id, candidate_id)
            .expect("candidate checked above")
            .vote_count += weight;
        self.store
            .election_mut(election_id)
            .expect("existence checked above")
            .total_votes += weight;
        self.store.push_vote_event(VoteEvent {
            election_id,
            voter: caller.clone(),
            candidate_id,
            weight,
            cast_at: now,
        });
        debug!(
            "{caller} voted for candidate {candidate_id} in election {election_id} \
             with weight {weight}"
        );

        Ok(VoteReceipt {
            election_id,
            candidate_id,
            weight,
            cast_at: now,
        })
    }

    /// Running tallies as `(candidate ID, vote count)`, in candidate order.
    ///
    /// Valid in any phase; before `Ended` the numbers are in progress.
    pub fn results(&self, election_id: ElectionId) -> Result<Vec<(CandidateId, Weight)>> {
        Ok(self
            .candidates(election_id)?
            .iter()
            .map(|c| (c.id, c.vote_count))
            .collect())
    }

    /// Whether `voter` has already cast a vote in the given election.
    pub fn has_voted(&self, election_id: ElectionId, voter: &Address) -> Result<bool> {
        self.election(election_id)?;
        Ok(self
            .store
            .voter(election_id, voter)
            .map(VoterRecord::has_voted)
            .unwrap_or(false))
    }

    /// The append-only log of votes cast in the given election.
    pub fn vote_log(
        &self,
        election_id: ElectionId,
    ) -> Result<impl Iterator<Item = &VoteEvent>> {
        self.election(election_id)?;
        Ok(self
            .store
            .vote_log()
            .iter()
            .filter(move |event| event.election_id == election_id))
    }
}
