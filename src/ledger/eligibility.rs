//! Eligibility & Weight Oracle: pre-flight checks and voting power.
//!
//! The checking routines here are the same ones the write paths in
//! `nominations` and `voting` run, so a pre-flight answer matches what
//! the intent itself would do absent intervening writes.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::model::{
    common::{Address, CandidateId, ElectionId, Weight},
    election::Phase,
    voter::VoterRecord,
};
use crate::tokens::TokenLedger;

use super::Ledger;

impl<T: TokenLedger> Ledger<T> {
    /// Whether `who` could nominate in the given election at `now`.
    ///
    /// `Ok(())` means a `nominate` call submitted now would succeed; an
    /// error is exactly the rejection it would return. Never mutates.
    pub fn can_nominate(
        &self,
        election_id: ElectionId,
        who: &Address,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.check_nomination(election_id, who, now)
    }

    /// Whether `who` could vote in the given election at `now`.
    ///
    /// Covers phase, registration, the one-way latch and voting power;
    /// candidate choice is not part of the question. Never mutates.
    pub fn can_vote(
        &self,
        election_id: ElectionId,
        who: &Address,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.check_vote(election_id, None, who, now).map(|_| ())
    }

    /// The advisory voting power of `who`: their current token balance.
    ///
    /// Advisory only: the value that counts is the one frozen by
    /// `cast_vote`.
    pub fn voting_power(&self, who: &Address) -> Weight {
        self.tokens.balance_of(who)
    }

    /// Preconditions for `nominate`, first failure wins.
    pub(super) fn check_nomination(
        &self,
        election_id: ElectionId,
        who: &Address,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let election = self.election(election_id)?;
        let phase = election.phase_at(now);
        if phase != Phase::Nomination {
            return Err(Error::PhaseViolation {
                election: election_id,
                phase,
                action: "nomination",
            });
        }

        let already_nominated = self
            .store
            .candidates(election_id)
            .map(|roster| roster.iter().any(|c| &c.nominator == who))
            .unwrap_or(false);
        if already_nominated {
            return Err(Error::DuplicateCandidacy {
                election: election_id,
                nominator: who.clone(),
            });
        }

        Ok(())
    }

    /// Preconditions for `cast_vote`, first failure wins, in the fixed
    /// order: phase, candidate (when given), registration, latch, balance.
    /// Returns the weight a vote cast now would freeze.
    pub(super) fn check_vote(
        &self,
        election_id: ElectionId,
        candidate: Option<CandidateId>,
        who: &Address,
        now: DateTime<Utc>,
    ) -> Result<Weight> {
        let election = self.election(election_id)?;
        let phase = election.phase_at(now);
        if phase != Phase::Voting {
            return Err(Error::PhaseViolation {
                election: election_id,
                phase,
                action: "voting",
            });
        }

        if let Some(candidate_id) = candidate {
            let known = self
                .store
                .candidates(election_id)
                .map(|roster| roster.iter().any(|c| c.id == candidate_id))
                .unwrap_or(false);
            if !known {
                return Err(Error::UnknownCandidate {
                    election: election_id,
                    candidate: candidate_id,
                });
            }
        }

        let record = self.store.voter(election_id, who);
        if !record.map(|r| r.registered).unwrap_or(false) {
            return Err(Error::NotRegistered {
                election: election_id,
                voter: who.clone(),
            });
        }
        if record.map(VoterRecord::has_voted).unwrap_or(false) {
            return Err(Error::AlreadyVoted {
                election: election_id,
                voter: who.clone(),
            });
        }

        let weight = self.tokens.balance_of(who);
        if weight == 0 {
            return Err(Error::NoVotingPower(who.clone()));
        }

        Ok(weight)
    }
}
