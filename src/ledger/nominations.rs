//! Candidacy Registry: per-election candidate rosters.

use chrono::{DateTime, Utc};
use log::info;

use crate::error::Result;
use crate::model::{
    candidate::Candidate,
    common::{Address, CandidateId, ElectionId},
    receipt::NominationReceipt,
};
use crate::tokens::TokenLedger;

use super::Ledger;

impl<T: TokenLedger> Ledger<T> {
    /// Nominate a candidate in the given election.
    ///
    /// Only allowed while the election is in its `Nomination` phase, and a
    /// principal may hold at most one candidate slot per election.
    /// Candidate IDs are sequential from 1, with an independent counter
    /// per election.
    pub fn nominate(
        &mut self,
        election_id: ElectionId,
        caller: &Address,
        name: String,
        manifesto_uri: String,
        now: DateTime<Utc>,
    ) -> Result<NominationReceipt> {
        self.check_nomination(election_id, caller, now)?;

        let roster = self
            .store
            .candidates_mut(election_id)
            .expect("existence checked above");
        let candidate_id = roster.len() as CandidateId + 1;
        roster.push(Candidate::new(
            candidate_id,
            caller.clone(),
            name,
            manifesto_uri,
        ));
        info!("{caller} nominated candidate {candidate_id} in election {election_id}");

        Ok(NominationReceipt {
            election_id,
            candidate_id,
        })
    }

    /// The election's candidates, ordered by candidate ID ascending.
    ///
    /// Available in every phase, so rosters stay inspectable after the
    /// election ends.
    pub fn candidates(&self, election_id: ElectionId) -> Result<&[Candidate]> {
        self.election(election_id)?;
        Ok(self.store.candidates(election_id).unwrap_or(&[]))
    }
}
