//! The ledger's persisted state: three tables, the election ID counter,
//! and the append-only vote log.
//!
//! Rows are only ever inserted or updated in place; nothing is deleted.
//! The store is owned exclusively by the [`Ledger`](crate::Ledger) and is
//! fully serialisable, so a snapshot of it is a snapshot of the system.

mod counter;

pub use counter::Counter;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{
    candidate::Candidate,
    common::{Address, CandidateId, ElectionId},
    election::Election,
    voter::{VoteEvent, VoterRecord},
};

/// All authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    elections: BTreeMap<ElectionId, Election>,
    candidates: BTreeMap<ElectionId, Vec<Candidate>>,
    voters: BTreeMap<ElectionId, BTreeMap<Address, VoterRecord>>,
    election_ids: Counter,
    vote_log: Vec<VoteEvent>,
}

impl Store {
    /// An empty store; election IDs start at 1.
    pub fn new() -> Self {
        Self {
            elections: BTreeMap::new(),
            candidates: BTreeMap::new(),
            voters: BTreeMap::new(),
            election_ids: Counter::new(1),
            vote_log: Vec::new(),
        }
    }

    /// Allocate the next election ID. IDs are never reused.
    pub(crate) fn next_election_id(&mut self) -> ElectionId {
        self.election_ids.next()
    }

    /// Insert a freshly created election along with its empty roster and
    /// voter table.
    pub(crate) fn insert_election(&mut self, election: Election) {
        let id = election.id;
        self.elections.insert(id, election);
        self.candidates.insert(id, Vec::new());
        self.voters.insert(id, BTreeMap::new());
    }

    pub fn election(&self, id: ElectionId) -> Option<&Election> {
        self.elections.get(&id)
    }

    pub(crate) fn election_mut(&mut self, id: ElectionId) -> Option<&mut Election> {
        self.elections.get_mut(&id)
    }

    /// All elections, in ID order.
    pub fn elections(&self) -> impl Iterator<Item = &Election> {
        self.elections.values()
    }

    /// The election's candidates, in candidate-ID order.
    pub fn candidates(&self, election: ElectionId) -> Option<&[Candidate]> {
        self.candidates.get(&election).map(Vec::as_slice)
    }

    pub(crate) fn candidates_mut(&mut self, election: ElectionId) -> Option<&mut Vec<Candidate>> {
        self.candidates.get_mut(&election)
    }

    pub(crate) fn candidate_mut(
        &mut self,
        election: ElectionId,
        candidate: CandidateId,
    ) -> Option<&mut Candidate> {
        self.candidates
            .get_mut(&election)?
            .iter_mut()
            .find(|c| c.id == candidate)
    }

    pub fn voter(&self, election: ElectionId, address: &Address) -> Option<&VoterRecord> {
        self.voters.get(&election)?.get(address)
    }

    pub(crate) fn voter_mut(
        &mut self,
        election: ElectionId,
        address: &Address,
    ) -> Option<&mut VoterRecord> {
        self.voters.get_mut(&election)?.get_mut(address)
    }

    /// The voter's record, created empty on first touch.
    pub(crate) fn voter_entry(
        &mut self,
        election: ElectionId,
        address: Address,
    ) -> &mut VoterRecord {
        self.voters
            .entry(election)
            .or_default()
            .entry(address)
            .or_default()
    }

    pub(crate) fn push_vote_event(&mut self, event: VoteEvent) {
        self.vote_log.push(event);
    }

    /// Every vote ever cast, in application order.
    pub fn vote_log(&self) -> &[VoteEvent] {
        &self.vote_log
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
