mod election_core;
mod phase;
mod spec;

pub use election_core::{Election, ElectionMetadata, Schedule};
pub use phase::{Phase, TimeStatus};
pub use spec::ElectionSpec;
