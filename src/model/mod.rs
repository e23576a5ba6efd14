pub mod candidate;
pub mod common;
pub mod election;
pub mod receipt;
pub mod voter;
