//! Session crate for the movie awards ballot engine.
//!
//! This crate contains the caller-owned voting session that composes the
//! catalog, search, ballot and fetch crates into one lifecycle.

pub mod error;
pub mod voting;

pub use error::{Result, SessionError};
pub use voting::{LoadOutcome, VotingSession};
