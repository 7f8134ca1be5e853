//! Load failure taxonomy.
//!
//! A failed load and a cancelled load are different things: cancellation is
//! not an error and is reported as [`LoadEvent::Cancelled`](crate::LoadEvent)
//! instead of a variant here.

use thiserror::Error;

/// Why a catalog load did not produce a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The request never produced a response (DNS, connect, TLS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The source answered with a non-2xx status
    #[error("Catalog source answered with status {status}")]
    Status { status: u16 },

    /// The body is not a valid catalog document
    #[error("Malformed catalog: {0}")]
    Malformed(String),
}
