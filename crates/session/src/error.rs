//! Errors raised by voting session operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A vote named a movie the loaded catalog does not contain
    #[error("Unknown movie '{id}'")]
    UnknownMovie { id: String },
}

pub type Result<T> = std::result::Result<T, SessionError>;
