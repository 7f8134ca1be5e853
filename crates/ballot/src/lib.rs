//! # Ballot Crate
//!
//! Tracks one vote per award category and snapshots the votes into a ballot.
//!
//! ## Components
//!
//! - **Selection**: immutable-style reducer, `choose` returns the next state
//! - **SelectionTracker**: owns the live selection for `&mut self` callers
//! - **Ballot**: owned snapshot taken at submit time
//!
//! ## Example Usage
//!
//! ```
//! use ballot::Selection;
//!
//! let selection = Selection::new()
//!     .choose("Best Actor", "chadwick-boseman")
//!     .choose("Best Picture", "nomadland");
//!
//! let ballot = selection.submit();
//! assert_eq!(ballot.get("Best Actor"), Some("chadwick boseman"));
//! ```

pub mod types;
pub mod tracker;

// Re-export commonly used types
pub use types::{Ballot, Selection};
pub use tracker::SelectionTracker;
