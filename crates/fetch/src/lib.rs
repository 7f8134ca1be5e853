//! Catalog loading over HTTP with cooperative cancellation.
//!
//! This crate provides:
//! - [`CatalogClient`]: a single GET of the catalog document
//! - [`FetchSession`]: one lazy, cancellable load attempt yielding a [`LoadEvent`]
//! - [`GenerationClock`]: numbers load attempts so late completions can be discarded
//!
//! ## Example Usage
//! ```ignore
//! use fetch::{CatalogClient, FetchConfig, FetchSession, GenerationClock, LoadEvent};
//!
//! let client = CatalogClient::new(&FetchConfig::default())?;
//! let mut clock = GenerationClock::new();
//!
//! let mut session = FetchSession::start(client, clock.next());
//! match session.next_event().await {
//!     Some(LoadEvent::Success(catalog)) => println!("{} movies", catalog.len()),
//!     Some(LoadEvent::Failure(failure)) => eprintln!("load failed: {}", failure),
//!     Some(LoadEvent::Cancelled) | None => {}
//! }
//! ```

pub mod client;
pub mod error;
pub mod session;
pub mod token;

pub use client::{CatalogClient, FetchConfig, DEFAULT_ENDPOINT};
pub use error::LoadFailure;
pub use session::{FetchSession, LoadEvent, SessionState};
pub use token::{CancelHandle, GenerationClock};
