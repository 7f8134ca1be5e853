//! One load attempt: `Idle -> Loading -> {Succeeded, Failed, Cancelled}`.
//!
//! A [`FetchSession`] is lazy. Starting it only stamps it with a generation;
//! the request goes out on the first call to [`FetchSession::next_event`],
//! which yields exactly one terminal [`LoadEvent`] and `None` afterwards.

use catalog::Catalog;
use tracing::{debug, info, warn};

use crate::client::CatalogClient;
use crate::error::LoadFailure;
use crate::token::CancelHandle;

/// Terminal outcome of a load attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Success(Catalog),
    Failure(LoadFailure),
    Cancelled,
}

impl LoadEvent {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadEvent::Success(_))
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Idle,
    Loading,
    Succeeded,
    Failed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionState::Succeeded | SessionState::Failed | SessionState::Cancelled
        )
    }
}

pub struct FetchSession {
    generation: u64,
    client: CatalogClient,
    cancel: CancelHandle,
    state: SessionState,
}

impl FetchSession {
    /// Prepare a load attempt. No I/O happens until [`FetchSession::next_event`].
    pub fn start(client: CatalogClient, generation: u64) -> Self {
        debug!("Fetch session {} created for {}", generation, client.endpoint());
        Self {
            generation,
            client,
            cancel: CancelHandle::new(),
            state: SessionState::Idle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle that can cancel this session from elsewhere
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Ask the session to stop.
    ///
    /// Before the terminal event this turns it into [`LoadEvent::Cancelled`];
    /// afterwards it does nothing.
    pub fn cancel(&self) {
        if self.state.is_terminal() {
            debug!(
                "Ignoring cancel for fetch session {} (already {:?})",
                self.generation, self.state
            );
            return;
        }
        self.cancel.cancel();
    }

    /// Drive the session to its terminal event.
    ///
    /// Returns `Some(event)` exactly once, then `None`. A response that
    /// arrives after cancellation was requested is discarded and reported
    /// as [`LoadEvent::Cancelled`].
    pub async fn next_event(&mut self) -> Option<LoadEvent> {
        if self.state.is_terminal() {
            return None;
        }

        let cancel = self.cancel.clone();
        let event = if cancel.is_cancelled() {
            LoadEvent::Cancelled
        } else {
            self.state = SessionState::Loading;
            info!(
                "Loading catalog from {} (session {})",
                self.client.endpoint(),
                self.generation
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => LoadEvent::Cancelled,
                result = self.client.fetch() => {
                    if cancel.is_cancelled() {
                        LoadEvent::Cancelled
                    } else {
                        match result {
                            Ok(catalog) => LoadEvent::Success(catalog),
                            Err(failure) => LoadEvent::Failure(failure),
                        }
                    }
                }
            }
        };

        self.state = match &event {
            LoadEvent::Success(catalog) => {
                info!(
                    "Fetch session {} succeeded with {} movies",
                    self.generation,
                    catalog.len()
                );
                SessionState::Succeeded
            }
            LoadEvent::Failure(failure) => {
                warn!("Fetch session {} failed: {}", self.generation, failure);
                SessionState::Failed
            }
            LoadEvent::Cancelled => {
                warn!("Fetch session {} cancelled", self.generation);
                SessionState::Cancelled
            }
        };

        Some(event)
    }

    /// Consume the session and wait for its terminal event
    pub async fn finish(mut self) -> LoadEvent {
        self.next_event().await.unwrap_or(LoadEvent::Cancelled)
    }
}

impl std::fmt::Debug for FetchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchSession")
            .field("generation", &self.generation)
            .field("endpoint", &self.client.endpoint())
            .field("state", &self.state)
            .finish()
    }
}
