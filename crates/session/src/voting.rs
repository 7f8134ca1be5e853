//! # Voting Session
//!
//! Owns everything one voting page needs for its lifetime:
//! 1. The current catalog and its category index (replaced on each successful load)
//! 2. The search front end over that catalog
//! 3. The live selection
//! 4. The in-flight fetch, if any, and the generation it belongs to
//!
//! Loads go through [`VotingSession::begin_load`] and
//! [`VotingSession::apply`]. Starting a load cancels the previous one, and
//! only the newest generation may apply its result, so a slow response can
//! never overwrite the state produced by a newer load.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use ballot::{Ballot, Selection, SelectionTracker};
use catalog::{Catalog, Category, CategoryIndex, Movie};
use fetch::{CancelHandle, CatalogClient, FetchSession, GenerationClock, LoadEvent, LoadFailure};
use search::{SearchIndex, SearchResults};

use crate::error::{Result, SessionError};

/// What applying a load event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A new catalog is in place
    Loaded { movies: usize, categories: usize },
    /// The load failed; the previous catalog is still in place
    Failed(LoadFailure),
    /// The load was cancelled; the previous catalog is still in place
    Cancelled,
    /// The event belonged to a superseded load and was discarded
    Stale { generation: u64 },
}

pub struct VotingSession {
    client: CatalogClient,
    clock: GenerationClock,
    active: Option<CancelHandle>,
    catalog: Arc<Catalog>,
    index: Arc<CategoryIndex>,
    search: SearchIndex,
    tracker: SelectionTracker,
    last_failure: Option<LoadFailure>,
}

impl VotingSession {
    /// Create a session with an empty catalog and no votes
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            clock: GenerationClock::new(),
            active: None,
            catalog: Arc::new(Catalog::empty()),
            index: Arc::new(CategoryIndex::new()),
            search: SearchIndex::default(),
            tracker: SelectionTracker::new(),
            last_failure: None,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Start a new load attempt, cancelling the one in flight (if any).
    ///
    /// The returned session must be driven by the caller and its event
    /// handed back through [`VotingSession::apply`] with its generation.
    pub fn begin_load(&mut self) -> FetchSession {
        if let Some(previous) = self.active.take() {
            debug!(
                "Cancelling in-flight load (generation {})",
                self.clock.current()
            );
            previous.cancel();
        }

        let generation = self.clock.next();
        let session = FetchSession::start(self.client.clone(), generation);
        self.active = Some(session.cancel_handle());
        session
    }

    /// Apply the terminal event of a load attempt.
    ///
    /// Events from any generation but the newest are discarded. Failures
    /// and cancellations are logged and leave the catalog untouched.
    pub fn apply(&mut self, generation: u64, event: LoadEvent) -> LoadOutcome {
        if !self.clock.is_current(generation) {
            warn!(
                "Discarding result of superseded load (generation {}, current {})",
                generation,
                self.clock.current()
            );
            return LoadOutcome::Stale { generation };
        }
        self.active = None;

        match event {
            LoadEvent::Success(catalog) => {
                self.last_failure = None;
                self.install(catalog)
            }
            LoadEvent::Failure(failure) => {
                error!(
                    "Catalog load failed, keeping {} movies: {}",
                    self.catalog.len(),
                    failure
                );
                self.last_failure = Some(failure.clone());
                LoadOutcome::Failed(failure)
            }
            LoadEvent::Cancelled => {
                warn!(
                    "Catalog load cancelled, keeping {} movies",
                    self.catalog.len()
                );
                LoadOutcome::Cancelled
            }
        }
    }

    /// Begin a load, wait for it, and apply the result.
    ///
    /// Dropping the returned future before it completes cancels the load,
    /// so the session does not report it as still in flight.
    pub async fn load(&mut self) -> LoadOutcome {
        let mut session = self.begin_load();
        let generation = session.generation();

        let guard = CancelOnDrop(Some(session.cancel_handle()));
        let event = session.next_event().await.unwrap_or(LoadEvent::Cancelled);
        guard.disarm();

        self.apply(generation, event)
    }

    /// Use an already loaded catalog (e.g. read from disk).
    ///
    /// Supersedes any load in flight, exactly like a newer fetch would.
    pub fn install_catalog(&mut self, catalog: Catalog) -> LoadOutcome {
        if let Some(previous) = self.active.take() {
            previous.cancel();
        }
        self.clock.next();
        self.last_failure = None;
        self.install(catalog)
    }

    fn install(&mut self, catalog: Catalog) -> LoadOutcome {
        let index = CategoryIndex::from_catalog(&catalog);
        let catalog = Arc::new(catalog);

        let outcome = LoadOutcome::Loaded {
            movies: catalog.len(),
            categories: index.category_count(),
        };
        info!(
            "Catalog installed: {} movies in {} categories (generation {})",
            catalog.len(),
            index.category_count(),
            self.clock.current()
        );

        self.search = SearchIndex::new(catalog.clone());
        self.index = Arc::new(index);
        self.catalog = catalog;
        outcome
    }

    /// Whether a load started by this session is neither applied nor cancelled
    pub fn is_loading(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.is_cancelled())
    }

    pub fn generation(&self) -> u64 {
        self.clock.current()
    }

    /// Failure of the most recent applied load, kept so a caller can offer a retry
    pub fn last_failure(&self) -> Option<&LoadFailure> {
        self.last_failure.as_ref()
    }

    /// Cancel any in-flight load. Called automatically on drop.
    pub fn shutdown(&mut self) {
        if let Some(active) = self.active.take() {
            info!(
                "Shutting down voting session, cancelling load (generation {})",
                self.clock.current()
            );
            active.cancel();
        }
    }

    // =========================================================================
    // Catalog views
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category_index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Category names in display order
    pub fn categories(&self) -> &[Category] {
        self.index.categories()
    }

    pub fn movies_in(&self, category: &str) -> &[Movie] {
        self.index.movies_in(category)
    }

    pub fn search(&self, query: &str) -> SearchResults {
        self.search.search(query)
    }

    pub fn search_in(&self, category: &str, query: &str) -> SearchResults {
        self.search.search_in(category, query)
    }

    // =========================================================================
    // Voting
    // =========================================================================

    /// Record a `(category, movie id)` pair exactly as the form reports it
    pub fn choose(&mut self, category: &str, movie_id: &str) {
        self.tracker.choose(category, movie_id);
    }

    /// Vote for a movie in its own category.
    ///
    /// Returns the category the vote was recorded under.
    pub fn vote(&mut self, movie_id: &str) -> Result<Category> {
        let movie = self
            .catalog
            .get(movie_id)
            .ok_or_else(|| SessionError::UnknownMovie {
                id: movie_id.to_string(),
            })?;

        let category = movie.category.clone();
        self.tracker.choose(category.clone(), movie_id);
        Ok(category)
    }

    pub fn selection(&self) -> &Selection {
        self.tracker.selection()
    }

    /// Panel heading for a category, reflecting the current vote
    pub fn heading(&self, category: &str) -> String {
        self.tracker.selection().heading(category)
    }

    pub fn missing_categories(&self) -> Vec<&str> {
        self.tracker.selection().missing_categories(&self.index)
    }

    /// Whether every loaded category has a vote
    pub fn is_complete(&self) -> bool {
        self.tracker.selection().is_complete(&self.index)
    }

    pub fn submit(&self) -> Ballot {
        let ballot = self.tracker.submit();
        info!("Ballot submitted with {} votes", ballot.len());
        ballot
    }

    /// Close the confirmation: every vote is cleared
    pub fn dismiss(&mut self) {
        self.tracker.reset();
    }
}

impl Drop for VotingSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for VotingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VotingSession")
            .field("endpoint", &self.client.endpoint())
            .field("generation", &self.clock.current())
            .field("loading", &self.active.is_some())
            .field("movies", &self.catalog.len())
            .field("votes", &self.tracker.selection().len())
            .finish()
    }
}

/// Cancels a load whose driving future was dropped before it finished
struct CancelOnDrop(Option<CancelHandle>);

impl CancelOnDrop {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            debug!("Load abandoned before completion, cancelling");
            handle.cancel();
        }
    }
}
