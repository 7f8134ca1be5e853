//! Generation numbers and cancellation handles for load attempts.

use tokio_util::sync::CancellationToken;

/// Monotonic generation counter for load attempts.
///
/// Every new attempt takes the next number; only the attempt holding the
/// current number may apply its result.
#[derive(Debug, Default, Clone)]
pub struct GenerationClock {
    current: u64,
}

impl GenerationClock {
    /// Creates a new clock. The first generation handed out is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock and returns the new generation
    pub fn next(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// Latest generation handed out (0 before the first)
    pub const fn current(&self) -> u64 {
        self.current
    }

    pub const fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}

/// Cloneable handle that cancels one fetch session.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Future resolving when cancellation is requested
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}
