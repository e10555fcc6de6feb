use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag used to ask a worker to stop.
///
/// Cloning the token yields a handle on the same flag.
/// Workers are expected to poll [`is_cancelled`](Self::is_cancelled) at the top of their outer loops.
///
/// # Example
///
/// ```
/// # use abagen::utils::CancellationToken;
/// let token = CancellationToken::new();
/// let worker_token = token.clone();
/// assert!(!worker_token.is_cancelled());
/// token.cancel();
/// assert!(worker_token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the cancellation flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` iff [`cancel`](Self::cancel) has been called on this token or one of its clones.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
