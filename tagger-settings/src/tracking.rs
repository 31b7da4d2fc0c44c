use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared switch deciding whether field changes are recorded in the history.
///
/// Recording is enabled while no [`TrackingGuard`] is alive. Guards nest.
#[derive(Debug, Clone, Default)]
pub struct Tracking {
    suspensions: Arc<AtomicUsize>,
}

impl Tracking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.suspensions.load(Ordering::SeqCst) == 0
    }

    /// Disables recording until the returned guard is dropped.
    #[must_use = "tracking resumes as soon as the guard is dropped"]
    pub fn suspend(&self) -> TrackingGuard {
        self.suspensions.fetch_add(1, Ordering::SeqCst);
        TrackingGuard { suspensions: Arc::clone(&self.suspensions) }
    }
}

#[derive(Debug)]
pub struct TrackingGuard {
    suspensions: Arc<AtomicUsize>,
}

impl Drop for TrackingGuard {
    fn drop(&mut self) {
        self.suspensions.fetch_sub(1, Ordering::SeqCst);
    }
}
