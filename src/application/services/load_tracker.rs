use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Loading flag plus load generation for one component.
///
/// `begin` hands out a [`LoadGuard`]; the component reports loading while
/// any guard is alive, and the flag drops back on every exit path because
/// the guard releases itself on drop. Each guard also carries a generation
/// so only the most recently started load applies its result.
#[derive(Clone, Default)]
pub struct LoadTracker {
    in_flight: Arc<AtomicUsize>,
    generation: Arc<AtomicU64>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadGuard {
            tracker: self.clone(),
            generation,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

pub struct LoadGuard {
    tracker: LoadTracker,
    generation: u64,
}

impl LoadGuard {
    /// False once a newer load has started on the same tracker
    pub fn is_current(&self) -> bool {
        self.tracker.generation.load(Ordering::SeqCst) == self.generation
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
