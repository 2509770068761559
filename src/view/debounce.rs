//! Resize coalescing.
//!
//! Terminal resizes arrive in bursts while the user drags the window edge.
//! Re-deriving the view on each one is wasted work, so sizes are held until
//! no new size has been seen for the settle period; only the last one wins.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ResizeDebouncer<T> {
    settle: Duration,
    current: Option<T>,
    pending: Option<(T, Instant)>,
}

impl<T: Copy + PartialEq> ResizeDebouncer<T> {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            current: None,
            pending: None,
        }
    }

    /// Accepts `size` as settled immediately, for the first frame.
    pub fn prime(&mut self, size: T) {
        self.current = Some(size);
        self.pending = None;
    }

    /// Records a size seen at `now`.
    ///
    /// Returns true if the size differs from the settled one, meaning the
    /// display is stale until [`poll`](Self::poll) reports a settled size.
    pub fn observe(&mut self, size: T, now: Instant) -> bool {
        if self.current == Some(size) {
            self.pending = None;
            return false;
        }
        // Repeats of the pending size do not restart the settle period.
        if matches!(self.pending, Some((pending, _)) if pending == size) {
            return true;
        }
        self.pending = Some((size, now));
        true
    }

    /// Returns the latest size once it has been stable for the settle period.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (size, seen) = self.pending?;
        if now.duration_since(seen) < self.settle {
            return None;
        }
        self.pending = None;
        self.current = Some(size);
        Some(size)
    }

    /// Whether a size change is waiting to settle.
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// The last settled size.
    pub fn current(&self) -> Option<T> {
        self.current
    }
}
