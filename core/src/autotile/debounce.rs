//! Debounced regeneration scheduling.
//!
//! Close and minimize events arrive in bursts (closing an application can
//! drop a dozen windows at once). Instead of re-tiling per event, affected
//! displays are marked here and regenerated together once the burst goes
//! quiet. A single deadline covers the whole queue and every mark pushes it
//! out, so each display re-tiles at most once per batch.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Displays waiting for a batched regeneration.
///
/// The host is expected to poll [`RegenerationQueue::drain_due`] (or drive a
/// timer from [`RegenerationQueue::deadline`]) and regenerate whatever comes
/// out.
#[derive(Debug)]
pub struct RegenerationQueue {
    pending: BTreeSet<String>,
    deadline: Option<Instant>,
    interval: Duration,
}

impl RegenerationQueue {
    /// Creates an empty queue that settles `interval` after the last mark.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            pending: BTreeSet::new(),
            deadline: None,
            interval,
        }
    }

    /// Marks `display` as needing regeneration and re-arms the deadline.
    ///
    /// Returns the new deadline.
    pub fn mark(&mut self, display: &str, now: Instant) -> Instant {
        self.pending.insert(display.to_owned());
        let deadline = now + self.interval;
        self.deadline = Some(deadline);
        deadline
    }

    /// Whether `display` is waiting for regeneration.
    #[must_use]
    pub fn is_pending(&self, display: &str) -> bool { self.pending.contains(display) }

    /// The instant the current batch settles, if one is pending.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> { self.deadline }

    /// Whether the current batch has settled as of `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool { self.deadline.is_some_and(|deadline| now >= deadline) }

    /// Takes all pending displays when the batch has settled.
    ///
    /// Returns an empty list while the deadline is still in the future.
    pub fn drain_due(&mut self, now: Instant) -> Vec<String> {
        if self.is_due(now) { self.drain_all() } else { Vec::new() }
    }

    /// Takes all pending displays regardless of the deadline.
    pub fn drain_all(&mut self) -> Vec<String> {
        self.deadline = None;
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Drops a single display from the queue, keeping the deadline for the
    /// rest.
    pub fn remove(&mut self, display: &str) {
        self.pending.remove(display);
        if self.pending.is_empty() {
            self.deadline = None;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
