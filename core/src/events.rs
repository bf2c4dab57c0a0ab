//! Output boundary: assignment records, operation outcomes, and the
//! arrangement observer.
//!
//! The core never talks to a compositor or transport directly. After each
//! regeneration it hands the full per-display assignment batch to an
//! [`ArrangementSink`]; hosts forward it wherever windows actually move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::geometry::Rect;
use crate::traits::WindowId;

// ============================================================================
// Event Names
// ============================================================================

/// Event names for hosts that bridge arrangement changes onto a transport.
pub mod names {
    /// A display's window-to-zone assignments changed.
    pub const GEOMETRIES_CHANGED: &str = "zoner://tiling/geometries-changed";

    /// Zone highlight request forwarded from the detector.
    pub const HIGHLIGHT_ZONES: &str = "zoner://overlay/highlight-zones";

    /// All zone highlights should be dropped.
    pub const CLEAR_HIGHLIGHTS: &str = "zoner://overlay/clear-highlights";
}

// ============================================================================
// Assignments
// ============================================================================

/// Inline capacity for assignment batches.
///
/// Matches the generated-rect capacity: one assignment per tiled window.
pub const ASSIGNMENTS_INLINE_CAP: usize = 16;

/// One regeneration's worth of assignments for a display.
pub type Assignments = SmallVec<[Assignment; ASSIGNMENTS_INLINE_CAP]>;

/// A window-to-zone pairing in integer device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The window being placed.
    pub window_id: WindowId,
    /// The zone it was paired with.
    pub zone_id: Uuid,
    /// Final geometry, after padding and clipping.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Assignment {
    /// Builds an assignment from a resolved pixel-space geometry.
    #[must_use]
    pub fn new(window_id: WindowId, zone_id: Uuid, geometry: &Rect) -> Self {
        let (x, y, width, height) = geometry.to_pixel();
        Self {
            window_id,
            zone_id,
            x,
            y,
            width,
            height,
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of one lifecycle operation on the auto-tile service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileOutcome {
    /// Whether auto-tiling handled the event. `false` tells the caller to
    /// fall back to its non-tiled behavior (manual snapping, free
    /// placement).
    pub handled: bool,

    /// The display's full assignment set when a regeneration ran; empty for
    /// handled no-ops and for displays whose last eligible window left.
    pub assignments: Assignments,
}

impl TileOutcome {
    /// The event was not for us; caller should fall back.
    #[must_use]
    pub fn unhandled() -> Self {
        Self {
            handled: false,
            assignments: Assignments::new(),
        }
    }

    /// The event was ours but required no regeneration. Nothing was
    /// emitted.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            handled: true,
            assignments: Assignments::new(),
        }
    }

    /// A regeneration ran and produced `assignments`.
    #[must_use]
    pub const fn regenerated(assignments: Assignments) -> Self {
        Self {
            handled: true,
            assignments,
        }
    }
}

// ============================================================================
// Observer
// ============================================================================

/// Observer for regeneration results.
///
/// Called exactly once per regeneration per display, including with an
/// empty batch when the display's last eligible window goes away (so stale
/// assignments can be cleared downstream).
pub trait ArrangementSink {
    /// `assignments` is the display's complete arrangement, not a delta.
    fn geometries_changed(&mut self, display: &str, assignments: &[Assignment]);
}

/// Sink that drops everything; useful for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ArrangementSink for NullSink {
    fn geometries_changed(&mut self, _display: &str, _assignments: &[Assignment]) {}
}

// ============================================================================
// Tests
// ============================================================================
