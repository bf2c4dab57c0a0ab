//! Collaborator contracts for the surrounding window-manager host.
//!
//! The core is compositor-agnostic: everything it needs to know about real
//! windows and displays comes in through these traits, and everything it
//! decides goes back out through them. Hosts implement them over whatever
//! IPC or in-process state they have; tests implement them with recording
//! doubles.

use uuid::Uuid;

use crate::geometry::Rect;

/// Identifier of a window as known to the host window tracker.
pub type WindowId = u32;

/// Window bookkeeping owned by the host.
pub trait WindowTracker {
    /// Whether the host considers `window` floating. Floating windows are
    /// never auto-tiled.
    fn is_window_floating(&self, window: WindowId) -> bool;

    /// Records that `window` was paired with `zone` on `display` during a
    /// regeneration. `virtual_desktop` is forwarded verbatim; the core does
    /// not track desktop sessions.
    fn assign_window_to_zone(
        &mut self,
        window: WindowId,
        zone: Uuid,
        display: &str,
        virtual_desktop: Option<&str>,
    );
}

/// Display geometry owned by the host.
pub trait DisplayAreas {
    /// Usable (work) area of `display`: the full frame minus panels and
    /// other reserved struts. `None` when the display is unknown.
    fn usable_area(&self, display: &str) -> Option<Rect>;
}
