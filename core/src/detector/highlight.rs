//! Zone highlight forwarding.
//!
//! The detector never renders anything. Hosts install a [`HighlightSink`]
//! (an overlay surface, an OSD, a test recorder) and the detector forwards
//! highlight requests to it verbatim, adding no state of its own.

use uuid::Uuid;

/// Receiver for zone highlight requests.
pub trait HighlightSink {
    /// Highlights exactly `zones`, replacing any previous highlight set.
    fn highlight_zones(&mut self, zones: &[Uuid]);

    /// Drops all highlights.
    fn clear_highlights(&mut self);
}
