//! Settings surface consumed by the tiling core.
//!
//! The core never reads configuration storage. Hosts hand it a
//! [`SettingsSource`] implementation; [`StaticSettings`] is the plain-data
//! implementation used by embedders and tests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read-only settings queried by the auto-tile service.
///
/// Values are read at event time, so a host can swap behavior between
/// events without rebuilding the service.
pub trait SettingsSource {
    /// Whether newly opened windows become master instead of appending to
    /// the stack.
    fn new_window_as_master(&self) -> bool;

    /// Whether minimized windows keep their place in layouts. When true,
    /// minimize/restore events do not affect tiling at all.
    fn count_minimized_windows(&self) -> bool;

    /// Padding between zones, in pixels. Each zone cedes half of it per
    /// edge, so neighbours end up exactly this far apart.
    fn zone_padding_px(&self) -> f64;

    /// Gap between the zone area and the display edge, in pixels.
    fn outer_gap_px(&self) -> f64;
}

/// Plain-data settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticSettings {
    /// Whether new windows take the master slot.
    /// Default: false
    pub new_window_as_master: bool,

    /// Whether minimized windows keep participating in layouts.
    /// Default: false
    pub count_minimized_windows: bool,

    /// Padding between zones in pixels.
    /// Default: 8.0
    pub zone_padding_px: f64,

    /// Gap between zones and the display edge in pixels.
    /// Default: 0.0
    pub outer_gap_px: f64,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            new_window_as_master: false,
            count_minimized_windows: false,
            zone_padding_px: 8.0,
            outer_gap_px: 0.0,
        }
    }
}

impl SettingsSource for StaticSettings {
    fn new_window_as_master(&self) -> bool { self.new_window_as_master }

    fn count_minimized_windows(&self) -> bool { self.count_minimized_windows }

    fn zone_padding_px(&self) -> f64 { self.zone_padding_px }

    fn outer_gap_px(&self) -> f64 { self.outer_gap_px }
}
