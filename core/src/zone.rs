//! Zone entity: a rectangular snap target inside a layout.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

// ============================================================================
// Geometry Mode
// ============================================================================

/// Which geometry representation is authoritative for a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryMode {
    /// `relative_geometry` holds fractions of the container size.
    #[default]
    Relative,
    /// `fixed_geometry` holds pixel offsets from the container origin.
    Fixed,
}

// ============================================================================
// Appearance
// ============================================================================

/// Visual styling carried by a zone.
///
/// Never read by detection or tiling; stored so that zone definitions
/// round-trip losslessly through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneAppearance {
    /// Fill color as a CSS hex string.
    /// Default: "#3daee9"
    pub background_color: String,

    /// Border color as a CSS hex string.
    /// Default: "#3daee9"
    pub border_color: String,

    /// Fill opacity in [0, 1].
    /// Default: 0.2
    pub background_opacity: f64,

    /// Border opacity in [0, 1].
    /// Default: 1.0
    pub border_opacity: f64,

    /// Border width in pixels.
    /// Default: 1
    pub border_width: u32,

    /// Corner radius in pixels.
    /// Default: 8
    pub border_radius: u32,

    /// Whether the colors above override the host theme.
    /// Default: false
    pub custom_color: bool,
}

impl Default for ZoneAppearance {
    fn default() -> Self {
        Self {
            background_color: "#3daee9".to_string(),
            border_color: "#3daee9".to_string(),
            background_opacity: 0.2,
            border_opacity: 1.0,
            border_width: 1,
            border_radius: 8,
            custom_color: false,
        }
    }
}

// ============================================================================
// Zone
// ============================================================================

/// A rectangular snap target inside a layout.
///
/// Exactly one geometry representation is authoritative, selected by
/// `geometry_mode`; the other is kept as a cache. `absolute_geometry` is the
/// pixel-space result of the latest
/// [`Layout::recalculate_zone_geometries`](crate::layout::Layout::recalculate_zone_geometries)
/// pass and is stale until that runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    id: Uuid,

    /// Ordering key, unique within a layout. Uniqueness is a caller
    /// obligation; it is not re-validated at detection time.
    pub zone_number: u32,

    /// Which of the two geometry fields is authoritative.
    pub geometry_mode: GeometryMode,

    /// Geometry as fractions of the container (unit square coordinates).
    pub relative_geometry: Rect,

    /// Geometry as pixel offsets from the container origin. Not scaled
    /// when the container resizes.
    pub fixed_geometry: Rect,

    /// Cached pixel-space geometry from the latest recalculation pass.
    #[serde(default)]
    pub absolute_geometry: Rect,

    /// Presentation attributes, carried through untouched.
    #[serde(default)]
    pub appearance: ZoneAppearance,
}

impl Zone {
    /// Creates a zone whose geometry scales with its container.
    #[must_use]
    pub fn relative(zone_number: u32, relative_geometry: Rect) -> Self {
        Self {
            id: Uuid::now_v7(),
            zone_number,
            geometry_mode: GeometryMode::Relative,
            relative_geometry,
            fixed_geometry: Rect::ZERO,
            absolute_geometry: Rect::ZERO,
            appearance: ZoneAppearance::default(),
        }
    }

    /// Creates a zone pinned at pixel offsets from the container origin.
    #[must_use]
    pub fn fixed(zone_number: u32, fixed_geometry: Rect) -> Self {
        Self {
            id: Uuid::now_v7(),
            zone_number,
            geometry_mode: GeometryMode::Fixed,
            relative_geometry: Rect::ZERO,
            fixed_geometry,
            absolute_geometry: Rect::ZERO,
            appearance: ZoneAppearance::default(),
        }
    }

    /// Stable identity of the zone. Survives serialization; regeneration
    /// produces fresh zones with fresh ids.
    #[must_use]
    pub const fn id(&self) -> Uuid { self.id }
}

// ============================================================================
// Tests
// ============================================================================
