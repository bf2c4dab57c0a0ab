//! Zone detection: mapping cursor positions to snap targets.
//!
//! # How It Works
//!
//! While a window is dragged, the host asks the detector which zone (or
//! zones) the cursor points at:
//!
//! - [`ZoneDetector::detect_zone`] picks the single best zone: the one
//!   containing the cursor, else the nearest by Euclidean distance.
//! - [`ZoneDetector::detect_multi_zone`] additionally merges zones near the
//!   cursor into one combined snap target, then flood-fills outward so the
//!   combined rectangle never half-covers a zone:
//!
//! ```text
//!      +----+----+            +---------+
//!      | A  | B  |   cursor   | A  ∪  B |
//!      +----+--+-+   on A/B   +-------+-+  ...any zone overlapping
//!      |   C~~~|... edge  =>  |   C   |    the union is absorbed
//!      +-------+              +-------+
//! ```
//!
//! The detector holds no zone state of its own: queries take the currently
//! bound layout as a parameter (`None` means no layout is bound and every
//! query returns an empty result). Zones with zero-size absolute geometry
//! (the clipping sentinel) are invisible to every query.

pub mod highlight;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::detection::{
    ADJACENCY_EDGE_TOLERANCE, ADJACENCY_MIN_OVERLAP, DEFAULT_ADJACENT_THRESHOLD,
    DEFAULT_EDGE_THRESHOLD, FLOOD_FILL_MAX_PASSES,
};
use crate::geometry::{Point, Rect};
use crate::layout::Layout;
use crate::zone::Zone;
use self::highlight::HighlightSink;

// ============================================================================
// Configuration
// ============================================================================

/// Tunables for zone detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Distance in pixels within which zones count as "nearby" for
    /// multi-zone snaps.
    /// Default: 50.0
    pub adjacent_threshold: f64,

    /// Distance in pixels for edge-proximity queries.
    /// Default: 25.0
    pub edge_threshold: f64,

    /// Whether multi-zone detection is active. When off,
    /// [`ZoneDetector::detect_multi_zone`] degrades to single-zone
    /// detection.
    /// Default: false
    pub multi_zone_enabled: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            adjacent_threshold: DEFAULT_ADJACENT_THRESHOLD,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            multi_zone_enabled: false,
        }
    }
}

// ============================================================================
// Match Result
// ============================================================================

/// Result of a detection query.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMatch {
    /// Primary matched zone, `None` when nothing matched.
    pub zone_id: Option<Uuid>,

    /// The primary zone's ordering number.
    pub zone_number: Option<u32>,

    /// Distance from the cursor to the primary zone: 0 inside, infinite
    /// when nothing matched.
    pub distance: f64,

    /// Geometry to snap the window to: the primary zone's absolute rect,
    /// or the combined bounds for a multi-zone match.
    pub snap_geometry: Rect,

    /// Whether `snap_geometry` spans more than one zone.
    pub is_multi_zone: bool,

    /// Every zone participating in a multi-zone match, ascending by zone
    /// number. Empty for single matches.
    pub adjacent_zones: Vec<Uuid>,
}

impl ZoneMatch {
    /// The empty result: no layout bound, or no zones to match.
    #[must_use]
    pub fn none() -> Self {
        Self {
            zone_id: None,
            zone_number: None,
            distance: f64::INFINITY,
            snap_geometry: Rect::ZERO,
            is_multi_zone: false,
            adjacent_zones: Vec::new(),
        }
    }

    fn single(zone: &Zone, distance: f64) -> Self {
        Self {
            zone_id: Some(zone.id()),
            zone_number: Some(zone.zone_number),
            distance,
            snap_geometry: zone.absolute_geometry,
            is_multi_zone: false,
            adjacent_zones: Vec::new(),
        }
    }

    /// Whether the query matched anything.
    #[must_use]
    pub const fn is_match(&self) -> bool { self.zone_id.is_some() }
}

// ============================================================================
// Detector
// ============================================================================

/// Maps cursor positions to snap targets within a bound layout.
pub struct ZoneDetector {
    config: DetectorConfig,
    highlighter: Option<Box<dyn HighlightSink>>,
}

impl Default for ZoneDetector {
    fn default() -> Self { Self::new(DetectorConfig::default()) }
}

impl fmt::Debug for ZoneDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneDetector")
            .field("config", &self.config)
            .field("has_highlighter", &self.highlighter.is_some())
            .finish()
    }
}

impl ZoneDetector {
    /// Creates a detector with the given tunables and no highlight sink.
    #[must_use]
    pub const fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            highlighter: None,
        }
    }

    /// Current tunables.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig { &self.config }

    /// Replaces the tunables; takes effect on the next query.
    pub fn set_config(&mut self, config: DetectorConfig) { self.config = config; }

    /// Installs the highlight receiver.
    pub fn set_highlighter(&mut self, highlighter: Box<dyn HighlightSink>) {
        self.highlighter = Some(highlighter);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Finds the single best zone for `cursor`.
    ///
    /// A zone containing the cursor wins with distance 0 (ties broken by
    /// the lowest zone number); otherwise the zone nearest by Euclidean
    /// distance wins. No layout or no zones yields [`ZoneMatch::none`].
    #[must_use]
    pub fn detect_zone(&self, layout: Option<&Layout>, cursor: Point) -> ZoneMatch {
        let Some(layout) = layout else {
            return ZoneMatch::none();
        };

        let mut best: Option<(&Zone, f64)> = None;
        for zone in layout.zones_by_number() {
            if zone.absolute_geometry.is_empty() {
                continue;
            }

            let distance = zone.absolute_geometry.distance_to_point(cursor);
            if distance <= 0.0 {
                return ZoneMatch::single(zone, 0.0);
            }
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((zone, distance));
            }
        }

        best.map_or_else(ZoneMatch::none, |(zone, distance)| {
            ZoneMatch::single(zone, distance)
        })
    }

    /// Finds a combined snap target spanning every zone near `cursor`.
    ///
    /// Zones within `adjacent_threshold` of the cursor seed the selection;
    /// their bounding rectangle is then flood-filled: any zone overlapping
    /// the bounds is absorbed and the bounds re-unioned, until a full pass
    /// absorbs nothing or the pass cap is hit (logged, partial selection
    /// kept). Fewer than two seed zones, or multi-zone detection being
    /// disabled, degrade to [`Self::detect_zone`].
    #[must_use]
    pub fn detect_multi_zone(&self, layout: Option<&Layout>, cursor: Point) -> ZoneMatch {
        if !self.config.multi_zone_enabled {
            return self.detect_zone(layout, cursor);
        }

        let Some(layout) = layout else {
            return ZoneMatch::none();
        };

        let mut nearby: Vec<(&Zone, f64)> = Vec::new();
        for zone in layout.zones_by_number() {
            if zone.absolute_geometry.is_empty() {
                continue;
            }
            let distance = zone.absolute_geometry.distance_to_point(cursor);
            if distance <= self.config.adjacent_threshold {
                nearby.push((zone, distance));
            }
        }

        if nearby.len() < 2 {
            return self.detect_zone(Some(layout), cursor);
        }

        // First minimum wins; nearby is already in zone-number order.
        let mut primary = nearby[0].0;
        let mut primary_distance = nearby[0].1;
        for &(zone, distance) in &nearby[1..] {
            if distance < primary_distance {
                primary = zone;
                primary_distance = distance;
            }
        }

        let mut selected: Vec<&Zone> = nearby.iter().map(|&(zone, _)| zone).collect();
        let mut bounds = selected[0].absolute_geometry;
        for zone in &selected[1..] {
            bounds = bounds.union(&zone.absolute_geometry);
        }

        // Flood fill: the combined bounds must never half-cover a zone.
        let mut passes = 0;
        loop {
            let mut grew = false;
            for zone in layout.zones() {
                if zone.absolute_geometry.is_empty() {
                    continue;
                }
                if selected.iter().any(|kept| kept.id() == zone.id()) {
                    continue;
                }
                if zone.absolute_geometry.intersects(&bounds) {
                    bounds = bounds.union(&zone.absolute_geometry);
                    selected.push(zone);
                    grew = true;
                }
            }

            if !grew {
                break;
            }
            passes += 1;
            if passes >= FLOOD_FILL_MAX_PASSES {
                tracing::warn!(
                    "multi-zone flood fill stopped after {FLOOD_FILL_MAX_PASSES} passes; keeping the partial selection"
                );
                break;
            }
        }

        selected.sort_by_key(|zone| zone.zone_number);
        ZoneMatch {
            zone_id: Some(primary.id()),
            zone_number: Some(primary.zone_number),
            distance: primary_distance,
            snap_geometry: bounds,
            is_multi_zone: true,
            adjacent_zones: selected.iter().map(|zone| zone.id()).collect(),
        }
    }

    /// Zones containing `point` or within `edge_threshold` of it, with
    /// their distances, sorted ascending (ties keep zone-number order).
    #[must_use]
    pub fn zones_near_edge(&self, layout: Option<&Layout>, point: Point) -> Vec<(Uuid, f64)> {
        let Some(layout) = layout else {
            return Vec::new();
        };

        let mut hits: Vec<(Uuid, f64)> = Vec::new();
        for zone in layout.zones_by_number() {
            if zone.absolute_geometry.is_empty() {
                continue;
            }
            let distance = zone.absolute_geometry.distance_to_point(point);
            if distance <= self.config.edge_threshold {
                hits.push((zone.id(), distance));
            }
        }

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits
    }

    /// Whether two zones share a boundary.
    ///
    /// The edges must line up within a fixed tolerance of a few pixels,
    /// and the zones must overlap along the shared axis by at least a
    /// fraction of the shorter zone's dimension, so corner-touching zones
    /// are not adjacent.
    #[must_use]
    pub fn are_zones_adjacent(a: &Zone, b: &Zone) -> bool {
        let first = &a.absolute_geometry;
        let second = &b.absolute_geometry;
        if first.is_empty() || second.is_empty() {
            return false;
        }

        shares_vertical_edge(first, second) || shares_horizontal_edge(first, second)
    }

    // ========================================================================
    // Highlight Forwarding
    // ========================================================================

    /// Forwards a highlight request to the installed sink; no-op without
    /// one.
    pub fn highlight_zones(&mut self, zones: &[Uuid]) {
        if let Some(highlighter) = self.highlighter.as_mut() {
            highlighter.highlight_zones(zones);
        }
    }

    /// Forwards a clear request to the installed sink; no-op without one.
    pub fn clear_highlights(&mut self) {
        if let Some(highlighter) = self.highlighter.as_mut() {
            highlighter.clear_highlights();
        }
    }
}

/// Left/right neighbours: vertical edges aligned, overlap along y.
fn shares_vertical_edge(first: &Rect, second: &Rect) -> bool {
    let touches = (first.right() - second.x).abs() <= ADJACENCY_EDGE_TOLERANCE
        || (second.right() - first.x).abs() <= ADJACENCY_EDGE_TOLERANCE;
    if !touches {
        return false;
    }

    let overlap = first.bottom().min(second.bottom()) - first.y.max(second.y);
    overlap >= ADJACENCY_MIN_OVERLAP * first.height.min(second.height)
}

/// Above/below neighbours: horizontal edges aligned, overlap along x.
fn shares_horizontal_edge(first: &Rect, second: &Rect) -> bool {
    let touches = (first.bottom() - second.y).abs() <= ADJACENCY_EDGE_TOLERANCE
        || (second.bottom() - first.y).abs() <= ADJACENCY_EDGE_TOLERANCE;
    if !touches {
        return false;
    }

    let overlap = first.right().min(second.right()) - first.x.max(second.x);
    overlap >= ADJACENCY_MIN_OVERLAP * first.width.min(second.width)
}

// ============================================================================
// Tests
// ============================================================================
