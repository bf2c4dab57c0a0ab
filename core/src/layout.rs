//! Layout entity: a named zone collection plus dynamic-tiling parameters.
//!
//! Manual layouts carry a fixed, author-defined zone set. Dynamic layouts
//! regenerate their zones from a tiling algorithm whenever the window count
//! changes; their previous zones are discarded wholesale, so zone handles
//! must never be held across a regeneration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{AlgorithmRegistry, TilingParams};
use crate::constants::layout::{MASTER_RATIO_MAX, MASTER_RATIO_MIN};
use crate::error::ZonerError;
use crate::geometry::Rect;
use crate::resolver;
use crate::zone::Zone;

// ============================================================================
// Category
// ============================================================================

/// How a layout's zone set is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutCategory {
    /// Zones are authored by hand and never regenerated.
    Manual,
    /// Zones are regenerated from a tiling algorithm as windows come and go.
    Dynamic,
}

// ============================================================================
// Layout
// ============================================================================

/// A named collection of zones, optionally driven by a tiling algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    id: Uuid,

    /// Human-readable name shown in pickers and logs.
    pub name: String,

    /// Whether the zone set is authored or generated.
    pub category: LayoutCategory,

    #[serde(default)]
    zones: Vec<Zone>,

    /// Master region share for dynamic layouts, kept in [0.1, 0.9].
    #[serde(default = "default_master_ratio")]
    master_ratio: f64,

    /// Id of the tiling algorithm driving regeneration. Ignored for manual
    /// layouts.
    #[serde(default)]
    pub algorithm_id: String,

    /// Number of windows sharing the master region, at least 1.
    #[serde(default = "default_master_count")]
    master_count: usize,
}

const fn default_master_ratio() -> f64 { 0.5 }

const fn default_master_count() -> usize { 1 }

impl Layout {
    /// Creates a manual layout with an authored zone set.
    #[must_use]
    pub fn manual(name: impl Into<String>, zones: Vec<Zone>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            category: LayoutCategory::Manual,
            zones,
            master_ratio: default_master_ratio(),
            algorithm_id: String::new(),
            master_count: default_master_count(),
        }
    }

    /// Creates an empty dynamic layout driven by `algorithm_id`.
    #[must_use]
    pub fn dynamic(name: impl Into<String>, algorithm_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            category: LayoutCategory::Dynamic,
            zones: Vec::new(),
            master_ratio: default_master_ratio(),
            algorithm_id: algorithm_id.into(),
            master_count: default_master_count(),
        }
    }

    /// Stable identity of the layout.
    #[must_use]
    pub const fn id(&self) -> Uuid { self.id }

    /// Returns whether this layout regenerates its zones.
    #[must_use]
    pub fn is_dynamic(&self) -> bool { self.category == LayoutCategory::Dynamic }

    /// The current zone set, in storage order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] { &self.zones }

    /// Number of zones currently in the layout.
    #[must_use]
    pub fn zone_count(&self) -> usize { self.zones.len() }

    /// Looks up a zone by id.
    #[must_use]
    pub fn zone_by_id(&self, id: Uuid) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id() == id)
    }

    /// Zones sorted ascending by `zone_number`. Storage order is preserved
    /// between equal numbers.
    #[must_use]
    pub fn zones_by_number(&self) -> Vec<&Zone> {
        let mut zones: Vec<&Zone> = self.zones.iter().collect();
        zones.sort_by_key(|zone| zone.zone_number);
        zones
    }

    /// Master region share in [0.1, 0.9].
    #[must_use]
    pub const fn master_ratio(&self) -> f64 { self.master_ratio }

    /// Sets the master region share, clamping into [0.1, 0.9].
    pub fn set_master_ratio(&mut self, ratio: f64) {
        self.master_ratio = ratio.clamp(MASTER_RATIO_MIN, MASTER_RATIO_MAX);
    }

    /// Number of windows sharing the master region.
    #[must_use]
    pub const fn master_count(&self) -> usize { self.master_count }

    /// Sets the master window count, keeping it at least 1.
    pub fn set_master_count(&mut self, count: usize) { self.master_count = count.max(1); }

    /// Regenerates the zone set for `window_count` windows.
    ///
    /// Manual layouts do not regenerate and return `Ok(false)` with their
    /// zones untouched. For dynamic layouts the previous zone set is
    /// replaced wholesale: every generated rectangle becomes a fresh
    /// relative-mode zone numbered by its index. A zero window count yields
    /// an empty zone set.
    ///
    /// # Errors
    ///
    /// [`ZonerError::UnknownAlgorithm`] when `algorithm_id` is not in
    /// `registry`; the existing zones are left untouched.
    pub fn regenerate_zones(
        &mut self,
        window_count: usize,
        registry: &AlgorithmRegistry,
        aspect_ratio: f64,
    ) -> Result<bool, ZonerError> {
        if !self.is_dynamic() {
            return Ok(false);
        }

        let algorithm = registry
            .lookup(&self.algorithm_id)
            .ok_or_else(|| ZonerError::UnknownAlgorithm(self.algorithm_id.clone()))?;

        let params = TilingParams {
            master_ratio: self.master_ratio,
            master_count: self.master_count,
            aspect_ratio,
        };

        #[allow(clippy::cast_possible_truncation)] // zone counts are tiny
        {
            self.zones = algorithm
                .generate(window_count, &params)
                .into_iter()
                .enumerate()
                .map(|(index, rect)| Zone::relative(index as u32, rect))
                .collect();
        }

        Ok(true)
    }

    /// Refreshes every zone's cached absolute geometry against `container`.
    ///
    /// Must run after regeneration or a container resize before absolute
    /// geometry is read.
    pub fn recalculate_zone_geometries(&mut self, container: &Rect) {
        for zone in &mut self.zones {
            let absolute = resolver::absolute_geometry(zone, container);
            zone.absolute_geometry = absolute;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
