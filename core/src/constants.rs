//! Constants for zone detection and auto-tiling behavior.
//!
//! These values are centralized here to make tuning easier and to
//! document the reasoning behind each value.

// ============================================================================
// Timing Constants
// ============================================================================

pub mod timing {
    /// Debounce interval for regeneration batching (ms).
    ///
    /// Close and minimize events re-arm a single timer with this interval;
    /// every display marked during the window is regenerated exactly once
    /// when it fires. Long enough to absorb close bursts (e.g. an app
    /// quitting with many windows), short enough to feel immediate.
    pub const REGENERATE_DEBOUNCE_MS: u64 = 50;
}

// ============================================================================
// Detection Constants
// ============================================================================

pub mod detection {
    /// Default distance for the multi-zone "nearby" test (pixels).
    ///
    /// Zones whose boundary lies within this distance of the cursor are
    /// candidates for a combined multi-zone snap.
    pub const DEFAULT_ADJACENT_THRESHOLD: f64 = 50.0;

    /// Default distance for edge-proximity queries (pixels).
    pub const DEFAULT_EDGE_THRESHOLD: f64 = 25.0;

    /// Hard cap on flood-fill expansion passes.
    ///
    /// Each pass scans every zone once; real layouts converge in two or
    /// three passes. Hitting the cap indicates a pathological layout and is
    /// logged, keeping the partial selection.
    pub const FLOOD_FILL_MAX_PASSES: usize = 100;

    /// Boundary tolerance for the zone adjacency test (pixels).
    ///
    /// Two zone edges closer than this count as a shared boundary.
    pub const ADJACENCY_EDGE_TOLERANCE: f64 = 5.0;

    /// Minimum overlap along the shared axis for adjacency, as a fraction
    /// of the shorter zone's dimension. Rules out corner-touching zones.
    pub const ADJACENCY_MIN_OVERLAP: f64 = 0.1;
}

// ============================================================================
// Layout Constants
// ============================================================================

pub mod layout {
    /// Lower bound for the master area ratio.
    pub const MASTER_RATIO_MIN: f64 = 0.1;

    /// Upper bound for the master area ratio.
    pub const MASTER_RATIO_MAX: f64 = 0.9;

    /// Tolerance below which a master ratio adjustment is a no-op.
    pub const RATIO_EPSILON: f64 = 1e-6;

    /// Minimum usable dimension for a clipped zone geometry (pixels).
    ///
    /// Clipping results thinner than this collapse to the zero-size
    /// sentinel rect, which callers treat as "do not render or snap".
    pub const MIN_ZONE_DIMENSION: f64 = 10.0;
}

// ============================================================================
// Tests
// ============================================================================
