//! Tiling algorithms: pure generators of relative zone rectangles.
//!
//! An algorithm turns a window count into rectangles in unit-square
//! coordinates; it never sees windows, displays, or pixels. Generators are
//! deterministic and index-stable: the i-th rectangle always hosts the i-th
//! window of a master-first ordering, so regeneration with unchanged inputs
//! reproduces the exact same arrangement.
//!
//! Algorithms are registered in an [`AlgorithmRegistry`] owned by whoever
//! drives regeneration. There is deliberately no global registry.

pub mod columns;
pub mod master_stack;
pub mod rows;
pub mod spiral;

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use crate::error::ZonerError;
use crate::geometry::Rect;

// ============================================================================
// Type Aliases
// ============================================================================

/// Inline capacity for generated rectangle lists.
///
/// Displays rarely tile more than 16 windows at once.
pub const GENERATED_INLINE_CAP: usize = 16;

/// Relative rectangles produced by one generation pass.
pub type GeneratedRects = SmallVec<[Rect; GENERATED_INLINE_CAP]>;

// ============================================================================
// Parameters
// ============================================================================

/// Inputs to a generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingParams {
    /// Fraction of the container granted to the master region, in
    /// [0.1, 0.9]. Generators clamp defensively.
    pub master_ratio: f64,

    /// Number of windows sharing the master region (at least 1).
    pub master_count: usize,

    /// Container width divided by height; `0.0` when unknown. Values below
    /// 1.0 are portrait and flip orientation-aware generators.
    pub aspect_ratio: f64,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            master_ratio: 0.5,
            master_count: 1,
            aspect_ratio: 0.0,
        }
    }
}

impl TilingParams {
    /// Whether the container is taller than it is wide. Unknown aspect
    /// ratios count as landscape.
    #[must_use]
    pub fn is_portrait(&self) -> bool { self.aspect_ratio > 0.0 && self.aspect_ratio < 1.0 }
}

// ============================================================================
// Algorithm Contract
// ============================================================================

/// A deterministic generator of relative zone rectangles.
pub trait TilingAlgorithm {
    /// Generates `window_count` rectangles tiling the unit square exactly:
    /// no gaps, no overlaps, shared edges allowed. Zero windows yield an
    /// empty list.
    fn generate(&self, window_count: usize, params: &TilingParams) -> GeneratedRects;

    /// Index of the master slot in the generated list.
    fn master_index(&self, _window_count: usize) -> usize { 0 }
}

// ============================================================================
// Registry
// ============================================================================

/// Owned collection of tiling algorithms keyed by id.
///
/// Hosts create one (usually via [`AlgorithmRegistry::with_builtins`]) and
/// hand it to the auto-tile service; layouts refer to algorithms by id only.
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, Box<dyn TilingAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the built-in generators.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Fresh registry, fixed distinct ids: none of these can fail.
        let _ = registry.register(columns::ID, Box::new(columns::Columns));
        let _ = registry.register(rows::ID, Box::new(rows::Rows));
        let _ = registry.register(master_stack::ID, Box::new(master_stack::MasterStack));
        let _ = registry.register(spiral::ID, Box::new(spiral::Spiral));
        registry
    }

    /// Registers `algorithm` under `id`.
    ///
    /// Duplicate ids are rejected; the original registration stays in place
    /// and the rejection is logged.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        algorithm: Box<dyn TilingAlgorithm>,
    ) -> Result<(), ZonerError> {
        let id = id.into();

        if self.algorithms.contains_key(&id) {
            tracing::warn!("duplicate tiling algorithm registration rejected: {id}");
            return Err(ZonerError::DuplicateAlgorithm(id));
        }

        self.algorithms.insert(id, algorithm);
        Ok(())
    }

    /// Looks up an algorithm by id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&dyn TilingAlgorithm> {
        self.algorithms.get(id).map(|algorithm| algorithm.as_ref())
    }

    /// Returns whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool { self.algorithms.contains_key(id) }

    /// Registered ids, sorted for stable display.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self { Self::with_builtins() }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

// ============================================================================
// Test Support
// ============================================================================

/// Asserts that `rects` tile the unit square exactly: total area 1, all
/// rects inside the square, no positive-area overlap between any pair.
#[cfg(test)]
pub(crate) fn assert_unit_cover(rects: &[Rect]) {
    const EPS: f64 = 1e-9;

    let total: f64 = rects.iter().map(Rect::area).sum();
    assert!((total - 1.0).abs() < EPS, "total area {total} is not 1");

    for (index, rect) in rects.iter().enumerate() {
        assert!(
            rect.x >= -EPS && rect.y >= -EPS && rect.right() <= 1.0 + EPS && rect.bottom() <= 1.0 + EPS,
            "rect {index} escapes the unit square: {rect:?}"
        );
        for other in &rects[index + 1..] {
            assert!(!rect.intersects(other), "rects overlap: {rect:?} vs {other:?}");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FullScreen;

    impl TilingAlgorithm for FullScreen {
        fn generate(&self, window_count: usize, _params: &TilingParams) -> GeneratedRects {
            let mut rects = GeneratedRects::new();
            for _ in 0..window_count {
                rects.push(Rect::UNIT);
            }
            rects
        }
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = AlgorithmRegistry::with_builtins();
        assert!(registry.contains(columns::ID));
        assert!(registry.contains(rows::ID));
        assert!(registry.contains(master_stack::ID));
        assert!(registry.contains(spiral::ID));
        assert_eq!(registry.ids().len(), 4);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("full", Box::new(FullScreen)).unwrap();

        let err = registry.register("full", Box::new(FullScreen)).unwrap_err();
        assert!(matches!(err, ZonerError::DuplicateAlgorithm(id) if id == "full"));

        // The original registration must survive the rejected one.
        assert!(registry.lookup("full").is_some());
        assert_eq!(registry.ids(), vec!["full"]);
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let registry = AlgorithmRegistry::with_builtins();
        assert!(registry.lookup("does-not-exist").is_none());
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = AlgorithmRegistry::with_builtins();
        let ids = registry.ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_default_master_index_is_zero() {
        assert_eq!(FullScreen.master_index(5), 0);
    }

    #[test]
    fn test_portrait_flag() {
        let mut params = TilingParams::default();
        assert!(!params.is_portrait());
        params.aspect_ratio = 0.6;
        assert!(params.is_portrait());
        params.aspect_ratio = 1.6;
        assert!(!params.is_portrait());
    }
}
