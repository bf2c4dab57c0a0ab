//! Equal-width column tiling.
//!
//! # How It Works
//!
//! Every window receives a full-height vertical slice of width `1/n`:
//!
//! ```text
//! +------+------+------+------+
//! |      |      |      |      |
//! |  0   |  1   |  2   |  3   |
//! |      |      |      |      |
//! +------+------+------+------+
//! ```
//!
//! The last slice is widened to the right edge of the unit square so that
//! accumulated floating-point rounding never leaves a sliver uncovered.

use super::{GeneratedRects, TilingAlgorithm, TilingParams};
use crate::geometry::Rect;

/// Registry id for [`Columns`].
pub const ID: &str = "columns";

/// Vertical slices of equal width, master leftmost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Columns;

impl TilingAlgorithm for Columns {
    #[allow(clippy::cast_precision_loss)] // window counts are tiny
    fn generate(&self, window_count: usize, _params: &TilingParams) -> GeneratedRects {
        let mut rects = GeneratedRects::new();
        if window_count == 0 {
            return rects;
        }

        let width = 1.0 / window_count as f64;
        for index in 0..window_count {
            let x = index as f64 * width;
            let slice_width = if index == window_count - 1 { 1.0 - x } else { width };
            rects.push(Rect::new(x, 0.0, slice_width, 1.0));
        }

        rects
    }
}
