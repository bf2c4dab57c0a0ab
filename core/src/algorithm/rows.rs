//! Equal-height row tiling.
//!
//! # How It Works
//!
//! The transposed counterpart of [`columns`](super::columns): every window
//! receives a full-width horizontal band of height `1/n`, master on top.
//!
//! ```text
//! +---------------------+
//! |          0          |
//! +---------------------+
//! |          1          |
//! +---------------------+
//! |          2          |
//! +---------------------+
//! ```
//!
//! As with columns, the last band stretches to the bottom edge so rounding
//! never leaves a gap.

use super::{GeneratedRects, TilingAlgorithm, TilingParams};
use crate::geometry::Rect;

/// Registry id for [`Rows`].
pub const ID: &str = "rows";

/// Horizontal bands of equal height, master topmost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rows;

impl TilingAlgorithm for Rows {
    #[allow(clippy::cast_precision_loss)] // window counts are tiny
    fn generate(&self, window_count: usize, _params: &TilingParams) -> GeneratedRects {
        let mut rects = GeneratedRects::new();
        if window_count == 0 {
            return rects;
        }

        let height = 1.0 / window_count as f64;
        for index in 0..window_count {
            let y = index as f64 * height;
            let band_height = if index == window_count - 1 { 1.0 - y } else { height };
            rects.push(Rect::new(0.0, y, 1.0, band_height));
        }

        rects
    }
}
