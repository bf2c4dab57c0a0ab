//! Spiral tiling via alternating binary splits.
//!
//! # How It Works
//!
//! Each new window takes half of the space left by the previous one, with
//! the split axis alternating every step, so windows wind inward:
//!
//! ```text
//! +--------+--------+
//! |        |   1    |
//! |   0    +----+---+
//! |        | 2  | 3 |
//! +--------+----+---+
//! ```
//!
//! The first split direction follows the container orientation: landscape
//! (and unknown) containers split left/right first, portrait containers
//! split top/bottom first.

use super::{GeneratedRects, TilingAlgorithm, TilingParams};
use crate::geometry::Rect;

/// Registry id for [`Spiral`].
pub const ID: &str = "spiral";

/// Binary-split spiral, master in the largest cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spiral;

impl TilingAlgorithm for Spiral {
    fn generate(&self, window_count: usize, params: &TilingParams) -> GeneratedRects {
        let mut rects = GeneratedRects::new();
        if window_count == 0 {
            return rects;
        }

        let mut cell = Rect::UNIT;
        let mut split_on_x = !params.is_portrait();

        for index in 0..window_count {
            if index == window_count - 1 {
                rects.push(cell);
                break;
            }

            if split_on_x {
                let half = cell.width / 2.0;
                rects.push(Rect::new(cell.x, cell.y, half, cell.height));
                cell = Rect::new(cell.x + half, cell.y, cell.width - half, cell.height);
            } else {
                let half = cell.height / 2.0;
                rects.push(Rect::new(cell.x, cell.y, cell.width, half));
                cell = Rect::new(cell.x, cell.y + half, cell.width, cell.height - half);
            }

            split_on_x = !split_on_x;
        }

        rects
    }
}
