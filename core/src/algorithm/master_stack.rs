//! Master/stack tiling with a configurable master region.
//!
//! # How It Works
//!
//! The first `master_count` windows share the master region sized by
//! `master_ratio`; the rest stack in the remaining region. Orientation
//! follows the container aspect ratio:
//!
//! ```text
//!   landscape                portrait
//! +--------+------+       +-------------+
//! |        |  s1  |       |   master    |
//! | master +------+       +------+------+
//! |        |  s2  |       |  s1  |  s2  |
//! +--------+------+       +------+------+
//! ```
//!
//! With `window_count <= master_count` every window is a master and the
//! arrangement degrades to equal columns.

use super::columns::Columns;
use super::{GeneratedRects, TilingAlgorithm, TilingParams};
use crate::constants::layout::{MASTER_RATIO_MAX, MASTER_RATIO_MIN};
use crate::geometry::Rect;

/// Registry id for [`MasterStack`].
pub const ID: &str = "master-stack";

/// One sized master region, remaining windows stacked beside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MasterStack;

impl TilingAlgorithm for MasterStack {
    fn generate(&self, window_count: usize, params: &TilingParams) -> GeneratedRects {
        let mut rects = GeneratedRects::new();
        if window_count == 0 {
            return rects;
        }

        let ratio = params.master_ratio.clamp(MASTER_RATIO_MIN, MASTER_RATIO_MAX);
        let master_count = params.master_count.max(1);

        if window_count <= master_count {
            return Columns.generate(window_count, params);
        }

        let stack_count = window_count - master_count;
        if params.is_portrait() {
            // Master strip on top, stack below, cells side by side.
            stack_columns(&mut rects, &Rect::new(0.0, 0.0, 1.0, ratio), master_count);
            stack_columns(&mut rects, &Rect::new(0.0, ratio, 1.0, 1.0 - ratio), stack_count);
        } else {
            // Master column on the left, stack on the right, cells stacked.
            stack_rows(&mut rects, &Rect::new(0.0, 0.0, ratio, 1.0), master_count);
            stack_rows(&mut rects, &Rect::new(ratio, 0.0, 1.0 - ratio, 1.0), stack_count);
        }

        rects
    }
}

/// Fills `region` with `count` full-width cells stacked top to bottom.
#[allow(clippy::cast_precision_loss)] // window counts are tiny
fn stack_rows(rects: &mut GeneratedRects, region: &Rect, count: usize) {
    let height = region.height / count as f64;
    for index in 0..count {
        let y = (index as f64).mul_add(height, region.y);
        let cell_height = if index == count - 1 { region.bottom() - y } else { height };
        rects.push(Rect::new(region.x, y, region.width, cell_height));
    }
}

/// Fills `region` with `count` full-height cells placed left to right.
#[allow(clippy::cast_precision_loss)] // window counts are tiny
fn stack_columns(rects: &mut GeneratedRects, region: &Rect, count: usize) {
    let width = region.width / count as f64;
    for index in 0..count {
        let x = (index as f64).mul_add(width, region.x);
        let cell_width = if index == count - 1 { region.right() - x } else { width };
        rects.push(Rect::new(x, region.y, cell_width, region.height));
    }
}
