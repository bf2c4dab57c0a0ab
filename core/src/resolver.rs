//! Pure transforms between zone definitions and screen-space geometry.
//!
//! Everything here is stateless: zones come in, rectangles come out.
//! Degenerate inputs never panic; they collapse to the zero-size sentinel
//! rect, which callers treat as "nothing to render or snap".

use crate::geometry::Rect;
use crate::zone::{GeometryMode, Zone};

/// Resolves a zone's definition against `container`.
///
/// Relative zones scale with the container size; fixed zones keep their
/// pixel size and only follow the container origin.
#[must_use]
pub fn absolute_geometry(zone: &Zone, container: &Rect) -> Rect {
    match zone.geometry_mode {
        GeometryMode::Relative => Rect::new(
            container.width.mul_add(zone.relative_geometry.x, container.x),
            container.height.mul_add(zone.relative_geometry.y, container.y),
            container.width * zone.relative_geometry.width,
            container.height * zone.relative_geometry.height,
        ),
        GeometryMode::Fixed => Rect::new(
            container.x + zone.fixed_geometry.x,
            container.y + zone.fixed_geometry.y,
            zone.fixed_geometry.width,
            zone.fixed_geometry.height,
        ),
    }
}

/// Clips `geometry` to `usable_area`.
///
/// An empty intersection, or one thinner than `min_dimension` on either
/// axis, collapses to the zero-size rect at the usable area's origin.
#[must_use]
pub fn clip_to_available_area(geometry: &Rect, usable_area: &Rect, min_dimension: f64) -> Rect {
    match geometry.intersection(usable_area) {
        Some(clipped) if clipped.width >= min_dimension && clipped.height >= min_dimension => {
            clipped
        }
        _ => Rect::new(usable_area.x, usable_area.y, 0.0, 0.0),
    }
}

/// Shrinks every edge of `geometry` by half of `padding_px`, so two zones
/// sharing an edge end up exactly `padding_px` apart.
///
/// Geometry too small to absorb the padding collapses to zero size at its
/// padded origin.
#[must_use]
pub fn with_zone_padding(geometry: &Rect, padding_px: f64) -> Rect {
    if padding_px <= 0.0 {
        return *geometry;
    }

    let inset = padding_px / 2.0;
    Rect::new(
        geometry.x + inset,
        geometry.y + inset,
        (geometry.width - padding_px).max(0.0),
        (geometry.height - padding_px).max(0.0),
    )
}

/// Shrinks a container by `gap_px` on every side.
///
/// Applied to the usable area before zones are resolved against it, so the
/// arrangement keeps a uniform margin to the display edge while zone padding
/// stays between zones.
#[must_use]
pub fn apply_outer_gap(container: &Rect, gap_px: f64) -> Rect {
    if gap_px <= 0.0 {
        return *container;
    }

    Rect::new(
        container.x + gap_px,
        container.y + gap_px,
        (container.width - 2.0 * gap_px).max(0.0),
        (container.height - 2.0 * gap_px).max(0.0),
    )
}

// ============================================================================
// Tests
// ============================================================================
