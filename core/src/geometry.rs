//! Geometric primitives shared by zone layout and detection.
//!
//! All coordinates are `f64` pixels in display space: origin at the top left,
//! y growing downward. Conversion to integer device pixels happens only at
//! the output boundary via [`Rect::to_pixel`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by origin point and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: f64,
    /// Y coordinate of the origin (top-left corner).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// The zero-size rectangle at the coordinate origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The unit square, the coordinate space of relative zone geometry.
    pub const UNIT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from origin point and size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// Returns the origin point of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Point { Point { x: self.x, y: self.y } }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Returns whether the rectangle has no extent on either axis.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    /// Returns whether a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Returns whether two rectangles overlap with positive area.
    ///
    /// Rectangles that merely share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns the overlapping region of two rectangles, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > left && bottom > top {
            Some(Self::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Self::new(left, top, right - left, bottom - top)
    }

    /// Euclidean distance from a point to the rectangle.
    ///
    /// Zero when the point lies inside or on the boundary.
    #[must_use]
    pub fn distance_to_point(&self, point: Point) -> f64 {
        let dx = (self.x - point.x).max(point.x - self.right()).max(0.0);
        let dy = (self.y - point.y).max(point.y - self.bottom()).max(0.0);
        dx.hypot(dy)
    }

    /// Rounds to integer device pixels as `(x, y, width, height)`.
    ///
    /// Width and height are derived from the rounded edges so that two
    /// rectangles sharing an edge keep sharing it after rounding.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // display coordinates fit in i32
    pub fn to_pixel(&self) -> (i32, i32, i32, i32) {
        let left = self.x.round();
        let top = self.y.round();
        let width = (self.x + self.width).round() - left;
        let height = (self.y + self.height).round() - top;
        (left as i32, top as i32, width as i32, height as i32)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 60.0)));
        assert!(rect.contains(Point::new(50.0, 30.0)));
        assert!(!rect.contains(Point::new(9.9, 30.0)));
        assert!(!rect.contains(Point::new(50.0, 60.1)));
    }

    #[test]
    fn test_intersection_overlapping() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap, Rect::new(50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn test_intersection_edge_sharing_is_none() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(a.intersection(&b).is_none());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersection_disjoint_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 50.0, 100.0);
        let b = Rect::new(50.0, 0.0, 50.0, 100.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 100.0, 100.0));

        let c = Rect::new(-10.0, 20.0, 5.0, 5.0);
        let merged = a.union(&c);
        assert_eq!(merged.x, -10.0);
        assert_eq!(merged.right(), 50.0);
    }

    #[test]
    fn test_distance_to_point_inside_is_zero() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.distance_to_point(Point::new(50.0, 50.0)), 0.0);
        assert_eq!(rect.distance_to_point(Point::new(0.0, 0.0)), 0.0);
        assert_eq!(rect.distance_to_point(Point::new(100.0, 100.0)), 0.0);
    }

    #[test]
    fn test_distance_to_point_axis_and_diagonal() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Straight out from an edge
        assert_eq!(rect.distance_to_point(Point::new(130.0, 50.0)), 30.0);
        assert_eq!(rect.distance_to_point(Point::new(50.0, -40.0)), 40.0);
        // Diagonal from a corner: 3-4-5 triangle
        assert_eq!(rect.distance_to_point(Point::new(103.0, 104.0)), 5.0);
    }

    #[test]
    fn test_to_pixel_keeps_shared_edges() {
        let left = Rect::new(0.0, 0.0, 533.3333333333334, 900.0);
        let right = Rect::new(533.3333333333334, 0.0, 533.3333333333333, 900.0);
        let (_, _, lw, _) = left.to_pixel();
        let (rx, _, _, _) = right.to_pixel();
        assert_eq!(lw, rx);
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_empty());
        assert!(!Rect::UNIT.is_empty());
    }
}
