//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A [`Point`] names one grid cell; a [`Range`] is the half-open rectangle a
//! planner is allowed to explore. Both are plain `Copy` values.

use std::fmt;
use std::ops::Add;

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid cell. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Direction> for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Direction) -> Self {
        self + rhs.offset()
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// Create a range from an origin and a size.
    ///
    /// Negative sizes are clamped to zero, giving an empty range.
    #[inline]
    pub fn with_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + width.max(0), y + height.max(0)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range, saturating at `usize::MAX`.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize).saturating_mul(self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range:
    /// `min.x <= p.x < max.x && min.y <= p.y < max.y`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major offset of `p` relative to `min`, or `None` outside the range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
    }

    #[test]
    fn point_direction_arithmetic() {
        let p = Point::new(5, 5);
        assert_eq!(p + Direction::East, Point::new(6, 5));
        assert_eq!(p + Direction::North, Point::new(5, 4));
        assert_eq!(p + Direction::South, Point::new(5, 6));
        assert_eq!(p + Direction::West, Point::new(4, 5));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(3, -2).to_string(), "(3, -2)");
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn range_with_size_is_half_open() {
        let r = Range::with_size(2, 3, 4, 5);
        assert_eq!(r.min, Point::new(2, 3));
        assert_eq!(r.max, Point::new(6, 8));
        assert!(r.contains(Point::new(2, 3)));
        assert!(r.contains(Point::new(5, 7)));
        assert!(!r.contains(Point::new(6, 7)));
        assert!(!r.contains(Point::new(5, 8)));
        assert!(!r.contains(Point::new(1, 3)));
    }

    #[test]
    fn range_with_negative_size_is_empty() {
        let r = Range::with_size(0, 0, -3, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(!r.contains(Point::new(0, 0)));
    }

    #[test]
    fn huge_range_len_does_not_overflow() {
        let r = Range::with_size(0, 0, i32::MAX, i32::MAX);
        assert_eq!(
            r.len(),
            (i32::MAX as usize).saturating_mul(i32::MAX as usize)
        );
    }

    #[test]
    fn range_index_of() {
        let r = Range::with_size(1, 1, 3, 2);
        assert_eq!(r.index_of(Point::new(1, 1)), Some(0));
        assert_eq!(r.index_of(Point::new(3, 1)), Some(2));
        assert_eq!(r.index_of(Point::new(1, 2)), Some(3));
        assert_eq!(r.index_of(Point::new(3, 2)), Some(5));
        assert_eq!(r.index_of(Point::new(4, 2)), None);
        assert_eq!(r.index_of(Point::new(0, 0)), None);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::with_size(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_ranges_compare_equal() {
        let a = Range::default();
        let b = Range {
            min: Point::new(5, 5),
            max: Point::new(5, 5),
        };
        assert_eq!(a, b);
        assert_eq!(b.iter().count(), 0);
        assert_ne!(a, Range::with_size(0, 0, 1, 1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_round_trip() {
        let r = Range::with_size(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
