use gridroute_core::Point;

/// Manhattan (L1) distance between two points, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}
