//! Compass moves on a 4-connected grid.

use crate::geom::Point;

/// One of the four cardinal moves.
///
/// A missing move (the synthetic start of a search) is written as
/// `Option::<Direction>::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Expansion order. Neighbors of equal merit are discovered in this
    /// order, which fixes the route returned among equal-cost alternatives.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Unit offset of the move (Y grows down).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// The direction taking `from` to the adjacent cell `to`, if they are
    /// 4-neighbours. Points too far apart for their difference to fit in
    /// an `i32` are simply not neighbours.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = Point::new(to.x.checked_sub(from.x)?, to.y.checked_sub(from.y)?);
        Direction::ALL.into_iter().find(|dir| dir.offset() == d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        for d in Direction::ALL {
            let o = d.offset();
            assert_eq!(o.x.abs() + o.y.abs(), 1);
            assert_eq!(Direction::between(Point::ZERO, o), Some(d));
        }
    }

    #[test]
    fn between_adjacent_cells() {
        let p = Point::new(4, 4);
        assert_eq!(Direction::between(p, Point::new(5, 4)), Some(Direction::East));
        assert_eq!(Direction::between(p, Point::new(4, 3)), Some(Direction::North));
        assert_eq!(Direction::between(p, Point::new(5, 5)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn between_far_apart_extremes() {
        let lo = Point::new(i32::MIN, 0);
        let hi = Point::new(i32::MAX, 0);
        assert_eq!(Direction::between(lo, hi), None);
        assert_eq!(Direction::between(hi, lo), None);
        assert_eq!(
            Direction::between(Point::new(0, i32::MAX), Point::new(0, i32::MIN)),
            None
        );
        assert_eq!(
            Direction::between(Point::new(i32::MAX - 1, 0), hi),
            Some(Direction::East)
        );
    }

    #[test]
    fn expansion_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::North
            ]
        );
    }
}
