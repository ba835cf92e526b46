use gridroute_core::{Point, Range};

use crate::PlanError;

/// Dense bitmap of impassable cells over a [`Range`].
///
/// Written during setup, read-only while a search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleMap {
    bounds: Range,
    cells: Vec<bool>,
}

impl ObstacleMap {
    /// A map over `bounds` with every cell passable.
    ///
    /// Fails with [`PlanError::InvalidGrid`] if `bounds` is empty or its
    /// bitmap cannot be allocated.
    pub fn new(bounds: Range) -> Result<Self, PlanError> {
        let invalid = PlanError::InvalidGrid {
            width: bounds.width(),
            height: bounds.height(),
        };
        if bounds.is_empty() {
            return Err(invalid);
        }
        let len = (bounds.width() as usize)
            .checked_mul(bounds.height() as usize)
            .ok_or_else(|| invalid.clone())?;
        let mut cells = Vec::new();
        if cells.try_reserve_exact(len).is_err() {
            log::warn!("cannot allocate an obstacle map of {len} cells for {bounds}");
            return Err(invalid);
        }
        cells.resize(len, false);
        Ok(Self { bounds, cells })
    }

    /// The rectangle covered by the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is impassable. Cells outside the map are reported as
    /// passable; bounds are checked separately by the planner.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.bounds.index_of(p).is_some_and(|i| self.cells[i])
    }

    /// Mark or unmark a single cell.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), PlanError> {
        let i = self
            .bounds
            .index_of(p)
            .ok_or(PlanError::ObstacleOutOfBounds {
                point: p,
                bounds: self.bounds,
            })?;
        self.cells[i] = blocked;
        Ok(())
    }

    /// Mark every given cell as impassable.
    ///
    /// All cells are validated first: on error the map is left unchanged.
    pub fn block_all(&mut self, cells: &[Point]) -> Result<(), PlanError> {
        if let Some(&p) = cells.iter().find(|&&p| !self.bounds.contains(p)) {
            return Err(PlanError::ObstacleOutOfBounds {
                point: p,
                bounds: self.bounds,
            });
        }
        for &p in cells {
            self.set_blocked(p, true)?;
        }
        Ok(())
    }

    /// Make every cell passable again.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of impassable cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_passable() {
        let m = ObstacleMap::new(Range::with_size(0, 0, 4, 3)).unwrap();
        assert_eq!(m.blocked_count(), 0);
        assert!(m.bounds().iter().all(|p| !m.is_blocked(p)));
    }

    #[test]
    fn empty_or_huge_bounds_are_rejected() {
        assert_eq!(
            ObstacleMap::new(Range::with_size(0, 0, 0, 5)),
            Err(PlanError::InvalidGrid {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            ObstacleMap::new(Range::with_size(0, 0, i32::MAX, i32::MAX)),
            Err(PlanError::InvalidGrid {
                width: i32::MAX,
                height: i32::MAX
            })
        );
    }

    #[test]
    fn block_and_query() {
        let mut m = ObstacleMap::new(Range::with_size(0, 0, 4, 3)).unwrap();
        m.block_all(&[Point::new(1, 0), Point::new(3, 2), Point::new(1, 0)])
            .unwrap();
        assert!(m.is_blocked(Point::new(1, 0)));
        assert!(m.is_blocked(Point::new(3, 2)));
        assert!(!m.is_blocked(Point::new(2, 2)));
        assert_eq!(m.blocked_count(), 2);
    }

    #[test]
    fn out_of_bounds_query_is_passable() {
        let m = ObstacleMap::new(Range::with_size(0, 0, 2, 2)).unwrap();
        assert!(!m.is_blocked(Point::new(2, 0)));
        assert!(!m.is_blocked(Point::new(-1, -1)));
    }

    #[test]
    fn out_of_bounds_registration_is_atomic() {
        let mut m = ObstacleMap::new(Range::with_size(0, 0, 2, 2)).unwrap();
        let err = m
            .block_all(&[Point::new(0, 0), Point::new(2, 1)])
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::ObstacleOutOfBounds {
                point: Point::new(2, 1),
                bounds: m.bounds(),
            }
        );
        assert_eq!(m.blocked_count(), 0);
    }

    #[test]
    fn unblock_and_clear() {
        let mut m = ObstacleMap::new(Range::with_size(0, 0, 3, 3)).unwrap();
        m.set_blocked(Point::new(1, 1), true).unwrap();
        m.set_blocked(Point::new(2, 2), true).unwrap();
        m.set_blocked(Point::new(1, 1), false).unwrap();
        assert_eq!(m.blocked_count(), 1);
        m.clear();
        assert_eq!(m.blocked_count(), 0);
    }
}
