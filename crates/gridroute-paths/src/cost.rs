use gridroute_core::{Direction, Point};

/// Incremental cost of one move.
///
/// The planner treats the returned values as opaque non-negative weights
/// summed along the route. `dir` is `None` only for the synthetic start of a
/// search.
pub trait CostModel {
    /// Cost of leaving `from` towards `dir`.
    fn step_cost(&self, from: Point, dir: Option<Direction>) -> u32;
}

/// Uniform grid: every real move costs 1, staying put costs 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformCost;

impl CostModel for UniformCost {
    #[inline]
    fn step_cost(&self, _from: Point, dir: Option<Direction>) -> u32 {
        match dir {
            Some(_) => 1,
            None => 0,
        }
    }
}

impl<F> CostModel for F
where
    F: Fn(Point, Option<Direction>) -> u32,
{
    #[inline]
    fn step_cost(&self, from: Point, dir: Option<Direction>) -> u32 {
        self(from, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_cost() {
        let p = Point::new(3, 3);
        assert_eq!(UniformCost.step_cost(p, None), 0);
        for d in Direction::ALL {
            assert_eq!(UniformCost.step_cost(p, Some(d)), 1);
        }
    }

    #[test]
    fn closures_are_cost_models() {
        let uphill = |_: Point, dir: Option<Direction>| -> u32 {
            match dir {
                Some(Direction::North) => 3,
                Some(_) => 1,
                None => 0,
            }
        };
        assert_eq!(uphill.step_cost(Point::ZERO, Some(Direction::North)), 3);
        assert_eq!(uphill.step_cost(Point::ZERO, Some(Direction::South)), 1);
    }
}
