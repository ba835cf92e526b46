use std::fmt;

use gridroute_core::{Point, Range};

/// Errors returned by [`Planner`](crate::Planner) operations.
///
/// "No route" is not an error: [`Planner::plan`](crate::Planner::plan)
/// reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Grid dimensions must both be positive and small enough for the
    /// obstacle map to be allocated.
    InvalidGrid { width: i32, height: i32 },
    /// A start or destination cell lies outside the grid.
    OutOfBounds { point: Point, bounds: Range },
    /// An obstacle cell lies outside the grid.
    ObstacleOutOfBounds { point: Point, bounds: Range },
    /// The search expanded more nodes than the configured cap allows.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { width, height } => {
                write!(
                    f,
                    "invalid grid size {width}x{height}: sides must be positive \
                     and the grid must fit in memory"
                )
            }
            Self::OutOfBounds { point, bounds } => {
                write!(f, "start or destination {point} not in the current map {bounds}")
            }
            Self::ObstacleOutOfBounds { point, bounds } => {
                write!(f, "obstacle {point} not in the current map {bounds}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} nodes")
            }
        }
    }
}

impl std::error::Error for PlanError {}
