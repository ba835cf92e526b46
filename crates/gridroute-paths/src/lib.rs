//! A* route planning on rectangular obstacle grids.
//!
//! A [`Planner`] owns the grid size, an injected [`CostModel`] and an
//! [`ObstacleMap`]. Each call to [`Planner::plan`] runs a fresh search and
//! returns the ordered cells from start to destination, `None` when no route
//! exists, or a [`PlanError`] for invalid input.
//!
//! ```
//! use gridroute_core::Point;
//! use gridroute_paths::{Planner, UniformCost};
//!
//! let mut planner = Planner::new(3, 3, UniformCost).unwrap();
//! planner.set_obstacles([Point::new(1, 1)]).unwrap();
//! let path = planner.plan(Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.map(|p| p.len()), Some(5));
//! ```
//!
//! Movement is 4-directional; the heuristic is the Manhattan distance
//! ([`manhattan`]). Behavior toggles live in [`PlannerConfig`].

mod config;
mod cost;
mod distance;
mod error;
mod obstacles;
mod planner;
mod search;

pub use config::{ClosedRelaxation, GoalTest, PlannerConfig};
pub use cost::{CostModel, UniformCost};
pub use distance::manhattan;
pub use error::PlanError;
pub use obstacles::ObstacleMap;
pub use planner::Planner;
pub use search::{SearchOutcome, SearchStats};
