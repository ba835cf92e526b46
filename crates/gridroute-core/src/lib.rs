//! **gridroute-core** — grid geometry shared by the planner and its callers.
//!
//! Provides integer cells ([`Point`]), half-open rectangles ([`Range`]) and
//! the four compass moves ([`Direction`]) of a 4-connected grid.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range};
