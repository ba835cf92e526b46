//! Random-scenario launcher shared by the terminal demo.
//!
//! Scatters obstacles over a small grid once, then on every tick asks the
//! planner for a route between two random free cells and classifies each
//! cell as a [`Tile`] for drawing.

use std::time::{Duration, Instant};

use gridroute_core::Point;
use gridroute_paths::{PlanError, Planner, PlannerConfig, UniformCost};
use rand::{Rng, RngExt};

/// Launcher settings.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Number of random obstacle draws. Draws may repeat a cell.
    pub obstacle_count: usize,
    pub seed: u64,
    /// Number of routes to plan before exiting.
    pub rounds: usize,
    /// Delay between two routes.
    pub tick: Duration,
    pub planner: PlannerConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            obstacle_count: 12,
            seed: 1111111,
            rounds: 20,
            tick: Duration::from_millis(500),
            planner: PlannerConfig::default(),
        }
    }
}

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Free,
    Blocked,
    Path,
}

/// One planned route.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub start: Point,
    pub destination: Point,
    pub path: Option<Vec<Point>>,
    pub elapsed: Duration,
}

pub struct Launcher<R: Rng> {
    planner: Planner,
    rng: R,
    last: Option<Round>,
}

impl<R: Rng> Launcher<R> {
    /// Build the planner and scatter `config.obstacle_count` obstacles.
    pub fn new(config: &DemoConfig, mut rng: R) -> Result<Self, PlanError> {
        let mut planner =
            Planner::with_config(config.width, config.height, UniformCost, config.planner)?;
        let obstacles: Vec<Point> = (0..config.obstacle_count)
            .map(|_| {
                Point::new(
                    rng.random_range(0..config.width),
                    rng.random_range(0..config.height),
                )
            })
            .collect();
        planner.set_obstacles(obstacles)?;
        log::info!(
            "{}x{} grid, {} cells blocked",
            config.width,
            config.height,
            planner.obstacles().blocked_count()
        );
        Ok(Self {
            planner,
            rng,
            last: None,
        })
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// The most recent round, if any.
    pub fn last(&self) -> Option<&Round> {
        self.last.as_ref()
    }

    /// A random passable cell, or `None` if every cell is blocked.
    pub fn random_free_point(&mut self) -> Option<Point> {
        let free: Vec<Point> = self
            .planner
            .bounds()
            .iter()
            .filter(|&p| !self.planner.is_blocked(p))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    /// Plan a route between two random free cells.
    ///
    /// Returns `Ok(None)` only when the grid has no free cell at all.
    pub fn tick(&mut self) -> Result<Option<&Round>, PlanError> {
        let (Some(start), Some(destination)) = (self.random_free_point(), self.random_free_point())
        else {
            log::warn!("no free cell left to plan from");
            return Ok(None);
        };

        let t = Instant::now();
        let path = self.planner.plan(start, destination)?;
        let elapsed = t.elapsed();
        log::info!(
            "{start} -> {destination}: {} in {elapsed:?}",
            match &path {
                Some(p) => format!("{} cells", p.len()),
                None => "no route".to_string(),
            }
        );

        self.last = Some(Round {
            start,
            destination,
            path,
            elapsed,
        });
        Ok(self.last.as_ref())
    }

    /// Tile for `p`, given the most recent route.
    pub fn tile_at(&self, p: Point) -> Tile {
        if self.planner.is_blocked(p) {
            return Tile::Blocked;
        }
        let on_path = self
            .last
            .as_ref()
            .and_then(|r| r.path.as_ref())
            .is_some_and(|path| path.contains(&p));
        if on_path { Tile::Path } else { Tile::Free }
    }

    /// Tiles of the whole grid, one row per line.
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        let bounds = self.planner.bounds();
        (bounds.min.y..bounds.max.y)
            .map(|y| {
                (bounds.min.x..bounds.max.x)
                    .map(|x| self.tile_at(Point::new(x, y)))
                    .collect()
            })
            .collect()
    }
}
