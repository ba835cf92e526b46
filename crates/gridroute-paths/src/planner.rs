use gridroute_core::{Direction, Point, Range};

use crate::config::PlannerConfig;
use crate::cost::{CostModel, UniformCost};
use crate::obstacles::ObstacleMap;
use crate::search::{Search, SearchOutcome};
use crate::PlanError;

/// Route planner over a `width` × `height` grid anchored at (0, 0).
///
/// The planner keeps no state between searches: every call to
/// [`plan`](Self::plan) starts from scratch. Mutating methods take
/// `&mut self`, so configuration can never overlap a running search.
#[derive(Debug, Clone)]
pub struct Planner<C = UniformCost> {
    bounds: Range,
    cost: C,
    obstacles: ObstacleMap,
    config: PlannerConfig,
}

impl<C: CostModel> Planner<C> {
    /// Create a planner with every cell passable.
    pub fn new(width: i32, height: i32, cost: C) -> Result<Self, PlanError> {
        Self::with_config(width, height, cost, PlannerConfig::default())
    }

    /// Create a planner with explicit search policies.
    pub fn with_config(
        width: i32,
        height: i32,
        cost: C,
        config: PlannerConfig,
    ) -> Result<Self, PlanError> {
        let bounds = grid_bounds(width, height)?;
        let obstacles = ObstacleMap::new(bounds)?;
        log::debug!("planner configured: {width}x{height}, {config:?}");
        Ok(Self {
            bounds,
            cost,
            obstacles,
            config,
        })
    }

    /// Resize the grid and replace the cost model. All obstacles are
    /// cleared. On error the planner is left unchanged.
    pub fn configure(&mut self, width: i32, height: i32, cost: C) -> Result<(), PlanError> {
        let bounds = grid_bounds(width, height)?;
        let obstacles = ObstacleMap::new(bounds)?;
        log::debug!("planner reconfigured: {width}x{height}");
        self.bounds = bounds;
        self.cost = cost;
        self.obstacles = obstacles;
        Ok(())
    }

    /// Search policies in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Replace the search policies used by later calls.
    pub fn set_config(&mut self, config: PlannerConfig) {
        self.config = config;
    }

    /// The grid rectangle, `[(0, 0)-(width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The cost model routes are planned with.
    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    pub fn obstacles(&self) -> &ObstacleMap {
        &self.obstacles
    }

    /// Whether `p` is marked impassable.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.is_blocked(p)
    }

    /// Mark each given cell as impassable.
    ///
    /// Fails with [`PlanError::ObstacleOutOfBounds`] on the first cell outside
    /// the grid, in which case no cell is marked.
    pub fn set_obstacles(
        &mut self,
        cells: impl IntoIterator<Item = Point>,
    ) -> Result<(), PlanError> {
        let cells: Vec<Point> = cells.into_iter().collect();
        self.obstacles.block_all(&cells)?;
        log::debug!(
            "{} obstacle cells requested, {} blocked in total",
            cells.len(),
            self.obstacles.blocked_count()
        );
        Ok(())
    }

    /// Make every cell passable again.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Find a route from `start` to `destination`.
    ///
    /// Returns the cells of the route in order, both endpoints included, or
    /// `Ok(None)` if the destination cannot be reached. Fails with
    /// [`PlanError::OutOfBounds`] if either endpoint lies outside the grid.
    pub fn plan(
        &self,
        start: Point,
        destination: Point,
    ) -> Result<Option<Vec<Point>>, PlanError> {
        self.search(start, destination).map(|outcome| outcome.path)
    }

    /// Like [`plan`](Self::plan), also reporting search counters.
    pub fn search(&self, start: Point, destination: Point) -> Result<SearchOutcome, PlanError> {
        for p in [start, destination] {
            if !self.bounds.contains(p) {
                return Err(PlanError::OutOfBounds {
                    point: p,
                    bounds: self.bounds,
                });
            }
        }

        // The neighbor goal test would otherwise answer with a round trip
        // through an adjacent cell.
        if start == destination {
            return Ok(SearchOutcome {
                path: Some(vec![start]),
                stats: Default::default(),
            });
        }

        let outcome =
            Search::new(&self.obstacles, &self.cost, &self.config, destination).run(start)?;
        match &outcome.path {
            Some(path) => log::debug!(
                "route {start} -> {destination}: {} cells, {:?}",
                path.len(),
                outcome.stats
            ),
            None => log::debug!("no route {start} -> {destination}, {:?}", outcome.stats),
        }
        Ok(outcome)
    }

    /// Total cost of walking `path` under this planner's cost model.
    ///
    /// Returns `None` if two consecutive cells are not 4-neighbours.
    pub fn route_cost(&self, path: &[Point]) -> Option<u32> {
        path.windows(2).try_fold(0u32, |acc, w| {
            let dir = Direction::between(w[0], w[1])?;
            Some(acc.saturating_add(self.cost.step_cost(w[0], Some(dir))))
        })
    }
}

/// Grid rectangle for the given size. Both sides must be positive and the
/// cell count must fit in a `usize`.
fn grid_bounds(width: i32, height: i32) -> Result<Range, PlanError> {
    if width <= 0 || height <= 0 {
        return Err(PlanError::InvalidGrid { width, height });
    }
    if (width as usize).checked_mul(height as usize).is_none() {
        return Err(PlanError::InvalidGrid { width, height });
    }
    Ok(Range::with_size(0, 0, width, height))
}
