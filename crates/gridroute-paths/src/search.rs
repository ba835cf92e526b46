use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use gridroute_core::{Direction, Point, Range};

use crate::config::{ClosedRelaxation, GoalTest, PlannerConfig};
use crate::cost::CostModel;
use crate::distance::manhattan;
use crate::obstacles::ObstacleMap;
use crate::PlanError;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Nodes created, the start node included.
    pub discovered: usize,
    /// Existing nodes given a cheaper predecessor.
    pub relaxed: usize,
}

/// Result of [`Planner::search`](crate::Planner::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to destination, or `None` if no route exists.
    pub path: Option<Vec<Point>>,
    pub stats: SearchStats,
}

// ---------------------------------------------------------------------------
// Internal node arena
// ---------------------------------------------------------------------------

/// Index into the node arena. Nodes are pushed in discovery order, so a
/// smaller id also means discovered earlier.
type NodeId = usize;

struct Node {
    pos: Point,
    parent: Option<NodeId>,
    g: u32,
    h: u32,
    open: bool,
}

impl Node {
    #[inline]
    fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

/// Frontier entry, ordered for `BinaryHeap` so that the smallest `f` pops
/// first and equal `f` values pop in discovery order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    id: NodeId,
    f: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// State of a single planning call. Dropped when the call returns.
///
/// Every location has at most one node, whether open or closed; `index`
/// maps locations to that node.
pub(crate) struct Search<'a, C> {
    bounds: Range,
    obstacles: &'a ObstacleMap,
    cost: &'a C,
    config: &'a PlannerConfig,
    destination: Point,
    nodes: Vec<Node>,
    index: HashMap<Point, NodeId>,
    open: BinaryHeap<NodeRef>,
    stats: SearchStats,
}

impl<'a, C: CostModel> Search<'a, C> {
    pub(crate) fn new(
        obstacles: &'a ObstacleMap,
        cost: &'a C,
        config: &'a PlannerConfig,
        destination: Point,
    ) -> Self {
        Self {
            bounds: obstacles.bounds(),
            obstacles,
            cost,
            config,
            destination,
            nodes: Vec::new(),
            index: HashMap::new(),
            open: BinaryHeap::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the search from `start`. Both endpoints must already be in bounds.
    pub(crate) fn run(mut self, start: Point) -> Result<SearchOutcome, PlanError> {
        let g = self.cost.step_cost(start, None);
        self.discover(start, None, g, 0);

        let path = loop {
            let Some(cur) = self.pop_open() else {
                break None;
            };

            if self.config.goal_test == GoalTest::OnExpansion
                && self.nodes[cur].pos == self.destination
            {
                break Some(self.route_to(cur));
            }

            if let Some(limit) = self.config.max_expansions {
                if self.stats.expanded >= limit {
                    log::warn!(
                        "search from {start} to {} stopped after {limit} expansions",
                        self.destination
                    );
                    return Err(PlanError::ExpansionLimit { limit });
                }
            }

            if let Some(path) = self.expand(cur) {
                break Some(path);
            }
        };

        Ok(SearchOutcome {
            path,
            stats: self.stats,
        })
    }

    /// Process the four neighbors of `cur`, then close it. Returns the full
    /// route if the destination was discovered.
    fn expand(&mut self, cur: NodeId) -> Option<Vec<Point>> {
        self.stats.expanded += 1;
        let pos = self.nodes[cur].pos;
        let cur_g = self.nodes[cur].g;
        log::trace!("expand {pos} g={cur_g} f={}", self.nodes[cur].f());

        for dir in Direction::ALL {
            let next = pos + dir;
            if !self.bounds.contains(next) || self.obstacles.is_blocked(next) {
                continue;
            }

            let g = cur_g.saturating_add(self.cost.step_cost(pos, Some(dir)));
            let h = manhattan(next, self.destination);

            if self.config.goal_test == GoalTest::OnDiscovery && h == 0 {
                let mut route = self.route_to(cur);
                route.push(self.destination);
                return Some(route);
            }

            match self.index.get(&next) {
                Some(&id) => self.relax(id, cur, g),
                None => self.discover(next, Some(cur), g, h),
            }
        }

        self.nodes[cur].open = false;
        None
    }

    fn discover(&mut self, pos: Point, parent: Option<NodeId>, g: u32, h: u32) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            pos,
            parent,
            g,
            h,
            open: true,
        });
        self.index.insert(pos, id);
        self.open.push(NodeRef { id, f: g.saturating_add(h) });
        self.stats.discovered += 1;
    }

    /// Give node `id` the predecessor `parent` if that makes it cheaper.
    fn relax(&mut self, id: NodeId, parent: NodeId, g: u32) {
        let node = &mut self.nodes[id];
        if node.g <= g {
            return;
        }
        node.parent = Some(parent);
        node.g = g;
        self.stats.relaxed += 1;

        if !node.open {
            if self.config.closed_relaxation == ClosedRelaxation::Keep {
                return;
            }
            node.open = true;
        }
        let f = node.f();
        self.open.push(NodeRef { id, f });
    }

    /// Cheapest open node, skipping heap entries made stale by relaxation
    /// or closing.
    fn pop_open(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let node = &self.nodes[entry.id];
            if node.open && node.f() == entry.f {
                return Some(entry.id);
            }
        }
        None
    }

    /// Locations from the start node to `id`, following parent links.
    fn route_to(&self, id: NodeId) -> Vec<Point> {
        let mut route = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            route.push(self.nodes[i].pos);
            cur = self.nodes[i].parent;
        }
        route.reverse();
        route
    }
}
