/// What to do when a cheaper predecessor is found for an already expanded
/// node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosedRelaxation {
    /// Rewrite its parent and cost but leave it closed. Routes may then be
    /// suboptimal under non-uniform cost models.
    #[default]
    Keep,
    /// Rewrite its parent and cost and put it back on the frontier.
    Reopen,
}

/// When the destination counts as reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalTest {
    /// As soon as the destination is generated as a passable neighbor of
    /// the node being expanded. The search stops there without comparing
    /// other frontier nodes.
    #[default]
    OnDiscovery,
    /// When the destination is taken off the frontier as the cheapest node.
    OnExpansion,
}

/// Search policies of a [`Planner`](crate::Planner).
///
/// The default reproduces the classic behavior: neighbor goal test, closed
/// nodes never reopened and no expansion cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub closed_relaxation: ClosedRelaxation,
    pub goal_test: GoalTest,
    /// Give up with [`PlanError::ExpansionLimit`](crate::PlanError) after
    /// this many expansions.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            closed_relaxation: ClosedRelaxation::Keep,
            goal_test: GoalTest::OnDiscovery,
            max_expansions: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_closed_relaxation(mut self, policy: ClosedRelaxation) -> Self {
        self.closed_relaxation = policy;
        self
    }

    pub fn with_goal_test(mut self, goal_test: GoalTest) -> Self {
        self.goal_test = goal_test;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
