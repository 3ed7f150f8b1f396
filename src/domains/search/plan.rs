use super::heuristic::Heuristic;
use super::strategy::SearchStrategy;
use crate::domains::route_map::WeightedGraph;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Ordered moves, each a location one edge away from the previous one.
/// Empty means "already at the goal" or "no path".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    moves: Vec<String>,
    cost: f64,
}

impl Plan {
    pub fn new(moves: Vec<String>, cost: f64) -> Self {
        Self { moves, cost }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a plan from a node path that starts at the agent's location.
    pub(crate) fn from_path(graph: &WeightedGraph, path: &[NodeIndex]) -> Self {
        let cost = path
            .windows(2)
            .filter_map(|w| graph.distance_between(w[0], w[1]))
            .sum();
        let moves = path
            .iter()
            .skip(1)
            .map(|idx| graph.name_of(*idx).to_string())
            .collect();
        Self { moves, cost }
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn into_moves(self) -> Vec<String> {
        self.moves
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(Plan),
    /// The frontier ran dry before reaching the goal. Expected, not an error.
    GoalUnreachable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetrics {
    pub nodes_expanded: usize,
    pub max_frontier_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy: SearchStrategy,
    pub heuristic: Heuristic,
    pub outcome: SearchOutcome,
    pub metrics: SearchMetrics,
}

impl SearchReport {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// The plan to execute; empty when the goal is unreachable.
    pub fn plan(&self) -> Plan {
        match &self.outcome {
            SearchOutcome::Found(plan) => plan.clone(),
            SearchOutcome::GoalUnreachable => Plan::empty(),
        }
    }

    pub fn path_cost(&self) -> Option<f64> {
        match &self.outcome {
            SearchOutcome::Found(plan) => Some(plan.cost()),
            SearchOutcome::GoalUnreachable => None,
        }
    }
}
