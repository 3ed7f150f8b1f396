use crate::common::DomainError;
use crate::domains::route_map::WeightedGraph;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cost-to-goal estimate. A pure function of `(state, goal)`: nothing is
/// bound to a goal, so re-targeting cannot leave stale values behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    Zero,
    StraightLine,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Zero, Heuristic::StraightLine];

    pub fn id(&self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::StraightLine => "straight-line",
        }
    }

    /// Estimated remaining cost from `state` to `goal`. The straight-line
    /// variant falls back to 0 when either location is unknown or unpositioned.
    pub fn estimate(&self, graph: &WeightedGraph, state: &str, goal: &str) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::StraightLine => match (graph.position(state), graph.position(goal)) {
                (Some(a), Some(b)) => a.distance(&b),
                _ => 0.0,
            },
        }
    }

    pub(crate) fn estimate_at(
        &self,
        graph: &WeightedGraph,
        state: NodeIndex,
        goal: NodeIndex,
    ) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::StraightLine => match (graph.position_at(state), graph.position_at(goal)) {
                (Some(a), Some(b)) => a.distance(&b),
                _ => 0.0,
            },
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Heuristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "=0" | "0" => Ok(Heuristic::Zero),
            "straight-line" | "straight_line" | "sld" => Ok(Heuristic::StraightLine),
            _ => Err(DomainError::UnknownHeuristic { name: s.to_string() }),
        }
    }
}

/// An edge shorter than the straight line between its endpoints. Such edges
/// make the straight-line heuristic inadmissible.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightLineViolation {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub straight_line: f64,
}

pub fn straight_line_violations(graph: &WeightedGraph) -> Vec<StraightLineViolation> {
    graph
        .edges()
        .into_iter()
        .filter_map(|(from, to, distance)| {
            let straight_line = Heuristic::StraightLine.estimate(graph, &from, &to);
            (distance < straight_line).then(|| StraightLineViolation {
                from,
                to,
                distance,
                straight_line,
            })
        })
        .collect()
}
