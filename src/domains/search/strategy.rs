use super::engine::{frontier_search, Expansion};
use super::heuristic::Heuristic;
use super::iterative::iterative_deepening;
use super::plan::{Plan, SearchMetrics, SearchOutcome, SearchReport};
use super::rbfs::recursive_best_first;
use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::WeightedGraph;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    UniformCost,
    GreedyBestFirst,
    AStar,
    RecursiveBestFirst,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 7] = [
        SearchStrategy::BreadthFirst,
        SearchStrategy::DepthFirst,
        SearchStrategy::IterativeDeepening,
        SearchStrategy::UniformCost,
        SearchStrategy::GreedyBestFirst,
        SearchStrategy::AStar,
        SearchStrategy::RecursiveBestFirst,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SearchStrategy::BreadthFirst => "breadth-first",
            SearchStrategy::DepthFirst => "depth-first",
            SearchStrategy::IterativeDeepening => "iterative-deepening",
            SearchStrategy::UniformCost => "uniform-cost",
            SearchStrategy::GreedyBestFirst => "greedy-best-first",
            SearchStrategy::AStar => "a-star",
            SearchStrategy::RecursiveBestFirst => "recursive-best-first",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchStrategy::BreadthFirst => "Breadth First",
            SearchStrategy::DepthFirst => "Depth First",
            SearchStrategy::IterativeDeepening => "Iterative Deepening",
            SearchStrategy::UniformCost => "Uniform Cost",
            SearchStrategy::GreedyBestFirst => "Greedy Best First",
            SearchStrategy::AStar => "A*",
            SearchStrategy::RecursiveBestFirst => "Recursive Best First",
        }
    }

    /// Whether the heuristic influences expansion order at all.
    pub fn is_informed(&self) -> bool {
        matches!(
            self,
            SearchStrategy::GreedyBestFirst
                | SearchStrategy::AStar
                | SearchStrategy::RecursiveBestFirst
        )
    }

    /// Search `graph` for a route from `start` to `goal`.
    ///
    /// Unknown names fail with `UnknownLocation`; an unreachable goal is a
    /// normal `SearchOutcome::GoalUnreachable`.
    #[tracing::instrument(
        level = "debug",
        skip(self, graph),
        fields(strategy = self.id(), heuristic = heuristic.id())
    )]
    pub fn find_path(
        &self,
        graph: &WeightedGraph,
        start: &str,
        goal: &str,
        heuristic: Heuristic,
    ) -> DomainResult<SearchReport> {
        let start_idx = lookup(graph, start)?;
        let goal_idx = lookup(graph, goal)?;

        let frontier = |expansion: Expansion| {
            frontier_search(graph, start_idx, goal_idx, heuristic, expansion)
        };
        let (path, metrics) = if start_idx == goal_idx {
            (Some(vec![start_idx]), SearchMetrics::default())
        } else {
            match self {
                SearchStrategy::BreadthFirst => frontier(Expansion::Fifo),
                SearchStrategy::DepthFirst => frontier(Expansion::Lifo),
                SearchStrategy::UniformCost => frontier(Expansion::LowestG),
                SearchStrategy::GreedyBestFirst => frontier(Expansion::LowestH),
                SearchStrategy::AStar => frontier(Expansion::LowestF),
                SearchStrategy::RecursiveBestFirst => {
                    recursive_best_first(graph, start_idx, goal_idx, heuristic)
                }
                SearchStrategy::IterativeDeepening => {
                    iterative_deepening(graph, start_idx, goal_idx)
                }
            }
        };

        let outcome = match path {
            Some(path) => SearchOutcome::Found(Plan::from_path(graph, &path)),
            None => SearchOutcome::GoalUnreachable,
        };
        tracing::debug!(
            found = matches!(outcome, SearchOutcome::Found(_)),
            nodes_expanded = metrics.nodes_expanded,
            max_frontier_size = metrics.max_frontier_size,
            "search finished"
        );
        Ok(SearchReport {
            strategy: *self,
            heuristic,
            outcome,
            metrics,
        })
    }
}

fn lookup(graph: &WeightedGraph, name: &str) -> DomainResult<NodeIndex> {
    graph
        .node_index(name)
        .ok_or_else(|| DomainError::UnknownLocation { name: name.to_string() })
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SearchStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let strategy = match key.as_str() {
            "breadth-first" | "bfs" => SearchStrategy::BreadthFirst,
            "depth-first" | "dfs" => SearchStrategy::DepthFirst,
            "iterative-deepening" | "ids" => SearchStrategy::IterativeDeepening,
            "uniform-cost" | "ucs" => SearchStrategy::UniformCost,
            "greedy-best-first" | "greedy" => SearchStrategy::GreedyBestFirst,
            "a-star" | "astar" | "a*" => SearchStrategy::AStar,
            "recursive-best-first" | "rbfs" => SearchStrategy::RecursiveBestFirst,
            _ => return Err(DomainError::UnknownStrategy { name: s.to_string() }),
        };
        Ok(strategy)
    }
}
