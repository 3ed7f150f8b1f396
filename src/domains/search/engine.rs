use super::heuristic::Heuristic;
use super::plan::SearchMetrics;
use crate::domains::route_map::WeightedGraph;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// Expansion order of the shared frontier engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    Fifo,
    Lifo,
    LowestG,
    LowestH,
    LowestF,
}

impl Expansion {
    /// Uniform-cost and A* track path cost and may re-open a location
    /// reached again at a strictly lower cost.
    fn tracks_cost(self) -> bool {
        matches!(self, Expansion::LowestG | Expansion::LowestF)
    }

    fn priority(self, g: f64, h: f64) -> f64 {
        match self {
            Expansion::Fifo | Expansion::Lifo => 0.0,
            Expansion::LowestG => g,
            Expansion::LowestH => h,
            Expansion::LowestF => g + h,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    state: NodeIndex,
    parent: Option<usize>,
    g: f64,
}

/// Priority keys break ties on the location's insertion rank, then on push
/// order, so identical inputs always expand identically.
type PriorityKey = Reverse<(OrderedFloat<f64>, usize, usize)>;

enum Frontier {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority(BinaryHeap<PriorityKey>),
}

impl Frontier {
    fn for_expansion(expansion: Expansion) -> Self {
        match expansion {
            Expansion::Fifo => Frontier::Fifo(VecDeque::new()),
            Expansion::Lifo => Frontier::Lifo(Vec::new()),
            _ => Frontier::Priority(BinaryHeap::new()),
        }
    }

    fn push(&mut self, id: usize, priority: f64, rank: usize) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(id),
            Frontier::Lifo(stack) => stack.push(id),
            Frontier::Priority(heap) => heap.push(Reverse((OrderedFloat(priority), rank, id))),
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority(heap) => heap.pop().map(|Reverse((_, _, id))| id),
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority(heap) => heap.len(),
        }
    }
}

/// Graph search over one frontier discipline. Returns the node path from
/// `start` to `goal` (both included) or `None` once the frontier is empty.
pub(crate) fn frontier_search(
    graph: &WeightedGraph,
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: Heuristic,
    expansion: Expansion,
) -> (Option<Vec<NodeIndex>>, SearchMetrics) {
    let mut metrics = SearchMetrics::default();
    let mut nodes = vec![SearchNode {
        state: start,
        parent: None,
        g: 0.0,
    }];
    let mut frontier = Frontier::for_expansion(expansion);
    let mut reached: HashSet<NodeIndex> = HashSet::from([start]);
    let mut best_g: HashMap<NodeIndex, f64> = HashMap::from([(start, 0.0)]);
    let mut expanded: HashMap<NodeIndex, f64> = HashMap::new();

    let h0 = heuristic.estimate_at(graph, start, goal);
    frontier.push(0, expansion.priority(0.0, h0), start.index());
    metrics.max_frontier_size = 1;

    while let Some(id) = frontier.pop() {
        let node = nodes[id];

        if expansion.tracks_cost() {
            if best_g.get(&node.state).is_some_and(|best| *best < node.g) {
                continue;
            }
            if expanded.get(&node.state).is_some_and(|g| *g <= node.g) {
                continue;
            }
        } else if expanded.contains_key(&node.state) {
            continue;
        }

        if node.state == goal {
            tracing::trace!(expanded = metrics.nodes_expanded, "goal reached");
            return (Some(walk_back(&nodes, id)), metrics);
        }

        expanded.insert(node.state, node.g);
        metrics.nodes_expanded += 1;
        tracing::trace!(location = graph.name_of(node.state), g = node.g, "expanding");

        let mut successors = graph.successors(node.state);
        if expansion == Expansion::Lifo {
            // first-inserted neighbor ends on top of the stack
            successors.reverse();
        }

        for (next, distance) in successors {
            let g = node.g + distance;
            if expansion.tracks_cost() {
                if best_g.get(&next).is_some_and(|best| *best <= g) {
                    continue;
                }
                best_g.insert(next, g);
            } else if !reached.insert(next) {
                continue;
            }

            let h = heuristic.estimate_at(graph, next, goal);
            nodes.push(SearchNode {
                state: next,
                parent: Some(id),
                g,
            });
            frontier.push(nodes.len() - 1, expansion.priority(g, h), next.index());
        }
        metrics.max_frontier_size = metrics.max_frontier_size.max(frontier.len());
    }

    tracing::trace!(expanded = metrics.nodes_expanded, "frontier exhausted");
    (None, metrics)
}

fn walk_back(nodes: &[SearchNode], mut id: usize) -> Vec<NodeIndex> {
    let mut path = vec![nodes[id].state];
    while let Some(parent) = nodes[id].parent {
        path.push(nodes[parent].state);
        id = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> WeightedGraph {
        // S -> A -> G and S -> B -> G, both cost 2
        let mut g = WeightedGraph::new();
        for name in ["S", "A", "B", "G"] {
            g.set_position(name, 0.0, 0.0);
        }
        g.add_bidirectional_edge("S", "B", 1.0);
        g.add_bidirectional_edge("S", "A", 1.0);
        g.add_bidirectional_edge("B", "G", 1.0);
        g.add_bidirectional_edge("A", "G", 1.0);
        g
    }

    fn names(graph: &WeightedGraph, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|n| graph.name_of(*n).to_string()).collect()
    }

    #[test]
    fn equal_costs_prefer_first_inserted_location() {
        let g = diamond();
        let s = g.node_index("S").unwrap();
        let goal = g.node_index("G").unwrap();

        let expansions = [
            Expansion::Fifo,
            Expansion::Lifo,
            Expansion::LowestG,
            Expansion::LowestF,
        ];
        for expansion in expansions {
            let (path, _) = frontier_search(&g, s, goal, Heuristic::Zero, expansion);
            assert_eq!(names(&g, &path.unwrap()), vec!["S", "A", "G"], "{:?}", expansion);
        }
    }

    #[test]
    fn cheaper_late_route_replaces_frontier_entry() {
        let mut g = WeightedGraph::new();
        g.add_bidirectional_edge("S", "G", 10.0);
        g.add_bidirectional_edge("S", "M", 1.0);
        g.add_bidirectional_edge("M", "G", 1.0);
        let s = g.node_index("S").unwrap();
        let goal = g.node_index("G").unwrap();

        let (path, metrics) = frontier_search(&g, s, goal, Heuristic::Zero, Expansion::LowestG);
        assert_eq!(names(&g, &path.unwrap()), vec!["S", "M", "G"]);
        assert_eq!(metrics.nodes_expanded, 2);
    }
}
