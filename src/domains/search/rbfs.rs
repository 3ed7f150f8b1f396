use super::heuristic::Heuristic;
use super::plan::SearchMetrics;
use crate::domains::route_map::WeightedGraph;
use petgraph::graph::NodeIndex;

enum Rbfs {
    Found,
    Cutoff(f64),
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    state: NodeIndex,
    g: f64,
    f: f64,
}

struct RecursiveBestFirst<'a> {
    graph: &'a WeightedGraph,
    goal: NodeIndex,
    heuristic: Heuristic,
    path: Vec<NodeIndex>,
    held: usize,
    metrics: SearchMetrics,
}

impl RecursiveBestFirst<'_> {
    fn search(&mut self, state: NodeIndex, g: f64, f: f64, f_limit: f64) -> Rbfs {
        if state == self.goal {
            return Rbfs::Found;
        }
        self.metrics.nodes_expanded += 1;

        let mut candidates: Vec<Candidate> = self
            .graph
            .successors(state)
            .into_iter()
            .filter(|(next, _)| !self.path.contains(next))
            .map(|(next, distance)| {
                let g = g + distance;
                let h = self.heuristic.estimate_at(self.graph, next, self.goal);
                // a child never looks cheaper than its parent's backed-up value
                Candidate { state: next, g, f: (g + h).max(f) }
            })
            .collect();
        if candidates.is_empty() {
            return Rbfs::Cutoff(f64::INFINITY);
        }

        self.held += candidates.len();
        self.metrics.max_frontier_size = self.metrics.max_frontier_size.max(self.held);
        let result = loop {
            candidates.sort_by(|a, b| {
                a.f.total_cmp(&b.f)
                    .then(a.state.index().cmp(&b.state.index()))
            });
            let best = candidates[0];
            if best.f.is_infinite() || best.f > f_limit {
                break Rbfs::Cutoff(best.f);
            }
            let alternative = candidates.get(1).map_or(f64::INFINITY, |c| c.f);

            self.path.push(best.state);
            match self.search(best.state, best.g, best.f, f_limit.min(alternative)) {
                Rbfs::Found => break Rbfs::Found,
                Rbfs::Cutoff(backed_up) => {
                    self.path.pop();
                    candidates[0].f = backed_up;
                }
            }
        };
        self.held -= candidates.len();
        result
    }
}

/// Recursive best-first search: linear memory, re-expanding subtrees as the
/// backed-up f-values of abandoned branches change. Paths never revisit a
/// location already on them.
pub(crate) fn recursive_best_first(
    graph: &WeightedGraph,
    start: NodeIndex,
    goal: NodeIndex,
    heuristic: Heuristic,
) -> (Option<Vec<NodeIndex>>, SearchMetrics) {
    let mut rbfs = RecursiveBestFirst {
        graph,
        goal,
        heuristic,
        path: vec![start],
        held: 0,
        metrics: SearchMetrics::default(),
    };
    let f0 = heuristic.estimate_at(graph, start, goal);
    match rbfs.search(start, 0.0, f0, f64::INFINITY) {
        Rbfs::Found => (Some(rbfs.path), rbfs.metrics),
        Rbfs::Cutoff(_) => (None, rbfs.metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backs_up_to_cheaper_branch() {
        // S-A-G costs 2 + 10, S-B-G costs 5 + 1
        let mut g = WeightedGraph::new();
        g.add_bidirectional_edge("S", "A", 2.0);
        g.add_bidirectional_edge("S", "B", 5.0);
        g.add_bidirectional_edge("A", "G", 10.0);
        g.add_bidirectional_edge("B", "G", 1.0);
        let s = g.node_index("S").unwrap();
        let goal = g.node_index("G").unwrap();

        let (path, _) = recursive_best_first(&g, s, goal, Heuristic::Zero);
        let names: Vec<&str> = path.unwrap().into_iter().map(|n| g.name_of(n)).collect();
        assert_eq!(names, vec!["S", "B", "G"]);
    }

    #[test]
    fn disconnected_goal_terminates() {
        let mut g = WeightedGraph::new();
        g.add_bidirectional_edge("S", "A", 1.0);
        g.add_bidirectional_edge("A", "B", 1.0);
        g.add_bidirectional_edge("B", "S", 1.0);
        g.set_position("G", 0.0, 0.0);
        let s = g.node_index("S").unwrap();
        let goal = g.node_index("G").unwrap();

        let (path, metrics) = recursive_best_first(&g, s, goal, Heuristic::Zero);
        assert!(path.is_none());
        assert!(metrics.nodes_expanded > 0);
    }
}
