use super::plan::SearchMetrics;
use crate::domains::route_map::WeightedGraph;
use petgraph::graph::NodeIndex;

enum DepthLimited {
    Found,
    Cutoff,
    Exhausted,
}

/// Depth-first search with an increasing depth limit. Stops as soon as a
/// pass completes without hitting the limit: every simple path has been seen.
pub(crate) fn iterative_deepening(
    graph: &WeightedGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> (Option<Vec<NodeIndex>>, SearchMetrics) {
    let mut metrics = SearchMetrics::default();
    let mut path = vec![start];

    for limit in 1..=graph.len() {
        match depth_limited(graph, goal, &mut path, limit, &mut metrics) {
            DepthLimited::Found => return (Some(path), metrics),
            DepthLimited::Exhausted => break,
            DepthLimited::Cutoff => {
                tracing::trace!(limit, "deepening");
            }
        }
    }
    (None, metrics)
}

fn depth_limited(
    graph: &WeightedGraph,
    goal: NodeIndex,
    path: &mut Vec<NodeIndex>,
    limit: usize,
    metrics: &mut SearchMetrics,
) -> DepthLimited {
    let Some(&state) = path.last() else {
        return DepthLimited::Exhausted;
    };
    if state == goal {
        return DepthLimited::Found;
    }
    if limit == 0 {
        return DepthLimited::Cutoff;
    }

    metrics.nodes_expanded += 1;
    metrics.max_frontier_size = metrics.max_frontier_size.max(path.len());
    let mut cutoff = false;
    for (next, _) in graph.successors(state) {
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        match depth_limited(graph, goal, path, limit - 1, metrics) {
            DepthLimited::Found => return DepthLimited::Found,
            DepthLimited::Cutoff => cutoff = true,
            DepthLimited::Exhausted => {}
        }
        path.pop();
    }
    if cutoff {
        DepthLimited::Cutoff
    } else {
        DepthLimited::Exhausted
    }
}
