use super::types::{Location, Neighbor, Position2D};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Named locations with optional positions, joined by symmetric weighted
/// edges. Node indices follow insertion order; nothing is ever removed, so
/// the index doubles as the tie-break rank used by the search strategies.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    graph: UnGraph<Location, f64>,
    index: HashMap<String, NodeIndex>,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Create the location if missing, then set its position.
    pub fn set_position(&mut self, name: &str, x: f64, y: f64) {
        let idx = self.ensure_location(name);
        self.graph[idx].position = Some(Position2D::new(x, y));
    }

    /// Add (or overwrite) the undirected edge between `a` and `b`. Unknown
    /// endpoints are created without a position.
    pub fn add_bidirectional_edge(&mut self, a: &str, b: &str, distance: f64) {
        let ia = self.ensure_location(a);
        let ib = self.ensure_location(b);
        self.graph.update_edge(ia, ib, distance);
    }

    fn ensure_location(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(Location {
            name: name.to_string(),
            position: None,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Location names in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(|loc| loc.name.as_str())
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|idx| &self.graph[*idx])
    }

    pub fn position(&self, name: &str) -> Option<Position2D> {
        self.location(name).and_then(|loc| loc.position)
    }

    /// Neighbors of `name` ordered by their insertion rank; empty for an
    /// unknown location.
    pub fn neighbors(&self, name: &str) -> Vec<Neighbor> {
        let Some(idx) = self.index.get(name) else {
            return Vec::new();
        };
        self.successors(*idx)
            .into_iter()
            .map(|(next, distance)| Neighbor {
                name: self.graph[next].name.clone(),
                distance,
            })
            .collect()
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let a = *self.index.get(from)?;
        let b = *self.index.get(to)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Every undirected edge once, in the order it was first added.
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].name.clone(),
                    self.graph[e.target()].name.clone(),
                    *e.weight(),
                )
            })
            .collect()
    }

    pub(crate) fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    pub(crate) fn position_at(&self, idx: NodeIndex) -> Option<Position2D> {
        self.graph[idx].position
    }

    pub(crate) fn distance_between(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Adjacent nodes with edge distance, sorted by insertion rank.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut out: Vec<(NodeIndex, f64)> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (other, *e.weight())
            })
            .collect();
        out.sort_by_key(|(n, _)| n.index());
        out
    }
}

/// Structural equality: same locations in the same order with the same
/// positions, and the same undirected edges with the same distances.
impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.edge_count() != other.edge_count() {
            return false;
        }
        let same_nodes = self
            .graph
            .node_weights()
            .zip(other.graph.node_weights())
            .all(|(a, b)| a == b);
        same_nodes
            && self
                .edges()
                .iter()
                .all(|(a, b, d)| other.distance(a, b) == Some(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric_and_overwritten() {
        let mut g = WeightedGraph::new();
        g.add_bidirectional_edge("A", "B", 4.0);
        g.add_bidirectional_edge("B", "A", 6.0);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.distance("A", "B"), Some(6.0));
        assert_eq!(g.distance("B", "A"), Some(6.0));
    }

    #[test]
    fn duplicate_position_keeps_insertion_order() {
        let mut g = WeightedGraph::new();
        g.set_position("A", 0.0, 0.0);
        g.set_position("B", 1.0, 1.0);
        g.set_position("A", 5.0, 5.0);

        assert_eq!(g.locations().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(g.position("A"), Some(Position2D::new(5.0, 5.0)));
    }

    #[test]
    fn neighbors_follow_insertion_rank() {
        let mut g = WeightedGraph::new();
        g.set_position("A", 0.0, 0.0);
        g.set_position("B", 0.0, 0.0);
        g.set_position("C", 0.0, 0.0);
        g.add_bidirectional_edge("A", "C", 2.0);
        g.add_bidirectional_edge("B", "A", 1.0);

        let names: Vec<String> = g.neighbors("A").into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["B".to_string(), "C".to_string()]);
        assert!(g.neighbors("missing").is_empty());
    }
}
