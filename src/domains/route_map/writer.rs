use super::graph::WeightedGraph;

/// Serialise a graph back into the map text format. Positioned locations are
/// written in insertion order; positionless ones only appear through routes.
pub fn to_map_text(name: &str, graph: &WeightedGraph) -> String {
    let positioned: Vec<(&str, f64, f64)> = graph
        .locations()
        .filter_map(|loc| graph.position(loc).map(|p| (loc, p.x, p.y)))
        .collect();
    let edges = graph.edges();

    let mut out = format!("{}\n{}\n", name, positioned.len());
    for (loc, x, y) in positioned {
        out.push_str(&format!("{} {} {}\n", loc, x, y));
    }
    out.push_str(&format!("{}\n", edges.len()));
    for (a, b, d) in edges {
        out.push_str(&format!("{} {} {}\n", a, b, d));
    }
    out
}

/// Human readable listing: every location with its position and the
/// distance to each neighbor.
pub fn describe(graph: &WeightedGraph) -> String {
    let mut out = String::new();
    for loc in graph.locations() {
        let header = match graph.position(loc) {
            Some(p) => format!("{} ({}, {}):\n", loc, p.x, p.y),
            None => format!("{} (no position):\n", loc),
        };
        out.push_str(&header);
        for n in graph.neighbors(loc) {
            out.push_str(&format!("\t{} ({})\n", n.name, n.distance));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_neighbors_under_each_location() {
        let mut g = WeightedGraph::new();
        g.set_position("A", 0.0, 0.0);
        g.add_bidirectional_edge("A", "Z", 3.5);

        let text = describe(&g);
        assert!(text.contains("A (0, 0):\n\tZ (3.5)\n"));
        assert!(text.contains("Z (no position):\n\tA (3.5)\n"));
    }

    #[test]
    fn map_text_lists_positioned_cities_then_routes() {
        let mut g = WeightedGraph::new();
        g.set_position("A", 0.0, 0.0);
        g.set_position("B", 10.0, 0.5);
        g.add_bidirectional_edge("A", "B", 10.0);
        g.add_bidirectional_edge("B", "Z", 2.5);

        assert_eq!(to_map_text("Pair", &g), "Pair\n2\nA 0 0\nB 10 0.5\n2\nA B 10\nB Z 2.5\n");
    }
}
