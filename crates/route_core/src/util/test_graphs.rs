use crate::{graph::RouterGraph, link};

pub fn scenario_one() -> RouterGraph {
    // A -> B -> D
    // |         ^
    // C --------|
    let mut g = RouterGraph::new();

    g.add_edge(link!("A" => "B", 10.0));
    g.add_edge(link!("A" => "C", 20.0));
    g.add_edge(link!("B" => "D", 15.0));
    g.add_edge(link!("C" => "D", 30.0));

    g
}

pub fn scenario_two() -> RouterGraph {
    // A -> B -> E
    // |         ^
    // C -> D ---|
    let mut g = RouterGraph::new();

    g.add_edge(link!("A" => "B", 4.0));
    g.add_edge(link!("A" => "C", 8.0));
    g.add_edge(link!("B" => "E", 6.0));
    g.add_edge(link!("C" => "D", 2.0));
    g.add_edge(link!("D" => "E", 10.0));

    g
}

pub fn scenario_three() -> RouterGraph {
    // A -> B -> E <- D
    // |    |         ^
    // |    F --------|
    // C -------------|
    let mut g = scenario_two();

    g.add_edge(link!("B" => "F", 1.0));
    g.add_edge(link!("F" => "D", 1.0));

    g
}

/// Bidirectional `rows x cols` grid. Routers are named `row_col` and the
/// latencies vary deterministically between 1 and 5.
pub fn generate_grid_graph(rows: usize, cols: usize) -> RouterGraph {
    let mut g = RouterGraph::with_capacity(rows * cols);
    let name = |r: usize, c: usize| format!("{r}_{c}");

    for r in 0..rows {
        for c in 0..cols {
            g.add_router(name(r, c));
            let latency = (1 + (r * 7 + c * 3) % 5) as f64;
            if c + 1 < cols {
                g.add_edges(link!(name(r, c), name(r, c + 1), latency));
            }
            if r + 1 < rows {
                g.add_edges(link!(name(r, c), name(r + 1, c), latency + 0.5));
            }
        }
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions() {
        let g = generate_grid_graph(3, 4);
        assert_eq!(g.num_routers(), 12);
        // (3 * 3 horizontal + 2 * 4 vertical) in both directions
        assert_eq!(g.num_links(), 2 * (9 + 8));
        assert_eq!(g.links(&"0_0".to_string()).len(), 2);
        assert_eq!(g.links(&"1_1".to_string()).len(), 4);
    }

    #[test]
    fn scenario_three_extends_two() {
        assert_eq!(scenario_two().num_links() + 2, scenario_three().num_links());
    }
}
