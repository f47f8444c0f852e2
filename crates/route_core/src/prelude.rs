//! Re-exports of the most commonly used items in `route_core`.
pub use crate::search_params::RelaxationStrategy;
pub use crate::search_params::SearchParams;

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::{find_minimum_latency_path, find_minimum_latency_path_with};
pub use crate::search::shortest_path::LatencyPath;

pub use crate::constants::Latency;
pub use crate::graph::Link;
pub use crate::graph::RouterGraph;
pub use crate::util::test_graphs::generate_grid_graph;
