//! Crate to find minimum latency paths in a network of routers.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! let mut g: RouterGraph = RouterGraph::new();
//! g.add_link("A".to_string(), "B".to_string(), 10.0);
//! g.add_link("A".to_string(), "C".to_string(), 20.0);
//! g.add_link("B".to_string(), "D".to_string(), 15.0);
//! g.add_link("C".to_string(), "D".to_string(), 30.0);
//!
//! let (path, latency) = find_minimum_latency_path(&g, &[], &"A".to_string(), &"D".to_string());
//! assert_eq!(path, "A->B->D");
//! assert_eq!(latency, 25.0);
//!```
//! [`RouterGraph`]: crate::graph::RouterGraph
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod search_params;
pub mod statistics;
pub mod util;
