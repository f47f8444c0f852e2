use crate::constants::{Latency, RouterId};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

/// Outgoing connection stored in the adjacency list of a router.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<N = String> {
    pub target: N,
    pub latency: Latency,
}

impl<N> Link<N> {
    pub fn new(target: N, latency: Latency) -> Self {
        Link { target, latency }
    }
}

/// Directed edge as handed in by a caller or read from a csv row.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge<N = String> {
    pub source: N,
    pub target: N,
    pub latency: Latency,
}

impl<N> Edge<N> {
    pub fn new(source: N, target: N, latency: Latency) -> Self {
        Edge {
            source,
            target,
            latency,
        }
    }
}

/// Adjacency view of a router network.
///
/// Every router maps to the ordered sequence of its outgoing links. A router
/// that is not part of the mapping is treated as having no outgoing links.
/// No validation is performed: duplicate links, self loops and cycles are
/// stored as given.
#[derive(Debug, Clone)]
pub struct RouterGraph<N = String> {
    adjacency: FxHashMap<N, Vec<Link<N>>>,
    num_links: usize,
}

impl<N: RouterId> RouterGraph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            num_links: 0,
        }
    }

    pub fn with_capacity(num_routers: usize) -> Self {
        Self {
            adjacency: FxHashMap::with_capacity_and_hasher(num_routers, Default::default()),
            num_links: 0,
        }
    }

    /// Registers `router` with an empty adjacency list. Does nothing if the
    /// router already exists.
    pub fn add_router(&mut self, router: N) {
        self.adjacency.entry(router).or_default();
    }

    /// Appends a directed link `source -> target` to the adjacency list of
    /// `source`. The target is registered as a router as well.
    pub fn add_link(&mut self, source: N, target: N, latency: Latency) {
        self.add_router(target.clone());
        self.adjacency
            .entry(source)
            .or_default()
            .push(Link::new(target, latency));
        self.num_links += 1;
    }

    pub fn add_edge(&mut self, edge: Edge<N>) {
        self.add_link(edge.source, edge.target, edge.latency);
    }

    pub fn add_edges(&mut self, edges: Vec<Edge<N>>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Outgoing links of `router` in insertion order. Empty if the router is
    /// unknown.
    pub fn links(&self, router: &N) -> &[Link<N>] {
        self.adjacency
            .get(router)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, router: &N) -> bool {
        self.adjacency.contains_key(router)
    }

    /// Returns an iterator over all routers of the graph
    pub fn routers(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.adjacency.iter().flat_map(|(source, links)| {
            links
                .iter()
                .map(move |link| Edge::new(source.clone(), link.target.clone(), link.latency))
        })
    }

    pub fn num_routers(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_links(&self) -> usize {
        self.num_links
    }

    pub fn print_info(&self) {
        println!(
            "RouterGraph:\t#Routers: {}, #Links: {}",
            self.num_routers(),
            self.num_links()
        );
    }
}

impl<N: RouterId + DeserializeOwned> RouterGraph<N> {
    /// Reads a graph from a csv file with the header `source,target,latency`.
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Reading links from {:?}", path);

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Could not open csv file {:?}", path))?;

        let mut g = RouterGraph::new();
        for (row, result) in reader.deserialize::<Edge<N>>().enumerate() {
            let edge: Edge<N> =
                result.with_context(|| format!("Failed to parse link in row {}", row + 1))?;
            g.add_edge(edge);
        }

        info!(
            "Graph has {} routers and {} links",
            g.num_routers(),
            g.num_links()
        );
        Ok(g)
    }
}

impl<N: RouterId + Serialize> RouterGraph<N> {
    pub fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Could not create csv file {:?}", path))?;

        debug!("BEGIN writing links");
        for edge in self.edges() {
            wtr.serialize(edge)?;
        }

        wtr.flush()?;
        debug!("FINISHED writing links");
        Ok(())
    }
}

impl<N: RouterId> Default for RouterGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: RouterId> FromIterator<(N, Vec<Link<N>>)> for RouterGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Link<N>>)>>(iter: I) -> Self {
        let mut g = RouterGraph::new();
        for (source, links) in iter {
            g.add_router(source.clone());
            for link in links {
                g.add_link(source.clone(), link.target, link.latency);
            }
        }
        g
    }
}

impl<N: RouterId> From<FxHashMap<N, Vec<Link<N>>>> for RouterGraph<N> {
    fn from(adjacency: FxHashMap<N, Vec<Link<N>>>) -> Self {
        let num_links = adjacency.values().map(Vec::len).sum();
        Self {
            adjacency,
            num_links,
        }
    }
}

/// Macro to create a link from source to target with a latency
///
/// link!("A", "B", 3.0) Returns links in both directions
///
/// link!("A" => "B", 3.0) Returns directed link
#[macro_export]
macro_rules! link {
    ($source:expr => $target:expr, $latency:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $latency)
    };
    ($source:expr , $target:expr, $latency:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $latency),
            $crate::graph::Edge::new($target.into(), $source.into(), $latency),
        ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_from_csv() {
        let graph: RouterGraph = RouterGraph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/links.csv"),
        )
        .unwrap();

        assert_eq!(graph.num_routers(), 4);
        assert_eq!(graph.num_links(), 4);
        assert_eq!(graph.links(&"A".to_string()).len(), 2);
        assert_eq!(graph.links(&"D".to_string()).len(), 0);
        assert_eq!(
            graph.links(&"B".to_string()),
            &[Link::new("D".to_string(), 15.0)]
        );
    }

    #[test]
    fn read_from_missing_csv_fails() {
        let res: anyhow::Result<RouterGraph> = RouterGraph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/does_not_exist.csv"),
        );
        assert!(res.is_err());
    }

    #[test]
    fn export_and_read_csv() {
        let mut g: RouterGraph = RouterGraph::new();
        g.add_edge(link!("A" => "B", 1.5));
        g.add_edges(link!("B", "C", 2.0));

        let path = std::env::temp_dir().join("route_core_export_and_read.csv");
        g.export_csv(&path).unwrap();
        let read: RouterGraph = RouterGraph::from_csv(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(read.num_links(), 3);
        assert_eq!(read.links(&"A".to_string()), g.links(&"A".to_string()));
        assert_eq!(read.links(&"C".to_string()).len(), 1);
    }

    #[test]
    fn absent_router_has_no_links() {
        let g: RouterGraph = RouterGraph::new();
        assert!(g.links(&"X".to_string()).is_empty());
        assert!(!g.contains(&"X".to_string()));
    }

    #[test]
    fn duplicate_links_are_kept_in_order() {
        let mut g: RouterGraph<&str> = RouterGraph::new();
        g.add_link("A", "B", 2.0);
        g.add_link("A", "B", 1.0);

        assert_eq!(g.num_links(), 2);
        assert_eq!(g.links(&"A"), &[Link::new("B", 2.0), Link::new("B", 1.0)]);
        assert!(g.contains(&"B"));
    }

    #[test]
    fn from_adjacency_map() {
        let g: RouterGraph<&str> = vec![
            ("A", vec![Link::new("B", 1.0), Link::new("C", 2.0)]),
            ("B", vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(g.num_routers(), 3);
        assert_eq!(g.num_links(), 2);

        let mut map = FxHashMap::default();
        map.insert("A", vec![Link::new("B", 1.0)]);
        let g = RouterGraph::from(map);
        assert_eq!(g.num_links(), 1);
        assert!(!g.contains(&"B"));
        assert!(g.links(&"B").is_empty());
    }
}
