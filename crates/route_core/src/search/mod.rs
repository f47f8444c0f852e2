use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::{Latency, RouterId, PATH_SEPARATOR};
use crate::graph::RouterGraph;
use crate::search_params::SearchParams;

use self::dijkstra::Dijkstra;

pub mod dijkstra;
pub mod shortest_path;

/// Distance and predecessor tables of a single query.
///
/// Created fresh for every query and owned by the caller afterwards.
#[derive(Debug, Clone)]
pub struct SearchSpace<N> {
    pub(crate) source: N,
    pub(crate) distances: FxHashMap<N, Latency>,
    pub(crate) predecessors: FxHashMap<N, N>,
}

impl<N: RouterId> SearchSpace<N> {
    pub(crate) fn new(source: N) -> Self {
        let mut distances = FxHashMap::default();
        distances.insert(source.clone(), 0.0);
        SearchSpace {
            source,
            distances,
            predecessors: FxHashMap::default(),
        }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    /// Best latency found from the source. `None` if the router was never reached.
    pub fn distance(&self, router: &N) -> Option<Latency> {
        self.distances.get(router).copied()
    }

    pub fn predecessor(&self, router: &N) -> Option<&N> {
        self.predecessors.get(router)
    }

    pub fn num_reached(&self) -> usize {
        self.distances.len()
    }

    /// Backward sequence from `target` to the source, see [`trace_back`].
    pub fn trace_back(&self, target: &N) -> Vec<N> {
        trace_back(&self.predecessors, target)
    }
}

/// Rebuilds the path to `target` from the predecessor table.
///
/// The result is ordered from `target` back to the source. It is empty if
/// `target` has no predecessor, which includes the source itself.
pub fn trace_back<N: RouterId>(predecessors: &FxHashMap<N, N>, target: &N) -> Vec<N> {
    let Some(mut previous) = predecessors.get(target) else {
        return Vec::new();
    };

    let mut backward = vec![target.clone()];
    let mut seen: FxHashSet<&N> = FxHashSet::default();
    seen.insert(target);

    // A cycle in the table can only come from negative latencies
    while seen.insert(previous) {
        backward.push(previous.clone());
        match predecessors.get(previous) {
            Some(prev) => previous = prev,
            None => break,
        }
    }

    backward
}

/// Formats a backward sequence as `source->...->target`.
pub fn pretty_print<N: RouterId>(backward: &[N]) -> String {
    join_path(backward.iter().rev())
}

pub(crate) fn join_path<'a, N: RouterId + 'a>(routers: impl Iterator<Item = &'a N>) -> String {
    routers
        .map(|router| router.to_string())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Returns the formatted minimum latency path from `source` to `target` and
/// its total latency.
///
/// An empty path means that no path exists; the latency is `0.0` in that
/// case. Querying `source == target` also yields an empty path.
///
/// `compression_routers` is accepted but does not influence the result.
pub fn find_minimum_latency_path<N: RouterId>(
    graph: &RouterGraph<N>,
    compression_routers: &[N],
    source: &N,
    target: &N,
) -> (String, Latency) {
    find_minimum_latency_path_with(
        graph,
        SearchParams::default(),
        compression_routers,
        source,
        target,
    )
}

/// Same as [`find_minimum_latency_path`] with explicit search parameters.
pub fn find_minimum_latency_path_with<N: RouterId>(
    graph: &RouterGraph<N>,
    params: SearchParams,
    compression_routers: &[N],
    source: &N,
    target: &N,
) -> (String, Latency) {
    if !compression_routers.is_empty() {
        debug!(
            "Ignoring {} compression routers: {:?}",
            compression_routers.len(),
            compression_routers
        );
    }

    let mut dijkstra = Dijkstra::with_params(graph, params);
    let space = dijkstra.run(source, Some(target));

    let path = pretty_print(&space.trace_back(target));
    let latency = space.distance(target).unwrap_or_default();
    (path, latency)
}

#[cfg(test)]
pub(crate) fn assert_no_path<N: RouterId>(path: Option<shortest_path::LatencyPath<N>>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_latency: Latency,
    path: Option<shortest_path::LatencyPath>,
) {
    let path = path.expect("expected a path");
    assert_eq!(expected_path, path.routers);
    approx::assert_abs_diff_eq!(expected_latency, path.latency, epsilon = 1e-9);
}
