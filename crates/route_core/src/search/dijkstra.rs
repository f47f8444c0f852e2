use crate::constants::RouterId;
use crate::graph::RouterGraph;
use crate::priority_queue::{FrontierEntry, PriorityQueue};
use crate::search::shortest_path::LatencyPath;
use crate::search::SearchSpace;
use crate::search_params::{RelaxationStrategy, SearchParams};
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashSet;

pub struct Dijkstra<'a, N = String> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a RouterGraph<N>,
}

impl<'a, N: RouterId> Dijkstra<'a, N> {
    pub fn new(graph: &'a RouterGraph<N>) -> Self {
        Self::with_params(graph, SearchParams::default())
    }

    pub fn with_params(graph: &'a RouterGraph<N>, params: SearchParams) -> Self {
        Dijkstra {
            g: graph,
            params,
            stats: SearchStats::default(),
        }
    }

    /// Minimum latency path from `source` to `target`.
    ///
    /// Returns `None` if `target` cannot be reached or if `source == target`.
    pub fn search(&mut self, source: &N, target: &N) -> Option<LatencyPath<N>> {
        let space = self.run(source, Some(target));

        let mut routers = space.trace_back(target);
        if routers.is_empty() {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration, self.stats.nodes_settled
            );
            return None;
        }
        routers.reverse();

        let sp = LatencyPath::new(routers, space.distance(target)?);
        debug!("Path found: {:?}", sp);
        info!(
            "Path found: {:?}/{} nodes settled",
            self.stats.duration, self.stats.nodes_settled
        );
        Some(sp)
    }

    /// Runs the search from `source` until the frontier is exhausted and
    /// returns the resulting distance and predecessor tables.
    pub fn distances(&mut self, source: &N) -> SearchSpace<N> {
        self.run(source, None)
    }

    pub(crate) fn run(&mut self, source: &N, target: Option<&N>) -> SearchSpace<N> {
        self.stats.init();

        let mut space = SearchSpace::new(source.clone());
        let mut settled: FxHashSet<N> = FxHashSet::default();
        let mut queue = PriorityQueue::new();

        queue.push(FrontierEntry::new(source.clone(), 0.0));
        self.stats.entries_pushed += 1;

        while let Some(FrontierEntry { router, distance }) = queue.pop() {
            // Lazy deletion: the first pop of a router carries its final distance
            if !settled.insert(router.clone()) {
                self.stats.stale_entries_skipped += 1;
                continue;
            }
            self.stats.nodes_settled += 1;

            if self.params.stop_at_target && Some(&router) == target {
                break;
            }

            let base = space.distance(&router).unwrap_or(distance);
            for link in self.g.links(&router) {
                let candidate = base + link.latency;
                let improved = space
                    .distances
                    .get(&link.target)
                    .map_or(true, |&known| candidate < known);

                if improved {
                    space.distances.insert(link.target.clone(), candidate);
                    space
                        .predecessors
                        .insert(link.target.clone(), router.clone());
                }

                if improved || self.params.relaxation == RelaxationStrategy::EveryEdge {
                    let best = space.distances.get(&link.target).copied().unwrap_or(candidate);
                    queue.push(FrontierEntry::new(link.target.clone(), best));
                    self.stats.entries_pushed += 1;
                }
            }
        }
        self.stats.finish();

        debug!("{}", self.stats);
        space
    }
}
