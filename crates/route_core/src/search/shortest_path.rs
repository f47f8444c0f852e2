use std::fmt;

use crate::constants::{Latency, RouterId};

use super::join_path;

/// Minimum latency path, routers ordered from source to target.
#[derive(Debug, PartialEq, Clone)]
pub struct LatencyPath<N = String> {
    pub routers: Vec<N>,
    pub latency: Latency,
}

impl<N: RouterId> LatencyPath<N> {
    pub fn new(routers: Vec<N>, latency: Latency) -> Self {
        LatencyPath { routers, latency }
    }

    pub fn source(&self) -> Option<&N> {
        self.routers.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.routers.last()
    }

    /// Path in the `A->B->C` format
    pub fn formatted(&self) -> String {
        join_path(self.routers.iter())
    }
}

impl<N: RouterId> fmt::Display for LatencyPath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_routers() {
        let path = LatencyPath::new(vec!["A", "B", "D"], 25.0);
        assert_eq!(path.to_string(), "A->B->D");
        assert_eq!(path.source(), Some(&"A"));
        assert_eq!(path.target(), Some(&"D"));
    }
}
