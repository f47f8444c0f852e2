//! Parameters for the latency search

/// When a neighbour is pushed onto the frontier during relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelaxationStrategy {
    /// Push the neighbour only if its distance improved.
    #[default]
    OnImprovement,
    /// Push the neighbour with its current best distance on every traversed
    /// link, improved or not. The frontier carries many redundant entries
    /// that are discarded when popped.
    EveryEdge,
}

/// Parameters for the latency search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub(crate) relaxation: RelaxationStrategy,
    // Stop as soon as the target is settled instead of draining the frontier
    pub(crate) stop_at_target: bool,
}

impl SearchParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn relaxation(mut self, strategy: RelaxationStrategy) -> Self {
        self.relaxation = strategy;
        self
    }

    pub fn stop_at_target(mut self, stop: bool) -> Self {
        self.stop_at_target = stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_drain_frontier_on_improvement() {
        let params = SearchParams::new();
        assert_eq!(params.relaxation, RelaxationStrategy::OnImprovement);
        assert!(!params.stop_at_target);

        let params = params
            .relaxation(RelaxationStrategy::EveryEdge)
            .stop_at_target(true);
        assert_eq!(params.relaxation, RelaxationStrategy::EveryEdge);
        assert!(params.stop_at_target);
    }
}
