use std::ops::AddAssign;

use crate::statistics::log_statistic;

/// Counters of one search. The counters of the workers of a parallel search are summed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of decisions taken.
    pub num_decisions: u64,
    /// The number of nodes at which propagation found a conflict.
    pub num_conflicts: u64,
    /// The number of complete schedules reached.
    pub num_solutions: u64,
    /// The number of subtrees which were fully explored.
    pub num_subtrees: u64,
    /// The number of nodes which could not improve on the incumbent.
    pub num_pruned_by_bound: u64,
    pub num_propagator_calls: u64,
}

impl SearchStatistics {
    pub fn log(&self) {
        log_statistic("decisions", self.num_decisions);
        log_statistic("conflicts", self.num_conflicts);
        log_statistic("solutions", self.num_solutions);
        log_statistic("subtrees", self.num_subtrees);
        log_statistic("prunedByBound", self.num_pruned_by_bound);
        log_statistic("propagatorCalls", self.num_propagator_calls);
    }
}

impl AddAssign for SearchStatistics {
    fn add_assign(&mut self, other: SearchStatistics) {
        self.num_decisions += other.num_decisions;
        self.num_conflicts += other.num_conflicts;
        self.num_solutions += other.num_solutions;
        self.num_subtrees += other.num_subtrees;
        self.num_pruned_by_bound += other.num_pruned_by_bound;
        self.num_propagator_calls += other.num_propagator_calls;
    }
}
