use enumset::EnumSet;

use crate::branching::ValueOrder;
use crate::model::ConstraintFamily;

/// Options which influence how the [`Solver`](crate::Solver) searches. None of them changes which
/// guest count is optimal.
#[derive(Clone, Copy, Debug)]
pub struct SolverOptions {
    /// The number of worker threads.
    pub threads: usize,
    /// The search is split into `2^partition_depth` subtrees, one for every combination of host
    /// flags of the first `partition_depth` vessels. Workers take subtrees one at a time.
    pub partition_depth: usize,
    /// The value tried first when branching on a host flag.
    pub host_value_order: ValueOrder,
    /// The value tried first when branching on a visit flag.
    pub visit_value_order: ValueOrder,
    /// The implied constraints posted on top of the required ones.
    pub implied_constraints: EnumSet<ConstraintFamily>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            threads: 1,
            partition_depth: 3,
            host_value_order: ValueOrder::FalseFirst,
            visit_value_order: ValueOrder::TrueFirst,
            implied_constraints: ConstraintFamily::implied(),
        }
    }
}
