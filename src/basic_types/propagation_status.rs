use crate::model::ConstraintFamily;

/// The result of invoking a propagator. The propagation can either succeed or identify a
/// conflict, in which case the current branch of the search tree cannot contain a solution.
pub(crate) type PropagationStatus = Result<(), Inconsistency>;

/// Signals that a variable was forced to both `true` and `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// A propagation tried to assign the opposite value to an already fixed variable.
    EmptyDomain,
    /// A cardinality or capacity bound of the given family is already violated by the fixed
    /// variables.
    Violated(ConstraintFamily),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
