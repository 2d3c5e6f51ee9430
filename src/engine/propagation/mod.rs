//! Domain narrowing without branching.
//!
//! The [`PropagationEngine`] keeps a queue of constraints whose variables changed and runs the
//! matching propagator for each of them until no more domains change, or until a propagator
//! reports an [`Inconsistency`](crate::basic_types::Inconsistency). Propagators only ever fix
//! unassigned variables, so repeated passes never loosen a domain.

mod propagation_context;
mod propagation_engine;

pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagation_engine::PropagationEngine;
