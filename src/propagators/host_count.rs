use super::Tally;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::ConstraintFamily;

/// Propagator for `sum(host) >= minimum`.
pub(crate) fn propagate_at_least_hosts(
    minimum: usize,
    family: ConstraintFamily,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let hosts = Tally::of(&context, context.layout().host_flags());
    let reachable = hosts.num_true + hosts.unassigned.len();

    if reachable < minimum {
        return Err(Inconsistency::Violated(family));
    }

    if reachable == minimum {
        context.fix_all(hosts.unassigned, true)?;
    }

    Ok(())
}

/// Propagator for `sum(host) <= limit`.
pub(crate) fn propagate_at_most_hosts(
    limit: usize,
    family: ConstraintFamily,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let hosts = Tally::of(&context, context.layout().host_flags());

    if hosts.num_true > limit {
        return Err(Inconsistency::Violated(family));
    }

    if hosts.num_true == limit {
        context.fix_all(hosts.unassigned, false)?;
    }

    Ok(())
}
