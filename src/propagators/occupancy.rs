//! The propagators tying the host flag of a vessel to the visits it receives and makes.

use super::Tally;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::ConstraintFamily;

/// Propagator for `host(b) -> sum(visit(_, _, b)) > 0` and `!host(b) -> sum(visit(_, _, b)) = 0`.
pub(crate) fn propagate_host_occupancy(
    vessel: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let layout = context.layout();
    let host_flag = layout.host(vessel);
    let received = Tally::of(&context, layout.visits_into(vessel));

    if received.num_true > 0 {
        context.fix(host_flag, true)?;
    }

    match context.value(host_flag) {
        Some(false) => context.fix_all(received.unassigned, false)?,
        Some(true) if received.all_false() => {
            return Err(Inconsistency::Violated(ConstraintFamily::HostOccupancy));
        }
        Some(true) if received.num_true == 0 && received.unassigned.len() == 1 => {
            context.fix(received.unassigned[0], true)?;
        }
        Some(true) => {}
        None if received.all_false() => context.fix(host_flag, false)?,
        None => {}
    }

    Ok(())
}

/// Propagator for `host(b) -> sum(visit(_, b, _)) = 0`.
pub(crate) fn propagate_hosts_stay_put(
    vessel: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let layout = context.layout();
    let host_flag = layout.host(vessel);

    if layout
        .visits_from(vessel)
        .any(|variable| context.is_true(variable))
    {
        context.fix(host_flag, false)?;
    }

    if context.is_true(host_flag) {
        context.fix_all(layout.visits_from(vessel), false)?;
    }

    Ok(())
}

/// Propagator for `!host(b) -> sum(visit(_, b, _)) > 0`.
pub(crate) fn propagate_guests_must_visit(
    vessel: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let layout = context.layout();
    let host_flag = layout.host(vessel);
    let made = Tally::of(&context, layout.visits_from(vessel));

    if made.all_false() {
        // A vessel without any visit left can only be a host.
        return context
            .fix(host_flag, true)
            .map_err(|_| Inconsistency::Violated(ConstraintFamily::GuestsMustVisit));
    }

    if context.is_false(host_flag) && made.num_true == 0 && made.unassigned.len() == 1 {
        context.fix(made.unassigned[0], true)?;
    }

    Ok(())
}
