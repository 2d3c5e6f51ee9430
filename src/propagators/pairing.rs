//! Propagators on the visits of one guest: every host exactly once, one host per slot.

use super::Tally;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::ConstraintFamily;

/// Propagator for `(!host(guest) & host(host)) -> sum(visit(_, guest, host)) = 1`.
///
/// Once the roles are known this is an exactly-one constraint over the slots. Before that, a pair
/// whose visits can no longer sum to one forbids the roles from becoming guest and host.
pub(crate) fn propagate_exactly_once(
    guest: usize,
    host: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let layout = context.layout();
    let visits = Tally::of(&context, layout.visits_between(guest, host));
    let guest_is_guest = context.is_guest(guest);
    let host_is_host = context.is_host(host);

    let cannot_be_one = visits.num_true > 1 || visits.all_false();
    if cannot_be_one {
        if guest_is_guest && host_is_host {
            return Err(Inconsistency::Violated(ConstraintFamily::ExactlyOncePairing));
        }

        if guest_is_guest {
            context.fix(layout.host(host), false)?;
        }

        if host_is_host {
            context.fix(layout.host(guest), true)?;
        }

        return Ok(());
    }

    if guest_is_guest && host_is_host {
        if visits.num_true == 1 {
            context.fix_all(visits.unassigned, false)?;
        } else if visits.unassigned.len() == 1 {
            context.fix(visits.unassigned[0], true)?;
        }
    }

    Ok(())
}

/// Propagator for `!host(guest) -> sum(visit(slot, guest, _)) <= 1`.
///
/// As soon as the guest is known to be on board of one host, it is removed from all others.
pub(crate) fn propagate_one_visit_per_slot(
    slot: usize,
    guest: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    if !context.is_guest(guest) {
        return Ok(());
    }

    let layout = context.layout();
    let visits = Tally::of(
        &context,
        layout
            .visits_from_during(slot, guest)
            .map(|(_, variable)| variable),
    );

    match visits.num_true {
        0 => Ok(()),
        1 => Ok(context.fix_all(visits.unassigned, false)?),
        _ => Err(Inconsistency::Violated(ConstraintFamily::OneVisitPerSlot)),
    }
}
