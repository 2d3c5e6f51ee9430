use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::ConstraintFamily;

/// Propagator for
/// `(!host(first) & !host(second)) -> sum(visit(t, first, h) * visit(t, second, h)) <= 1`.
///
/// Counts the `(slot, host)` combinations where both guests are confirmed on board. Once they have
/// met, every other combination where one of them is confirmed forbids the other from joining.
pub(crate) fn propagate_bounded_meetings(
    first: usize,
    second: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    if !(context.is_guest(first) && context.is_guest(second)) {
        return Ok(());
    }

    let layout = context.layout();
    let rendezvous = move || {
        (0..layout.slot_count()).flat_map(move |slot| {
            (0..layout.num_vessels())
                .filter(move |&host| host != first && host != second)
                .map(move |host| {
                    (
                        layout.visit(slot, first, host),
                        layout.visit(slot, second, host),
                    )
                })
        })
    };

    let mut met_at = None;
    for (visit_first, visit_second) in rendezvous() {
        if context.is_true(visit_first) && context.is_true(visit_second) {
            if met_at.is_some() {
                return Err(Inconsistency::Violated(ConstraintFamily::BoundedMeetings));
            }

            met_at = Some(visit_first);
        }
    }

    let Some(met_at) = met_at else {
        return Ok(());
    };

    for (visit_first, visit_second) in rendezvous() {
        if visit_first == met_at {
            continue;
        }

        if context.is_true(visit_first) {
            context.fix(visit_second, false)?;
        } else if context.is_true(visit_second) {
            context.fix(visit_first, false)?;
        }
    }

    Ok(())
}
