use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::ConstraintFamily;

/// Propagator for `crew(host) + sum(crew(g) * visit(slot, g, host)) <= capacity(host)`.
///
/// The crews of the confirmed visitors are added to the host crew; every visitor that is still
/// undecided and whose crew does not fit in the remaining headroom is turned away.
pub(crate) fn propagate_capacity(
    slot: usize,
    host: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let instance = context.instance();
    let layout = context.layout();

    // Crew sums can exceed `u32::MAX`.
    let load = u64::from(instance.crew_size(host))
        + layout
            .visits_into_during(slot, host)
            .filter(|&(_, variable)| context.is_true(variable))
            .map(|(guest, _)| u64::from(instance.crew_size(guest)))
            .sum::<u64>();
    let capacity = u64::from(instance.capacity(host));

    if load > capacity {
        return Err(Inconsistency::Violated(ConstraintFamily::Capacity));
    }

    let headroom = capacity - load;

    for (guest, variable) in layout.visits_into_during(slot, host) {
        if !context.is_fixed(variable) && u64::from(instance.crew_size(guest)) > headroom {
            context.fix(variable, false)?;
        }
    }

    Ok(())
}

/// A vessel never visits itself.
pub(crate) fn propagate_no_self_visit(
    vessel: usize,
    mut context: PropagationContextMut,
) -> PropagationStatus {
    let layout = context.layout();

    context.fix_all(
        (0..layout.slot_count()).map(|slot| layout.visit(slot, vessel, vessel)),
        false,
    )?;

    Ok(())
}
