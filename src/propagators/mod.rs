//! Contains the propagators which enforce the constraints of a [`Model`](crate::model::Model).
//!
//! Every [`Constraint`] variant is handled by one function in this module; [`propagate`] picks the
//! right one. A propagator reads the current domains through a [`PropagationContextMut`], fixes
//! the variables which can take only one value, and reports an
//! [`Inconsistency`](crate::basic_types::Inconsistency) when the constraint can no longer be
//! satisfied below the current node.

mod capacity;
mod host_count;
mod meetings;
mod occupancy;
mod pairing;

pub(crate) use capacity::*;
pub(crate) use host_count::*;
pub(crate) use meetings::*;
pub(crate) use occupancy::*;
pub(crate) use pairing::*;

use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::model::Constraint;
use crate::model::ConstraintFamily;
use crate::model::VariableId;

pub(crate) fn propagate(constraint: &Constraint, context: PropagationContextMut) -> PropagationStatus {
    match *constraint {
        Constraint::Capacity { slot, host } => propagate_capacity(slot, host, context),
        Constraint::NoSelfVisit { vessel } => propagate_no_self_visit(vessel, context),
        Constraint::HostOccupancy { vessel } => propagate_host_occupancy(vessel, context),
        Constraint::HostsStayPut { vessel } => propagate_hosts_stay_put(vessel, context),
        Constraint::GuestsMustVisit { vessel } => propagate_guests_must_visit(vessel, context),
        Constraint::ExactlyOnce { guest, host } => propagate_exactly_once(guest, host, context),
        Constraint::OneVisitPerSlot { slot, guest } => {
            propagate_one_visit_per_slot(slot, guest, context)
        }
        Constraint::BoundedMeetings { first, second } => {
            propagate_bounded_meetings(first, second, context)
        }
        Constraint::AtLeastOneHost => {
            propagate_at_least_hosts(1, ConstraintFamily::AtLeastOneHost, context)
        }
        Constraint::NotAllHosts => {
            let limit = context.layout().num_vessels() - 1;
            propagate_at_most_hosts(limit, ConstraintFamily::NotAllHosts, context)
        }
        Constraint::HostsWithinSlots => {
            let limit = context.layout().slot_count();
            propagate_at_most_hosts(limit, ConstraintFamily::HostsWithinSlots, context)
        }
    }
}

/// How many of a group of variables are true, and which are still unassigned.
#[derive(Debug, Default)]
struct Tally {
    num_true: usize,
    unassigned: Vec<VariableId>,
}

impl Tally {
    fn of(
        context: &PropagationContextMut,
        variables: impl IntoIterator<Item = VariableId>,
    ) -> Tally {
        let mut tally = Tally::default();

        for variable in variables {
            match context.value(variable) {
                Some(true) => tally.num_true += 1,
                Some(false) => {}
                None => tally.unassigned.push(variable),
            }
        }

        tally
    }

    /// No assignment of the remaining variables can make any of them true.
    fn all_false(&self) -> bool {
        self.num_true == 0 && self.unassigned.is_empty()
    }
}
