use enumset::EnumSet;
use enumset::EnumSetType;

use super::VariableId;
use super::VariableLayout;
use crate::instance::ProblemInstance;

/// The families of constraints a schedule has to satisfy.
///
/// All families except [`ConstraintFamily::HostsWithinSlots`] are required. That last one is
/// implied by the others and only strengthens propagation.
#[derive(Debug, Hash, EnumSetType)]
pub enum ConstraintFamily {
    /// Own crew plus visiting crews fit on board, and nobody visits themselves.
    Capacity,
    /// Hosts receive at least one visit, other vessels never do.
    HostOccupancy,
    /// Hosts never leave their vessel.
    HostsStayPut,
    /// Every guest visits at least one host.
    GuestsMustVisit,
    /// Every guest visits every host exactly once.
    ExactlyOncePairing,
    /// A guest is on board of at most one host per slot.
    OneVisitPerSlot,
    /// Two guest crews meet at most once.
    BoundedMeetings,
    AtLeastOneHost,
    NotAllHosts,
    /// There are never more hosts than slots.
    HostsWithinSlots,
}

impl ConstraintFamily {
    /// The families which are implied by the required ones.
    pub fn implied() -> EnumSet<ConstraintFamily> {
        ConstraintFamily::HostsWithinSlots.into()
    }

    /// The families every accepted schedule is checked against.
    pub fn required() -> EnumSet<ConstraintFamily> {
        EnumSet::all() - ConstraintFamily::implied()
    }
}

/// A single constraint of the model, referring to the variables of a [`VariableLayout`].
///
/// The constraint is purely declarative; the engine dispatches on the variant to find the
/// propagator which enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// `crew(host) + sum(crew(g) * visit(slot, g, host)) <= capacity(host)`.
    Capacity { slot: usize, host: usize },
    /// `visit(t, vessel, vessel) = 0` in every slot.
    NoSelfVisit { vessel: usize },
    /// `host(vessel) -> sum(visit(_, _, vessel)) > 0` and
    /// `!host(vessel) -> sum(visit(_, _, vessel)) = 0`.
    HostOccupancy { vessel: usize },
    /// `host(vessel) -> sum(visit(_, vessel, _)) = 0`.
    HostsStayPut { vessel: usize },
    /// `!host(vessel) -> sum(visit(_, vessel, _)) > 0`.
    GuestsMustVisit { vessel: usize },
    /// `(!host(guest) & host(host)) -> sum(visit(_, guest, host)) = 1`.
    ExactlyOnce { guest: usize, host: usize },
    /// `!host(guest) -> sum(visit(slot, guest, _)) <= 1`.
    OneVisitPerSlot { slot: usize, guest: usize },
    /// `(!host(first) & !host(second)) -> sum(visit(t, first, h) * visit(t, second, h)) <= 1`.
    BoundedMeetings { first: usize, second: usize },
    /// `sum(host) >= 1`.
    AtLeastOneHost,
    /// `sum(host) <= n - 1`.
    NotAllHosts,
    /// `sum(host) <= slots`.
    HostsWithinSlots,
}

impl Constraint {
    pub fn family(&self) -> ConstraintFamily {
        match self {
            Constraint::Capacity { .. } | Constraint::NoSelfVisit { .. } => {
                ConstraintFamily::Capacity
            }
            Constraint::HostOccupancy { .. } => ConstraintFamily::HostOccupancy,
            Constraint::HostsStayPut { .. } => ConstraintFamily::HostsStayPut,
            Constraint::GuestsMustVisit { .. } => ConstraintFamily::GuestsMustVisit,
            Constraint::ExactlyOnce { .. } => ConstraintFamily::ExactlyOncePairing,
            Constraint::OneVisitPerSlot { .. } => ConstraintFamily::OneVisitPerSlot,
            Constraint::BoundedMeetings { .. } => ConstraintFamily::BoundedMeetings,
            Constraint::AtLeastOneHost => ConstraintFamily::AtLeastOneHost,
            Constraint::NotAllHosts => ConstraintFamily::NotAllHosts,
            Constraint::HostsWithinSlots => ConstraintFamily::HostsWithinSlots,
        }
    }

    /// The variables whose assignment can make this constraint propagate.
    pub fn scope(&self, layout: &VariableLayout) -> Vec<VariableId> {
        match *self {
            Constraint::Capacity { slot, host } => layout
                .visits_into_during(slot, host)
                .map(|(_, variable)| variable)
                .collect(),
            Constraint::NoSelfVisit { vessel } => (0..layout.slot_count())
                .map(|slot| layout.visit(slot, vessel, vessel))
                .collect(),
            Constraint::HostOccupancy { vessel } => std::iter::once(layout.host(vessel))
                .chain(layout.visits_into(vessel))
                .collect(),
            Constraint::HostsStayPut { vessel } | Constraint::GuestsMustVisit { vessel } => {
                std::iter::once(layout.host(vessel))
                    .chain(layout.visits_from(vessel))
                    .collect()
            }
            Constraint::ExactlyOnce { guest, host } => [layout.host(guest), layout.host(host)]
                .into_iter()
                .chain(layout.visits_between(guest, host))
                .collect(),
            Constraint::OneVisitPerSlot { slot, guest } => std::iter::once(layout.host(guest))
                .chain(
                    layout
                        .visits_from_during(slot, guest)
                        .map(|(_, variable)| variable),
                )
                .collect(),
            Constraint::BoundedMeetings { first, second } => {
                [layout.host(first), layout.host(second)]
                    .into_iter()
                    .chain(layout.visits_from(first))
                    .chain(layout.visits_from(second))
                    .collect()
            }
            Constraint::AtLeastOneHost
            | Constraint::NotAllHosts
            | Constraint::HostsWithinSlots => layout.host_flags().collect(),
        }
    }

    /// Evaluate the constraint on a complete assignment, given as a lookup from variable to value.
    pub fn is_satisfied(
        &self,
        instance: &ProblemInstance,
        layout: &VariableLayout,
        value: impl Fn(VariableId) -> bool,
    ) -> bool {
        let count = |variables: &mut dyn Iterator<Item = VariableId>| {
            variables.filter(|&variable| value(variable)).count()
        };
        let is_host = |vessel: usize| value(layout.host(vessel));

        match *self {
            Constraint::Capacity { slot, host } => {
                let visitors: u64 = layout
                    .visits_into_during(slot, host)
                    .filter(|&(_, variable)| value(variable))
                    .map(|(guest, _)| u64::from(instance.crew_size(guest)))
                    .sum();

                u64::from(instance.crew_size(host)) + visitors <= u64::from(instance.capacity(host))
            }
            Constraint::NoSelfVisit { vessel } => {
                (0..layout.slot_count()).all(|slot| !value(layout.visit(slot, vessel, vessel)))
            }
            Constraint::HostOccupancy { vessel } => {
                let received = count(&mut layout.visits_into(vessel));
                if is_host(vessel) {
                    received > 0
                } else {
                    received == 0
                }
            }
            Constraint::HostsStayPut { vessel } => {
                !is_host(vessel) || count(&mut layout.visits_from(vessel)) == 0
            }
            Constraint::GuestsMustVisit { vessel } => {
                is_host(vessel) || count(&mut layout.visits_from(vessel)) > 0
            }
            Constraint::ExactlyOnce { guest, host } => {
                is_host(guest)
                    || !is_host(host)
                    || count(&mut layout.visits_between(guest, host)) == 1
            }
            Constraint::OneVisitPerSlot { slot, guest } => {
                is_host(guest)
                    || count(
                        &mut layout
                            .visits_from_during(slot, guest)
                            .map(|(_, variable)| variable),
                    ) <= 1
            }
            Constraint::BoundedMeetings { first, second } => {
                if is_host(first) || is_host(second) {
                    return true;
                }

                let meetings = (0..layout.slot_count())
                    .flat_map(|slot| (0..layout.num_vessels()).map(move |host| (slot, host)))
                    .filter(|&(slot, host)| {
                        host != first
                            && host != second
                            && value(layout.visit(slot, first, host))
                            && value(layout.visit(slot, second, host))
                    })
                    .count();

                meetings <= 1
            }
            Constraint::AtLeastOneHost => count(&mut layout.host_flags()) >= 1,
            Constraint::NotAllHosts => count(&mut layout.host_flags()) < layout.num_vessels(),
            Constraint::HostsWithinSlots => {
                count(&mut layout.host_flags()) <= layout.slot_count()
            }
        }
    }
}
