//! Translates a [`ProblemInstance`] into boolean decision variables and a declarative set of
//! [`Constraint`]s. Nothing in here knows how the constraints are enforced; that is up to the
//! propagators in [`crate::propagators`] and the search in [`crate::engine`].

mod constraint;
mod variables;

pub use constraint::Constraint;
pub use constraint::ConstraintFamily;
pub use variables::Variable;
pub use variables::VariableId;
pub use variables::VariableLayout;

use enumset::EnumSet;
use log::warn;

use crate::basic_types::StructuralError;
use crate::instance::ProblemInstance;

/// The variables and constraints describing one scheduling problem.
#[derive(Clone, Debug)]
pub struct Model {
    instance: ProblemInstance,
    layout: VariableLayout,
    constraints: Vec<Constraint>,
}

impl Model {
    /// Build the model with all required constraints and all implied constraints.
    pub fn new(instance: &ProblemInstance) -> Result<Model, StructuralError> {
        Model::with_implied_constraints(instance, ConstraintFamily::implied())
    }

    /// Build the model with all required constraints and the selected implied constraints.
    pub fn with_implied_constraints(
        instance: &ProblemInstance,
        implied: EnumSet<ConstraintFamily>,
    ) -> Result<Model, StructuralError> {
        if instance.slot_count() < 1 {
            return Err(StructuralError::NoSlots);
        }

        let num_vessels = instance.num_vessels();
        if num_vessels < 2 {
            return Err(StructuralError::TooFewVessels {
                vessels: num_vessels,
            });
        }

        let ignored = implied - ConstraintFamily::implied();
        if !ignored.is_empty() {
            warn!("Ignoring {ignored:?} as implied constraints, these families are always posted");
        }

        let slots = instance.slot_count();
        let mut constraints = Vec::new();

        for slot in 0..slots {
            constraints.extend((0..num_vessels).map(|host| Constraint::Capacity { slot, host }));
        }

        for vessel in 0..num_vessels {
            constraints.push(Constraint::NoSelfVisit { vessel });
            constraints.push(Constraint::HostOccupancy { vessel });
            constraints.push(Constraint::HostsStayPut { vessel });
            constraints.push(Constraint::GuestsMustVisit { vessel });
        }

        for guest in 0..num_vessels {
            constraints.extend(
                (0..num_vessels)
                    .filter(|&host| host != guest)
                    .map(|host| Constraint::ExactlyOnce { guest, host }),
            );
        }

        for slot in 0..slots {
            constraints
                .extend((0..num_vessels).map(|guest| Constraint::OneVisitPerSlot { slot, guest }));
        }

        for first in 0..num_vessels {
            constraints.extend(
                (first + 1..num_vessels)
                    .map(|second| Constraint::BoundedMeetings { first, second }),
            );
        }

        constraints.push(Constraint::AtLeastOneHost);
        constraints.push(Constraint::NotAllHosts);

        if implied.contains(ConstraintFamily::HostsWithinSlots) {
            constraints.push(Constraint::HostsWithinSlots);
        }

        Ok(Model {
            instance: instance.clone(),
            layout: VariableLayout::new(num_vessels, slots),
            constraints,
        })
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn layout(&self) -> &VariableLayout {
        &self.layout
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.layout.num_variables()
    }

    /// The order in which the search branches: host flags by vessel index, then the visit flags
    /// in `(slot, guest, host)` lexicographic order.
    pub fn branching_order(&self) -> Vec<VariableId> {
        self.layout
            .host_flags()
            .chain(self.layout.visits())
            .collect()
    }

    /// Whether every constraint holds under the complete assignment `value`.
    pub fn is_satisfied_by(&self, value: impl Fn(VariableId) -> bool) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied(&self.instance, &self.layout, &value))
    }
}
