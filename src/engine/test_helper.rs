#![cfg(test)]
//! This module exposes helpers that aid testing of the propagators. The [`TestEngine`] allows
//! setting up specific scenarios under which to test a single constraint, or all of them at once.

use super::propagation::PropagationContextMut;
use super::propagation::PropagationEngine;
use super::Assignments;
use crate::basic_types::PropagationStatus;
use crate::instance::ProblemInstance;
use crate::model::Constraint;
use crate::model::Model;
use crate::model::VariableId;
use crate::model::VariableLayout;
use crate::propagators;

/// The model of a small fleet together with a set of domains, which can be used to test
/// propagators.
#[derive(Debug)]
pub(crate) struct TestEngine {
    model: Model,
    assignments: Assignments,
}

impl TestEngine {
    /// A fleet of vessels given as `(crew size, capacity)`.
    pub(crate) fn new(vessels: &[(u32, u32)], slot_count: usize) -> TestEngine {
        let instance =
            ProblemInstance::new(vessels.iter().copied(), slot_count).expect("valid instance");
        let model = Model::new(&instance).expect("valid model");
        let assignments = Assignments::new(model.num_variables());

        TestEngine { model, assignments }
    }

    pub(crate) fn layout(&self) -> VariableLayout {
        *self.model.layout()
    }

    pub(crate) fn set(&mut self, variable: VariableId, value: bool) {
        let _ = self
            .assignments
            .fix(variable, value)
            .expect("the variable is not fixed to the opposite value");
    }

    pub(crate) fn set_host(&mut self, vessel: usize, value: bool) {
        self.set(self.layout().host(vessel), value);
    }

    pub(crate) fn set_visit(&mut self, slot: usize, guest: usize, host: usize, value: bool) {
        self.set(self.layout().visit(slot, guest, host), value);
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<bool> {
        self.assignments.value(variable)
    }

    pub(crate) fn host(&self, vessel: usize) -> Option<bool> {
        self.value(self.layout().host(vessel))
    }

    pub(crate) fn visit(&self, slot: usize, guest: usize, host: usize) -> Option<bool> {
        self.value(self.layout().visit(slot, guest, host))
    }

    /// Run the propagator of a single constraint once.
    pub(crate) fn propagate(&mut self, constraint: Constraint) -> PropagationStatus {
        let context = PropagationContextMut::new(&self.model, &mut self.assignments);
        propagators::propagate(&constraint, context)
    }

    /// Run all propagators of the model to a fixed point.
    pub(crate) fn propagate_all(&mut self) -> PropagationStatus {
        let mut engine = PropagationEngine::new(&self.model);
        engine.initialise_at_root(&self.model, &mut self.assignments)
    }
}
