use crate::basic_types::EmptyDomain;
use crate::engine::Assignments;
use crate::instance::ProblemInstance;
use crate::model::Model;
use crate::model::VariableId;
use crate::model::VariableLayout;

/// The view a propagator gets on the current node: read access to the model, and the ability to
/// fix unassigned variables.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    model: &'a Model,
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(model: &'a Model, assignments: &'a mut Assignments) -> Self {
        PropagationContextMut { model, assignments }
    }

    pub(crate) fn instance(&self) -> &'a ProblemInstance {
        self.model.instance()
    }

    pub(crate) fn layout(&self) -> &'a VariableLayout {
        self.model.layout()
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<bool> {
        self.assignments.value(variable)
    }

    pub(crate) fn is_fixed(&self, variable: VariableId) -> bool {
        self.assignments.is_fixed(variable)
    }

    pub(crate) fn is_true(&self, variable: VariableId) -> bool {
        self.assignments.is_true(variable)
    }

    pub(crate) fn is_false(&self, variable: VariableId) -> bool {
        self.assignments.is_false(variable)
    }

    pub(crate) fn is_host(&self, vessel: usize) -> bool {
        self.is_true(self.layout().host(vessel))
    }

    pub(crate) fn is_guest(&self, vessel: usize) -> bool {
        self.is_false(self.layout().host(vessel))
    }

    /// Fix `variable` to `value`; fails if it is already fixed to the opposite value.
    pub(crate) fn fix(&mut self, variable: VariableId, value: bool) -> Result<(), EmptyDomain> {
        let _ = self.assignments.fix(variable, value)?;
        Ok(())
    }

    /// Fix every unassigned variable in `variables` to `value`.
    pub(crate) fn fix_all(
        &mut self,
        variables: impl IntoIterator<Item = VariableId>,
        value: bool,
    ) -> Result<(), EmptyDomain> {
        for variable in variables {
            self.fix(variable, value)?;
        }

        Ok(())
    }
}
