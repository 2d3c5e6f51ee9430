use crate::engine::Assignments;
use crate::model::Variable;
use crate::model::VariableId;
use crate::model::VariableLayout;

/// A read-only view on the state of the search for the selectors.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
    layout: &'a VariableLayout,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments, layout: &'a VariableLayout) -> Self {
        SelectionContext {
            assignments,
            layout,
        }
    }

    pub fn is_fixed(&self, variable: VariableId) -> bool {
        self.assignments.is_fixed(variable)
    }

    pub fn value(&self, variable: VariableId) -> Option<bool> {
        self.assignments.value(variable)
    }

    pub fn decode(&self, variable: VariableId) -> Variable {
        self.layout.decode(variable)
    }
}
