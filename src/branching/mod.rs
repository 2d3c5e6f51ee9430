//! Decides where the search branches next. A [`Brancher`] combines a [`VariableSelector`], which
//! picks the next unfixed variable, with a [`ValueSelector`], which picks the value to try first
//! for it. The other value is tried when the first one is refuted.

mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use value_selection::ValueOrder;
pub use value_selection::ValueSelector;
pub use variable_selection::InputOrder;
pub use variable_selection::VariableSelector;

use crate::model::VariableId;

/// The first branch to explore for a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub variable: VariableId,
    pub value: bool,
}

pub trait Brancher {
    /// The next decision, or `None` if every variable is fixed.
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Decision>;
}

/// A [`Brancher`] which selects the variable and its value independently of each other.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<VarSel, ValSel> {
    variable_selector: VarSel,
    value_selector: ValSel,
}

impl<VarSel, ValSel> IndependentVariableValueBrancher<VarSel, ValSel> {
    pub fn new(variable_selector: VarSel, value_selector: ValSel) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VarSel: VariableSelector, ValSel: ValueSelector> Brancher
    for IndependentVariableValueBrancher<VarSel, ValSel>
{
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Decision> {
        let variable = self.variable_selector.select_variable(context)?;
        let value = self.value_selector.select_value(context, variable);

        Some(Decision { variable, value })
    }
}
