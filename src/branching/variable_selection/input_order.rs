use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the first variable which is not fixed given the order in
/// the provided list.
#[derive(Debug)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_fixed(variable))
            .copied()
    }
}
