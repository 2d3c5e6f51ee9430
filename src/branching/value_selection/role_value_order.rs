use crate::branching::SelectionContext;
use crate::branching::ValueOrder;
use crate::branching::ValueSelector;
use crate::model::Variable;
use crate::model::VariableId;

/// A [`ValueSelector`] with one [`ValueOrder`] for host flags and another for visit flags.
#[derive(Clone, Copy, Debug)]
pub struct RoleValueOrder {
    host: ValueOrder,
    visit: ValueOrder,
}

impl RoleValueOrder {
    pub fn new(host: ValueOrder, visit: ValueOrder) -> Self {
        RoleValueOrder { host, visit }
    }
}

impl ValueSelector for RoleValueOrder {
    fn select_value(&mut self, context: &SelectionContext, variable: VariableId) -> bool {
        match context.decode(variable) {
            Variable::Host { .. } => self.host.first_value(),
            Variable::Visit { .. } => self.visit.first_value(),
        }
    }
}
