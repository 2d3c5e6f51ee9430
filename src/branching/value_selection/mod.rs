//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait relies on [`ValueSelector::select_value`].
//!
//! The variables are boolean, so a value selector only decides which of the two values is tried
//! first.

mod role_value_order;

pub use role_value_order::RoleValueOrder;

use crate::branching::SelectionContext;
use crate::model::VariableId;

pub trait ValueSelector {
    /// The value to try first for the unfixed `variable`.
    fn select_value(&mut self, context: &SelectionContext, variable: VariableId) -> bool;
}

/// Which of the two values of a boolean variable is tried first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ValueOrder {
    #[default]
    FalseFirst,
    TrueFirst,
}

impl ValueOrder {
    pub fn first_value(self) -> bool {
        matches!(self, ValueOrder::TrueFirst)
    }
}

impl ValueSelector for ValueOrder {
    fn select_value(&mut self, _: &SelectionContext, _: VariableId) -> bool {
        self.first_value()
    }
}
