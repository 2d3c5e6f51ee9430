//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait relies on [`VariableSelector::select_variable`].
//!
//! A [`VariableSelector`] should only select variables which are not yet fixed.

mod input_order;

pub use input_order::InputOrder;

use crate::branching::SelectionContext;
use crate::model::VariableId;

pub trait VariableSelector {
    /// Determines which variable to select next, if there are any left to branch on.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;
}
