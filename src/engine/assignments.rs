use crate::basic_types::EmptyDomain;
use crate::model::VariableId;
use crate::regatta_assert_moderate;
use crate::regatta_assert_simple;

/// The domains of all boolean variables, with a trail to undo assignments when backtracking.
///
/// A variable is either unassigned (domain `{false, true}`) or fixed to one value. Every fixing is
/// recorded on the trail, grouped per decision level, so that backtracking restores exactly the
/// domains of an earlier node.
#[derive(Clone, Debug)]
pub(crate) struct Assignments {
    values: Vec<Option<bool>>,
    trail: Vec<VariableId>,
    /// `level_starts[i]` is the length of the trail when decision level `i + 1` was entered.
    level_starts: Vec<usize>,
}

impl Assignments {
    pub(crate) fn new(num_variables: usize) -> Assignments {
        Assignments {
            values: vec![None; num_variables],
            trail: Vec::new(),
            level_starts: Vec::new(),
        }
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<bool> {
        self.values[variable.index()]
    }

    pub(crate) fn is_fixed(&self, variable: VariableId) -> bool {
        self.values[variable.index()].is_some()
    }

    pub(crate) fn is_true(&self, variable: VariableId) -> bool {
        self.values[variable.index()] == Some(true)
    }

    pub(crate) fn is_false(&self, variable: VariableId) -> bool {
        self.values[variable.index()] == Some(false)
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.trail.len() == self.values.len()
    }

    /// Fix `variable` to `value`. Returns whether the domain changed.
    pub(crate) fn fix(&mut self, variable: VariableId, value: bool) -> Result<bool, EmptyDomain> {
        match self.values[variable.index()] {
            Some(current) if current == value => Ok(false),
            Some(_) => Err(EmptyDomain),
            None => {
                self.values[variable.index()] = Some(value);
                self.trail.push(variable);
                Ok(true)
            }
        }
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn trail_entry(&self, index: usize) -> VariableId {
        self.trail[index]
    }

    pub(crate) fn decision_level(&self) -> usize {
        self.level_starts.len()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.level_starts.push(self.trail.len());
    }

    /// Undo every assignment made on the current decision level, but stay on that level.
    pub(crate) fn clear_current_level(&mut self) {
        regatta_assert_simple!(
            self.decision_level() > 0,
            "the root level cannot be cleared"
        );

        let start = self.level_starts[self.level_starts.len() - 1];
        self.undo_until(start);
    }

    /// Undo assignments until `level` is the current decision level.
    pub(crate) fn backtrack(&mut self, level: usize) {
        regatta_assert_simple!(level <= self.decision_level());

        if level == self.decision_level() {
            return;
        }

        let start = self.level_starts[level];
        self.undo_until(start);
        self.level_starts.truncate(level);
    }

    fn undo_until(&mut self, trail_length: usize) {
        for variable in self.trail.drain(trail_length..) {
            self.values[variable.index()] = None;
        }

        regatta_assert_moderate!(self.trail.len() == trail_length);
    }
}
