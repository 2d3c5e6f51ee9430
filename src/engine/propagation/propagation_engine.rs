use std::collections::VecDeque;

use log::trace;

use super::PropagationContextMut;
use crate::basic_types::PropagationStatus;
use crate::engine::Assignments;
use crate::model::Model;
use crate::propagators;
use crate::regatta_assert_moderate;

/// Runs the propagators of a [`Model`] to a fixed point.
///
/// Each constraint watches the variables in its scope; whenever one of those is fixed, the
/// constraint is queued again. The engine remembers how much of the trail it has already seen, so
/// a call after new decisions only wakes up the constraints affected by them.
#[derive(Debug)]
pub(crate) struct PropagationEngine {
    /// For every variable, the indices of the constraints which watch it.
    watch_list: Vec<Vec<usize>>,
    queue: VecDeque<usize>,
    enqueued: Vec<bool>,
    /// The first trail entry whose watchers have not been queued yet.
    next_trail_entry: usize,
    num_propagator_calls: u64,
}

impl PropagationEngine {
    pub(crate) fn new(model: &Model) -> PropagationEngine {
        let mut watch_list = vec![Vec::new(); model.num_variables()];

        for (index, constraint) in model.constraints().iter().enumerate() {
            for variable in constraint.scope(model.layout()) {
                watch_list[variable.index()].push(index);
            }
        }

        PropagationEngine {
            watch_list,
            queue: VecDeque::with_capacity(model.constraints().len()),
            enqueued: vec![false; model.constraints().len()],
            next_trail_entry: 0,
            num_propagator_calls: 0,
        }
    }

    pub(crate) fn num_propagator_calls(&self) -> u64 {
        self.num_propagator_calls
    }

    /// Queue every constraint and propagate. Constraints such as the ban on self-visits only
    /// propagate here, since none of their variables will ever be fixed by a decision.
    pub(crate) fn initialise_at_root(
        &mut self,
        model: &Model,
        assignments: &mut Assignments,
    ) -> PropagationStatus {
        regatta_assert_moderate!(assignments.decision_level() == 0);

        for index in 0..model.constraints().len() {
            self.enqueue(index);
        }

        self.propagate(model, assignments)
    }

    /// Propagate until a fixed point is reached or a conflict is found.
    pub(crate) fn propagate(
        &mut self,
        model: &Model,
        assignments: &mut Assignments,
    ) -> PropagationStatus {
        loop {
            self.notify_watchers(assignments);

            let Some(index) = self.queue.pop_front() else {
                return Ok(());
            };
            self.enqueued[index] = false;
            self.num_propagator_calls += 1;

            let constraint = &model.constraints()[index];
            let context = PropagationContextMut::new(model, assignments);

            if let Err(inconsistency) = propagators::propagate(constraint, context) {
                trace!("{constraint:?} detected {inconsistency:?}");
                self.clear_queue();
                return Err(inconsistency);
            }
        }
    }

    /// Must be called after `assignments` backtracked, so that removed trail entries are not
    /// skipped when they are fixed again.
    pub(crate) fn synchronise(&mut self, assignments: &Assignments) {
        self.next_trail_entry = self.next_trail_entry.min(assignments.num_trail_entries());
        self.clear_queue();
    }

    fn notify_watchers(&mut self, assignments: &Assignments) {
        while self.next_trail_entry < assignments.num_trail_entries() {
            let variable = assignments.trail_entry(self.next_trail_entry);
            self.next_trail_entry += 1;

            for watcher in 0..self.watch_list[variable.index()].len() {
                let index = self.watch_list[variable.index()][watcher];
                self.enqueue(index);
            }
        }
    }

    fn enqueue(&mut self, index: usize) {
        if !self.enqueued[index] {
            self.enqueued[index] = true;
            self.queue.push_back(index);
        }
    }

    fn clear_queue(&mut self) {
        for index in self.queue.drain(..) {
            self.enqueued[index] = false;
        }
    }
}
