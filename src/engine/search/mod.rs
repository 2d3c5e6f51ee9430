//! Branch-and-bound over the host and visit flags.
//!
//! A [`SearchWorker`] explores the subtrees it takes from a [`SubtreeQueue`] depth first. At
//! every node it first checks whether the node can still lead to a schedule with more guests
//! than the shared incumbent, then propagates, and then branches on the next unfixed variable.
//! Both values of a decision are explored; the second one only after the whole subtree below the
//! first was.

mod search_statistics;
mod subtree;

pub use search_statistics::SearchStatistics;
use subtree::Subtree;
pub(crate) use subtree::SubtreeQueue;

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use log::debug;
use log::trace;

use super::incumbent::SharedIncumbent;
use super::propagation::PropagationEngine;
use super::termination::TerminationCondition;
use super::Assignments;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::model::Model;
use crate::regatta_assert_extreme;
use crate::regatta_assert_simple;
use crate::results::Schedule;

/// How a worker finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// Every subtree the worker took was explored completely.
    Exhausted,
    /// The worker gave up before that, because a termination condition triggered.
    Stopped,
}

#[derive(Debug)]
pub(crate) struct SearchWorker<'a, B, T> {
    model: &'a Model,
    incumbent: &'a SharedIncumbent,
    /// Raised by the first worker which stops, so that the others follow.
    stop: &'a AtomicBool,
    brancher: B,
    termination: T,
    /// The host flag value which is explored first; subtrees are split along it.
    host_first_value: bool,
    assignments: Assignments,
    propagation: PropagationEngine,
    /// The decisions on the current branch, and whether the first value was already refuted.
    decisions: Vec<(Decision, bool)>,
    statistics: SearchStatistics,
}

impl<'a, B: Brancher, T: TerminationCondition> SearchWorker<'a, B, T> {
    pub(crate) fn new(
        model: &'a Model,
        incumbent: &'a SharedIncumbent,
        stop: &'a AtomicBool,
        brancher: B,
        termination: T,
        host_first_value: bool,
    ) -> Self {
        SearchWorker {
            model,
            incumbent,
            stop,
            brancher,
            termination,
            host_first_value,
            assignments: Assignments::new(model.num_variables()),
            propagation: PropagationEngine::new(model),
            decisions: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }

    pub(crate) fn statistics(&self) -> SearchStatistics {
        SearchStatistics {
            num_propagator_calls: self.propagation.num_propagator_calls(),
            ..self.statistics
        }
    }

    /// Explore subtrees until the queue is empty or the search is stopped.
    pub(crate) fn run(&mut self, subtrees: &SubtreeQueue) -> SearchOutcome {
        if self.should_stop() {
            return SearchOutcome::Stopped;
        }

        if let Err(inconsistency) = self
            .propagation
            .initialise_at_root(self.model, &mut self.assignments)
        {
            debug!("Root propagation detected {inconsistency:?}, no schedule exists");
            self.statistics.num_conflicts += 1;
            return SearchOutcome::Exhausted;
        }

        while let Some(subtree) = subtrees.pop() {
            debug!("Exploring subtree {}", subtree.index());

            let outcome = self.explore(subtree);

            self.decisions.clear();
            self.assignments.backtrack(0);
            self.propagation.synchronise(&self.assignments);

            if outcome == SearchOutcome::Stopped {
                debug!("Stopped in subtree {}", subtree.index());
                return SearchOutcome::Stopped;
            }

            self.statistics.num_subtrees += 1;
        }

        SearchOutcome::Exhausted
    }

    fn explore(&mut self, subtree: Subtree) -> SearchOutcome {
        let model = self.model;

        self.assignments.increase_decision_level();
        for (host_flag, value) in subtree.prefix(model.layout(), self.host_first_value) {
            if self.assignments.fix(host_flag, value).is_err() {
                trace!("Subtree {} is ruled out at the root", subtree.index());
                return SearchOutcome::Exhausted;
            }
        }

        loop {
            if self.should_stop() {
                return SearchOutcome::Stopped;
            }

            if self.propagate_node() {
                let context = SelectionContext::new(&self.assignments, model.layout());

                match self.brancher.next_decision(&context) {
                    Some(decision) => {
                        self.decide(decision);
                        continue;
                    }
                    None => self.record_solution(),
                }
            }

            if !self.next_branch() {
                return SearchOutcome::Exhausted;
            }
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }

        if self.termination.should_stop() {
            self.stop.store(true, Ordering::Relaxed);
            return true;
        }

        false
    }

    /// Returns whether the current node can still lead to a schedule which improves on the
    /// incumbent.
    fn propagate_node(&mut self) -> bool {
        if !self.within_bound() {
            self.statistics.num_pruned_by_bound += 1;
            return false;
        }

        self.propagate_objective();

        if let Err(inconsistency) = self.propagation.propagate(self.model, &mut self.assignments) {
            trace!("Conflict: {inconsistency:?}");
            self.statistics.num_conflicts += 1;
            return false;
        }

        if !self.within_bound() {
            self.statistics.num_pruned_by_bound += 1;
            return false;
        }

        true
    }

    fn num_fixed_hosts(&self) -> usize {
        self.model
            .layout()
            .host_flags()
            .filter(|&host_flag| self.assignments.is_true(host_flag))
            .count()
    }

    /// Every vessel which is not fixed as host could still be a guest, but at least one vessel
    /// hosts.
    fn within_bound(&self) -> bool {
        let num_vessels = self.model.instance().num_vessels();
        let optimistic = num_vessels - self.num_fixed_hosts().max(1);

        self.incumbent.would_improve(optimistic)
    }

    /// Once the number of hosts reaches the most an improving schedule can have, every vessel
    /// which is not fixed yet has to be a guest.
    fn propagate_objective(&mut self) {
        let Some(best) = self.incumbent.best_guest_count() else {
            return;
        };

        let num_vessels = self.model.instance().num_vessels();
        let max_hosts = num_vessels.saturating_sub(best + 1);
        if self.num_fixed_hosts() < max_hosts {
            return;
        }

        for host_flag in self.model.layout().host_flags() {
            if !self.assignments.is_fixed(host_flag) {
                let _ = self.assignments.fix(host_flag, false);
            }
        }
    }

    fn decide(&mut self, decision: Decision) {
        trace!(
            "Deciding {} = {}",
            self.model.layout().decode(decision.variable),
            decision.value
        );

        self.statistics.num_decisions += 1;
        self.termination.decision_has_been_made();

        self.assignments.increase_decision_level();
        self.decisions.push((decision, false));

        let fixed = self.assignments.fix(decision.variable, decision.value);
        regatta_assert_simple!(
            fixed == Ok(true),
            "the brancher selected a variable which is already fixed"
        );
    }

    /// Backtrack to the deepest decision whose second value was not explored yet, and explore
    /// it. Returns `false` once the subtree is exhausted.
    fn next_branch(&mut self) -> bool {
        while let Some((decision, refuted)) = self.decisions.pop() {
            if refuted {
                self.assignments
                    .backtrack(self.assignments.decision_level() - 1);
                continue;
            }

            self.assignments.clear_current_level();
            self.propagation.synchronise(&self.assignments);

            let _ = self.assignments.fix(decision.variable, !decision.value);
            self.decisions.push((decision, true));

            return true;
        }

        false
    }

    fn record_solution(&mut self) {
        let model = self.model;
        let assignments = &self.assignments;

        regatta_assert_simple!(assignments.is_complete());
        regatta_assert_extreme!(model.is_satisfied_by(|variable| assignments.is_true(variable)));

        let schedule = Schedule::from_assignment(model.layout(), |variable| {
            assignments.is_true(variable)
        });

        let violation = schedule.check(model.instance()).err();
        regatta_assert_simple!(
            violation.is_none(),
            "the search reached a schedule which breaks a constraint: {violation:?}"
        );

        self.statistics.num_solutions += 1;
        if self.incumbent.try_install(&schedule) {
            debug!("Found a schedule with {} guests", schedule.guest_count());
        }
    }
}
