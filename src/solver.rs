use std::sync::atomic::AtomicBool;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::info;

use crate::basic_types::StructuralError;
use crate::branching::value_selection::RoleValueOrder;
use crate::branching::IndependentVariableValueBrancher;
use crate::branching::InputOrder;
use crate::engine::incumbent::SharedIncumbent;
use crate::engine::search::SearchOutcome;
use crate::engine::search::SearchStatistics;
use crate::engine::search::SearchWorker;
use crate::engine::search::SubtreeQueue;
use crate::engine::termination::TerminationCondition;
use crate::instance::ProblemInstance;
use crate::model::Model;
use crate::options::SolverOptions;
use crate::print_regatta_assert_warning_message;
use crate::results::OptimisationResult;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// Finds the schedule with the most guests for a [`ProblemInstance`].
///
/// # Example
/// ```
/// use regatta::termination::Indefinite;
/// use regatta::OptimisationResult;
/// use regatta::ProblemInstance;
/// use regatta::Solver;
///
/// let instance = ProblemInstance::new([(5, 20), (5, 5), (5, 5)], 1).unwrap();
/// let mut solver = Solver::default();
///
/// let result = solver.solve(&instance, Indefinite).unwrap();
/// let OptimisationResult::Optimal(schedule) = result else {
///     panic!("the instance has a schedule")
/// };
/// assert_eq!(schedule.hosts(), &[0]);
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    options: SolverOptions,
    statistics: SearchStatistics,
    time_spent: Duration,
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Solver {
        Solver {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Maximise the number of guests.
    ///
    /// Every worker polls its own clone of `termination`; once one of them stops, all of them do.
    /// The schedule in the result is the best one found, whether or not the search finished.
    pub fn solve<T>(
        &mut self,
        instance: &ProblemInstance,
        termination: T,
    ) -> Result<OptimisationResult, StructuralError>
    where
        T: TerminationCondition + Clone + Send,
    {
        print_regatta_assert_warning_message!();

        let model = Model::with_implied_constraints(instance, self.options.implied_constraints)?;
        let started_at = Instant::now();

        let incumbent = SharedIncumbent::new();
        let stop = AtomicBool::new(false);
        let subtrees = SubtreeQueue::new(self.options.partition_depth, instance.num_vessels());
        let branching_order = model.branching_order();
        let num_workers = self.options.threads.max(1);

        debug!(
            "Solving {} vessels over {} slots with {} constraints, {num_workers} workers and {} subtrees",
            instance.num_vessels(),
            instance.slot_count(),
            model.constraints().len(),
            subtrees.num_subtrees()
        );

        let options = self.options;
        let reports: Vec<(SearchOutcome, SearchStatistics)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..num_workers)
                .map(|worker| {
                    let termination = termination.clone();
                    let (model, incumbent, stop, subtrees) = (&model, &incumbent, &stop, &subtrees);
                    let branching_order = &branching_order;

                    scope.spawn(move || {
                        let brancher = IndependentVariableValueBrancher::new(
                            InputOrder::new(branching_order),
                            RoleValueOrder::new(options.host_value_order, options.visit_value_order),
                        );
                        let mut search = SearchWorker::new(
                            model,
                            incumbent,
                            stop,
                            brancher,
                            termination,
                            options.host_value_order.first_value(),
                        );

                        let outcome = search.run(subtrees);
                        debug!("Worker {worker} finished: {outcome:?}");

                        (outcome, search.statistics())
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        self.time_spent = started_at.elapsed();
        self.statistics = SearchStatistics::default();
        for (_, statistics) in &reports {
            self.statistics += *statistics;
        }

        let exhausted = reports
            .iter()
            .all(|&(outcome, _)| outcome == SearchOutcome::Exhausted);

        let result = match (incumbent.into_schedule(), exhausted) {
            (Some(schedule), true) => OptimisationResult::Optimal(schedule),
            (Some(schedule), false) => OptimisationResult::Satisfiable(schedule),
            (None, true) => OptimisationResult::Unsatisfiable,
            (None, false) => OptimisationResult::Unknown,
        };

        info!(
            "Search {} after {} ms, best guest count: {:?}",
            if exhausted { "completed" } else { "stopped" },
            self.time_spent.as_millis(),
            result.guest_count()
        );

        Ok(result)
    }

    /// The counters of the last call to [`Solver::solve`], summed over all workers.
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    pub fn log_statistics(&self) {
        self.statistics.log();
        log_statistic("timeSpentInSolverMs", self.time_spent.as_millis());
        log_statistic_postfix();
    }
}
