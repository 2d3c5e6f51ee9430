#![cfg(test)]

use std::time::Duration;

use enumset::EnumSet;

use crate::branching::ValueOrder;
use crate::engine::termination::Cancellation;
use crate::engine::termination::DecisionBudget;
use crate::engine::termination::Indefinite;
use crate::engine::termination::TerminationCondition;
use crate::engine::termination::TimeBudget;
use crate::instance::InstanceGenerator;
use crate::instance::ProblemInstance;
use crate::options::SolverOptions;
use crate::results::OptimisationResult;
use crate::solver::Solver;

/// Small fleets with room for several guests per host, mostly over two slots so that a second host
/// can take the guests the first one has no room for.
fn fleets() -> Vec<ProblemInstance> {
    let mut generator = InstanceGenerator::new(42)
        .with_max_crew_size(6)
        .with_capacity_multiplier(4);

    (4..=6)
        .flat_map(|vessels| [(vessels, 1), (vessels, 2), (vessels, 2)])
        .map(|(vessels, slots)| generator.generate(vessels, slots).expect("valid instance"))
        .collect()
}

fn solve(
    instance: &ProblemInstance,
    options: SolverOptions,
    termination: impl TerminationCondition + Clone + Send,
) -> OptimisationResult {
    let result = Solver::with_options(options)
        .solve(instance, termination)
        .expect("valid model");

    if let Some(schedule) = result.schedule() {
        assert_eq!(schedule.check(instance), Ok(()));

        let hosts = schedule.host_count();
        assert!(hosts >= 1 && hosts < instance.num_vessels());
        assert!(schedule.guests().all(|guest| !schedule.is_host(guest)));
    }

    result
}

fn optimum(instance: &ProblemInstance) -> Option<usize> {
    let result = solve(instance, SolverOptions::default(), Indefinite);
    assert!(result.is_proven());

    result.guest_count()
}

#[test]
fn exhaustive_search_is_proven() {
    for instance in fleets() {
        let result = solve(&instance, SolverOptions::default(), Indefinite);

        assert!(matches!(
            result,
            OptimisationResult::Optimal(_) | OptimisationResult::Unsatisfiable
        ));
    }
}

#[test]
fn solving_twice_gives_the_same_optimum() {
    for instance in fleets() {
        assert_eq!(optimum(&instance), optimum(&instance));
    }
}

#[test]
fn more_capacity_never_hurts() {
    for instance in fleets() {
        let before = optimum(&instance);

        for vessel in 0..instance.num_vessels() {
            let roomier = instance
                .with_capacity(vessel, instance.capacity(vessel) + 10)
                .expect("valid instance");

            assert!(optimum(&roomier) >= before);
        }
    }
}

#[test]
fn parallel_search_agrees_with_sequential_search() {
    for instance in fleets() {
        let expected = optimum(&instance);

        for (threads, partition_depth) in [(2, 1), (4, 3), (3, 6)] {
            let options = SolverOptions {
                threads,
                partition_depth,
                ..Default::default()
            };
            let result = solve(&instance, options, Indefinite);

            assert!(result.is_proven());
            assert_eq!(result.guest_count(), expected);
        }
    }
}

#[test]
fn value_orders_do_not_change_the_optimum() {
    for instance in fleets() {
        let expected = optimum(&instance);

        for (host_value_order, visit_value_order) in [
            (ValueOrder::TrueFirst, ValueOrder::TrueFirst),
            (ValueOrder::FalseFirst, ValueOrder::FalseFirst),
            (ValueOrder::TrueFirst, ValueOrder::FalseFirst),
        ] {
            let options = SolverOptions {
                host_value_order,
                visit_value_order,
                ..Default::default()
            };

            assert_eq!(solve(&instance, options, Indefinite).guest_count(), expected);
        }
    }
}

#[test]
fn implied_constraints_do_not_change_the_optimum() {
    for instance in fleets() {
        let options = SolverOptions {
            implied_constraints: EnumSet::empty(),
            ..Default::default()
        };

        assert_eq!(
            solve(&instance, options, Indefinite).guest_count(),
            optimum(&instance)
        );
    }
}

#[test]
fn cancelled_search_is_not_proven() {
    let instance = InstanceGenerator::new(3)
        .generate(6, 2)
        .expect("valid instance");

    let cancellation = Cancellation::new();
    cancellation.cancel();

    let result = solve(&instance, SolverOptions::default(), cancellation);

    assert!(matches!(result, OptimisationResult::Unknown));
    assert!(!result.is_proven());
}

#[test]
fn expired_time_budget_is_not_proven() {
    let instance = InstanceGenerator::new(3)
        .generate(6, 2)
        .expect("valid instance");

    let result = solve(
        &instance,
        SolverOptions::default(),
        TimeBudget::starting_now(Duration::ZERO),
    );

    assert!(matches!(result, OptimisationResult::Unknown));
}

#[test]
fn search_stopped_after_a_schedule_returns_it_unproven() {
    // Trying hosts first finds the two-host optimum before the single-host fleets are refuted,
    // which takes further decisions.
    let instance =
        ProblemInstance::new([(1, 2), (1, 2), (1, 1), (1, 1)], 2).expect("valid instance");
    let options = SolverOptions {
        host_value_order: ValueOrder::TrueFirst,
        ..Default::default()
    };

    let mut solver = Solver::with_options(options);
    let complete = solver.solve(&instance, Indefinite).expect("valid model");
    assert!(complete.is_proven_optimal());

    let num_decisions = solver.statistics().num_decisions;
    assert!(num_decisions > 0);

    let result = solve(&instance, options, DecisionBudget::new(num_decisions));

    let OptimisationResult::Satisfiable(ref schedule) = result else {
        panic!("expected an unproven schedule, got {result:?}");
    };
    assert!(!result.is_proven());
    assert_eq!(schedule.check(&instance), Ok(()));
    assert!(result.guest_count() <= complete.guest_count());
}

#[test]
fn interrupted_search_never_beats_the_optimum() {
    for instance in fleets() {
        let expected = optimum(&instance);

        for budget in [1, 3, 10, 30] {
            let result = solve(&instance, SolverOptions::default(), DecisionBudget::new(budget));

            if result.is_proven() {
                assert_eq!(result.guest_count(), expected);
            }
            assert!(result.guest_count() <= expected);
        }
    }
}
