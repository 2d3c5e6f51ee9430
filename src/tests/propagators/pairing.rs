#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestEngine;
use crate::model::Constraint;
use crate::model::ConstraintFamily;

fn three_vessels() -> TestEngine {
    TestEngine::new(&[(2, 10), (2, 10), (2, 10)], 2)
}

#[test]
fn last_open_slot_is_forced() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, false);

    let _ = engine
        .propagate(Constraint::ExactlyOnce { guest: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 1, 0), Some(true));
}

#[test]
fn a_pair_meets_only_once() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::ExactlyOnce { guest: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 1, 0), Some(false));
}

#[test]
fn repeated_visit_is_a_conflict() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, true);
    engine.set_visit(1, 1, 0, true);

    let result = engine.propagate(Constraint::ExactlyOnce { guest: 1, host: 0 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::ExactlyOncePairing))
    );
}

#[test]
fn unreachable_host_is_no_host_for_a_guest() {
    let mut engine = three_vessels();

    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, false);
    engine.set_visit(1, 1, 0, false);

    let _ = engine
        .propagate(Constraint::ExactlyOnce { guest: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.host(0), Some(false));
}

#[test]
fn vessel_which_cannot_visit_a_host_is_a_host() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    engine.set_visit(0, 1, 0, false);
    engine.set_visit(1, 1, 0, false);

    let _ = engine
        .propagate(Constraint::ExactlyOnce { guest: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.host(1), Some(true));
}

#[test]
fn undecided_roles_leave_visits_open() {
    let mut engine = three_vessels();

    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::ExactlyOnce { guest: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 1, 0), None);
    assert_eq!(engine.host(0), None);
    assert_eq!(engine.host(1), None);
}

#[test]
fn guest_is_at_one_host_per_slot() {
    let mut engine = three_vessels();

    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::OneVisitPerSlot { slot: 0, guest: 1 })
        .expect("Expected no error");

    assert_eq!(engine.visit(0, 1, 2), Some(false));
    assert_eq!(engine.visit(1, 1, 2), None);
}

#[test]
fn guest_at_two_hosts_is_a_conflict() {
    let mut engine = three_vessels();

    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, true);
    engine.set_visit(0, 1, 2, true);

    let result = engine.propagate(Constraint::OneVisitPerSlot { slot: 0, guest: 1 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::OneVisitPerSlot))
    );
}
