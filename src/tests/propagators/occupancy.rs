#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestEngine;
use crate::model::Constraint;
use crate::model::ConstraintFamily;

fn three_vessels() -> TestEngine {
    TestEngine::new(&[(2, 10), (2, 10), (2, 10)], 2)
}

#[test]
fn receiving_a_visit_makes_a_host() {
    let mut engine = three_vessels();

    engine.set_visit(1, 2, 0, true);

    let _ = engine
        .propagate(Constraint::HostOccupancy { vessel: 0 })
        .expect("Expected no error");

    assert_eq!(engine.host(0), Some(true));
}

#[test]
fn non_hosts_receive_nobody() {
    let mut engine = three_vessels();

    engine.set_host(1, false);

    let _ = engine
        .propagate(Constraint::HostOccupancy { vessel: 1 })
        .expect("Expected no error");

    for slot in 0..2 {
        assert_eq!(engine.visit(slot, 0, 1), Some(false));
        assert_eq!(engine.visit(slot, 2, 1), Some(false));
    }
}

#[test]
fn host_without_possible_visitors_is_a_conflict() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    for slot in 0..2 {
        engine.set_visit(slot, 1, 0, false);
        engine.set_visit(slot, 2, 0, false);
    }

    let result = engine.propagate(Constraint::HostOccupancy { vessel: 0 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::HostOccupancy))
    );
}

#[test]
fn last_possible_visitor_is_forced() {
    let mut engine = three_vessels();

    engine.set_host(0, true);
    engine.set_visit(0, 1, 0, false);
    engine.set_visit(1, 1, 0, false);
    engine.set_visit(0, 2, 0, false);

    let _ = engine
        .propagate(Constraint::HostOccupancy { vessel: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 2, 0), Some(true));
}

#[test]
fn vessel_without_visitors_is_no_host() {
    let mut engine = three_vessels();

    for slot in 0..2 {
        engine.set_visit(slot, 0, 2, false);
        engine.set_visit(slot, 1, 2, false);
    }

    let _ = engine
        .propagate(Constraint::HostOccupancy { vessel: 2 })
        .expect("Expected no error");

    assert_eq!(engine.host(2), Some(false));
}

#[test]
fn hosts_stay_put() {
    let mut engine = three_vessels();

    engine.set_host(0, true);

    let _ = engine
        .propagate(Constraint::HostsStayPut { vessel: 0 })
        .expect("Expected no error");

    for slot in 0..2 {
        assert_eq!(engine.visit(slot, 0, 1), Some(false));
        assert_eq!(engine.visit(slot, 0, 2), Some(false));
    }
}

#[test]
fn visiting_vessel_is_no_host() {
    let mut engine = three_vessels();

    engine.set_visit(0, 1, 2, true);

    let _ = engine
        .propagate(Constraint::HostsStayPut { vessel: 1 })
        .expect("Expected no error");

    assert_eq!(engine.host(1), Some(false));
}

#[test]
fn vessel_which_cannot_visit_must_host() {
    let mut engine = three_vessels();

    for slot in 0..2 {
        engine.set_visit(slot, 1, 0, false);
        engine.set_visit(slot, 1, 2, false);
    }

    let _ = engine
        .propagate(Constraint::GuestsMustVisit { vessel: 1 })
        .expect("Expected no error");

    assert_eq!(engine.host(1), Some(true));
}

#[test]
fn guest_which_cannot_visit_is_a_conflict() {
    let mut engine = three_vessels();

    engine.set_host(1, false);
    for slot in 0..2 {
        engine.set_visit(slot, 1, 0, false);
        engine.set_visit(slot, 1, 2, false);
    }

    let result = engine.propagate(Constraint::GuestsMustVisit { vessel: 1 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::GuestsMustVisit))
    );
}

#[test]
fn guest_with_one_option_left_takes_it() {
    let mut engine = three_vessels();

    engine.set_host(1, false);
    engine.set_visit(0, 1, 0, false);
    engine.set_visit(1, 1, 0, false);
    engine.set_visit(0, 1, 2, false);

    let _ = engine
        .propagate(Constraint::GuestsMustVisit { vessel: 1 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 1, 2), Some(true));
}
