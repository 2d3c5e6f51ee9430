#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestEngine;
use crate::model::Constraint;
use crate::model::ConstraintFamily;

/// Vessels 0 and 1 can host, 2 and 3 are guests.
fn two_guests() -> TestEngine {
    let mut engine = TestEngine::new(&[(1, 10), (1, 10), (1, 10), (1, 10)], 2);

    engine.set_host(2, false);
    engine.set_host(3, false);

    engine
}

#[test]
fn guests_which_met_are_kept_apart() {
    let mut engine = two_guests();

    engine.set_visit(0, 2, 0, true);
    engine.set_visit(0, 3, 0, true);
    engine.set_visit(1, 2, 1, true);

    let _ = engine
        .propagate(Constraint::BoundedMeetings {
            first: 2,
            second: 3,
        })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 3, 1), Some(false));
    assert_eq!(engine.visit(1, 3, 0), None);
}

#[test]
fn second_meeting_is_a_conflict() {
    let mut engine = two_guests();

    engine.set_visit(0, 2, 0, true);
    engine.set_visit(0, 3, 0, true);
    engine.set_visit(1, 2, 1, true);
    engine.set_visit(1, 3, 1, true);

    let result = engine.propagate(Constraint::BoundedMeetings {
        first: 2,
        second: 3,
    });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::BoundedMeetings))
    );
}

#[test]
fn guests_which_have_not_met_are_free() {
    let mut engine = two_guests();

    engine.set_visit(0, 2, 0, true);
    engine.set_visit(0, 3, 1, true);

    let _ = engine
        .propagate(Constraint::BoundedMeetings {
            first: 2,
            second: 3,
        })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 2, 1), None);
    assert_eq!(engine.visit(1, 3, 0), None);
}

#[test]
fn undecided_roles_are_not_constrained() {
    let mut engine = TestEngine::new(&[(1, 10), (1, 10), (1, 10), (1, 10)], 2);

    engine.set_visit(0, 2, 0, true);
    engine.set_visit(0, 3, 0, true);
    engine.set_visit(1, 2, 1, true);

    let _ = engine
        .propagate(Constraint::BoundedMeetings {
            first: 2,
            second: 3,
        })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 3, 1), None);
}
