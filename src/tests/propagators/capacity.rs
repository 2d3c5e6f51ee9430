#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestEngine;
use crate::model::Constraint;
use crate::model::ConstraintFamily;

#[test]
fn crews_exceeding_the_headroom_are_turned_away() {
    let mut engine = TestEngine::new(&[(5, 12), (4, 4), (6, 6), (3, 3)], 1);

    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::Capacity { slot: 0, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(0, 2, 0), Some(false));
    assert_eq!(engine.visit(0, 3, 0), None);
}

#[test]
fn overloaded_host_is_a_conflict() {
    let mut engine = TestEngine::new(&[(5, 12), (4, 4), (6, 6), (3, 3)], 1);

    engine.set_visit(0, 1, 0, true);
    engine.set_visit(0, 2, 0, true);

    let result = engine.propagate(Constraint::Capacity { slot: 0, host: 0 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::Capacity))
    );
}

#[test]
fn loads_beyond_u32_are_a_conflict() {
    let mut engine = TestEngine::new(&[(1, u32::MAX), (1 << 31, 1 << 31), (1 << 31, 1 << 31)], 1);

    engine.set_visit(0, 1, 0, true);
    engine.set_visit(0, 2, 0, true);

    let result = engine.propagate(Constraint::Capacity { slot: 0, host: 0 });

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::Capacity))
    );
}

#[test]
fn large_crews_are_turned_away_when_the_headroom_is_short() {
    let mut engine = TestEngine::new(&[(1, u32::MAX), (1 << 31, 1 << 31), (1 << 31, 1 << 31)], 1);

    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::Capacity { slot: 0, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(0, 2, 0), Some(false));
}

#[test]
fn other_slots_are_not_affected() {
    let mut engine = TestEngine::new(&[(5, 12), (4, 4), (6, 6), (3, 3)], 2);

    engine.set_visit(0, 1, 0, true);

    let _ = engine
        .propagate(Constraint::Capacity { slot: 1, host: 0 })
        .expect("Expected no error");

    assert_eq!(engine.visit(1, 2, 0), None);
}

#[test]
fn vessels_never_visit_themselves() {
    let mut engine = TestEngine::new(&[(2, 10), (2, 10)], 3);

    let _ = engine
        .propagate(Constraint::NoSelfVisit { vessel: 1 })
        .expect("Expected no error");

    for slot in 0..3 {
        assert_eq!(engine.visit(slot, 1, 1), Some(false));
        assert_eq!(engine.visit(slot, 0, 0), None);
    }
}
