#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestEngine;
use crate::model::Constraint;
use crate::model::ConstraintFamily;

fn four_vessels(slots: usize) -> TestEngine {
    TestEngine::new(&[(1, 10), (1, 10), (1, 10), (1, 10)], slots)
}

#[test]
fn someone_has_to_stay_a_guest() {
    let mut engine = four_vessels(3);

    engine.set_host(0, true);
    engine.set_host(1, true);
    engine.set_host(2, true);

    let _ = engine
        .propagate(Constraint::NotAllHosts)
        .expect("Expected no error");

    assert_eq!(engine.host(3), Some(false));
}

#[test]
fn someone_has_to_host() {
    let mut engine = four_vessels(3);

    engine.set_host(0, false);
    engine.set_host(1, false);
    engine.set_host(2, false);

    let _ = engine
        .propagate(Constraint::AtLeastOneHost)
        .expect("Expected no error");

    assert_eq!(engine.host(3), Some(true));
}

#[test]
fn no_host_is_a_conflict() {
    let mut engine = four_vessels(3);

    for vessel in 0..4 {
        engine.set_host(vessel, false);
    }

    let result = engine.propagate(Constraint::AtLeastOneHost);

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::AtLeastOneHost))
    );
}

#[test]
fn hosts_are_bounded_by_the_slots() {
    let mut engine = four_vessels(2);

    engine.set_host(0, true);
    engine.set_host(1, true);

    let _ = engine
        .propagate(Constraint::HostsWithinSlots)
        .expect("Expected no error");

    assert_eq!(engine.host(2), Some(false));
    assert_eq!(engine.host(3), Some(false));
}

#[test]
fn more_hosts_than_slots_is_a_conflict() {
    let mut engine = four_vessels(1);

    engine.set_host(0, true);
    engine.set_host(1, true);

    let result = engine.propagate(Constraint::HostsWithinSlots);

    assert_eq!(
        result,
        Err(Inconsistency::Violated(ConstraintFamily::HostsWithinSlots))
    );
}
