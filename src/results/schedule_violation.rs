use thiserror::Error;

/// A constraint which a [`Schedule`](super::Schedule) breaks. Vessels and slots are reported with
/// their 0-based indices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleViolation {
    #[error("the schedule covers {vessels} vessels over {slots} slots, which does not match the instance")]
    InstanceMismatch { vessels: usize, slots: usize },
    #[error("vessel {vessel} appears more than once in the host list")]
    DuplicateHost { vessel: usize },
    #[error("{hosts} hosts, but at least one host and one guest are required")]
    HostCount { hosts: usize },
    #[error("vessel {vessel} visits itself in slot {slot}")]
    SelfVisit { slot: usize, vessel: usize },
    #[error("host {host} carries {load} crew members in slot {slot}, but has capacity {capacity}")]
    Capacity {
        slot: usize,
        host: usize,
        load: u64,
        capacity: u32,
    },
    #[error("vessel {host} is visited by {guest} in slot {slot}, but is not a host")]
    VisitToNonHost {
        slot: usize,
        guest: usize,
        host: usize,
    },
    #[error("host {host} never receives a visit")]
    HostWithoutVisitors { host: usize },
    #[error("host {host} visits vessel {visited} in slot {slot}")]
    HostVisits {
        slot: usize,
        host: usize,
        visited: usize,
    },
    #[error("guest {guest} never visits a host")]
    GuestWithoutVisit { guest: usize },
    #[error("guest {guest} visits host {host} {count} times instead of exactly once")]
    Pairing {
        guest: usize,
        host: usize,
        count: usize,
    },
    #[error("guest {guest} is at more than one host in slot {slot}")]
    SeveralVisitsInSlot { slot: usize, guest: usize },
    #[error("guests {first} and {second} meet {count} times")]
    RepeatedMeeting {
        first: usize,
        second: usize,
        count: usize,
    },
}
