use thiserror::Error;

/// Problems with the shape of an instance which make it impossible to build a model for it.
///
/// These are reported before any search happens. Infeasibility of a well-formed instance is not an
/// error; it is reported as [`crate::results::OptimisationResult::Unsatisfiable`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    #[error("the schedule needs at least one slot")]
    NoSlots,
    #[error("the fleet needs at least two vessels, got {vessels}")]
    TooFewVessels { vessels: usize },
    #[error("vessel {vessel} has an empty crew")]
    ZeroCrew { vessel: usize },
    #[error("vessel {vessel} has capacity {capacity} which cannot hold its own crew of {crew_size}")]
    CapacityBelowCrew {
        vessel: usize,
        crew_size: u32,
        capacity: u32,
    },
}
