//! The immutable description of a fleet and its scheduling horizon.
//!
//! A [`ProblemInstance`] is built once from `(crew size, capacity)` pairs and a number of slots,
//! and is only read afterwards. Instances for experiments can be drawn with the seeded
//! [`InstanceGenerator`].

mod generator;

pub use generator::InstanceGenerator;

use crate::basic_types::StructuralError;

/// A single vessel of the fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vessel {
    crew_size: u32,
    capacity: u32,
}

impl Vessel {
    /// The number of people that make up the crew of this vessel.
    pub fn crew_size(&self) -> u32 {
        self.crew_size
    }

    /// The number of people the vessel can hold at the same time, its own crew included.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The room left on board when only the own crew is present.
    pub fn spare_capacity(&self) -> u32 {
        self.capacity - self.crew_size
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemInstance {
    vessels: Box<[Vessel]>,
    slot_count: usize,
}

impl ProblemInstance {
    /// Create an instance from `(crew size, capacity)` pairs, indexed in the given order.
    ///
    /// Every vessel must have a non-empty crew which fits on board. Whether the fleet and the
    /// number of slots allow for a meaningful schedule is checked when the
    /// [`Model`](crate::model::Model) is built.
    pub fn new(
        vessels: impl IntoIterator<Item = (u32, u32)>,
        slot_count: usize,
    ) -> Result<ProblemInstance, StructuralError> {
        let vessels = vessels
            .into_iter()
            .enumerate()
            .map(|(vessel, (crew_size, capacity))| {
                if crew_size == 0 {
                    return Err(StructuralError::ZeroCrew { vessel });
                }

                if capacity < crew_size {
                    return Err(StructuralError::CapacityBelowCrew {
                        vessel,
                        crew_size,
                        capacity,
                    });
                }

                Ok(Vessel {
                    crew_size,
                    capacity,
                })
            })
            .collect::<Result<Box<[_]>, _>>()?;

        Ok(ProblemInstance {
            vessels,
            slot_count,
        })
    }

    pub fn num_vessels(&self) -> usize {
        self.vessels.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn vessel(&self, index: usize) -> Vessel {
        self.vessels[index]
    }

    pub fn crew_size(&self, index: usize) -> u32 {
        self.vessels[index].crew_size
    }

    pub fn capacity(&self, index: usize) -> u32 {
        self.vessels[index].capacity
    }

    pub fn vessels(&self) -> impl Iterator<Item = Vessel> + '_ {
        self.vessels.iter().copied()
    }

    /// A copy of this instance where the capacity of `index` is replaced by `capacity`.
    pub fn with_capacity(
        &self,
        index: usize,
        capacity: u32,
    ) -> Result<ProblemInstance, StructuralError> {
        ProblemInstance::new(
            self.vessels.iter().enumerate().map(|(vessel, v)| {
                if vessel == index {
                    (v.crew_size, capacity)
                } else {
                    (v.crew_size, v.capacity)
                }
            }),
            self.slot_count,
        )
    }
}
