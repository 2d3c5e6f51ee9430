use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use super::ProblemInstance;
use crate::basic_types::StructuralError;

/// The smallest crew a generated vessel can have.
const MIN_CREW_SIZE: u32 = 4;

/// Draws random fleets from an explicit, seeded random generator.
///
/// Crew sizes are uniform in `[4, max_crew_size)` and every capacity is the crew size plus a
/// uniform amount in `[0, capacity_multiplier * max_crew_size)`. Two generators created with the
/// same seed and settings produce the same sequence of instances.
#[derive(Debug)]
pub struct InstanceGenerator {
    random_generator: SmallRng,
    max_crew_size: u32,
    capacity_multiplier: u32,
}

impl InstanceGenerator {
    pub fn new(seed: u64) -> Self {
        InstanceGenerator {
            random_generator: SmallRng::seed_from_u64(seed),
            max_crew_size: 20,
            capacity_multiplier: 5,
        }
    }

    pub fn with_max_crew_size(mut self, max_crew_size: u32) -> Self {
        self.max_crew_size = max_crew_size.max(MIN_CREW_SIZE + 1);
        self
    }

    pub fn with_capacity_multiplier(mut self, capacity_multiplier: u32) -> Self {
        self.capacity_multiplier = capacity_multiplier;
        self
    }

    pub fn generate(
        &mut self,
        num_vessels: usize,
        slot_count: usize,
    ) -> Result<ProblemInstance, StructuralError> {
        let spread = self.capacity_multiplier * self.max_crew_size;

        let vessels = (0..num_vessels)
            .map(|_| {
                let crew_size = self
                    .random_generator
                    .gen_range(MIN_CREW_SIZE..self.max_crew_size);
                let extra = if spread == 0 {
                    0
                } else {
                    self.random_generator.gen_range(0..spread)
                };

                (crew_size, crew_size + extra)
            })
            .collect::<Vec<_>>();

        ProblemInstance::new(vessels, slot_count)
    }
}
