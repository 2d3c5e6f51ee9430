//! # Regatta
//! Schedules the rendezvous of a yacht club: some vessels stay moored as hosts, the crews of the
//! others visit them over a number of time slots. Every host receives every guest crew exactly
//! once, no host is ever over capacity, and two guest crews meet at most once. Among all such
//! schedules the solver finds one with as few hosts, and therefore as many guests, as possible.
//!
//! A [`ProblemInstance`] describes the fleet. The [`Solver`] turns it into a [`model::Model`] of
//! boolean host and visit flags, and explores it with a branch-and-bound search which propagates
//! the constraints at every node. The search can be split over several threads and stopped at
//! any time through a [`termination::TerminationCondition`].
//!
//! ```
//! use regatta::termination::TimeBudget;
//! use regatta::InstanceGenerator;
//! use regatta::Solver;
//!
//! let instance = InstanceGenerator::new(7).generate(5, 2).unwrap();
//! let mut solver = Solver::default();
//! let result = solver
//!     .solve(&instance, TimeBudget::starting_now(std::time::Duration::from_secs(10)))
//!     .unwrap();
//!
//! if let Some(schedule) = result.schedule() {
//!     assert_eq!(schedule.check(&instance), Ok(()));
//!     println!("{}", schedule.report(&instance));
//! }
//! ```

pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod instance;
pub mod model;
pub mod options;
pub mod results;
pub mod statistics;

pub(crate) mod engine;
pub(crate) mod propagators;

mod solver;
#[cfg(test)]
mod tests;

pub use basic_types::StructuralError;
pub use engine::search::SearchStatistics;
pub use engine::termination;
pub use instance::InstanceGenerator;
pub use instance::ProblemInstance;
pub use instance::Vessel;
pub use options::SolverOptions;
pub use results::OptimisationResult;
pub use results::Schedule;
pub use solver::Solver;
