//! The outcome of a solve: a [`Schedule`] when one was found, wrapped in an
//! [`OptimisationResult`] which tells whether the search proved it optimal.

mod schedule;
mod schedule_violation;

pub use schedule::Schedule;
pub use schedule::ScheduleReport;
pub use schedule_violation::ScheduleViolation;

/// The result of maximising the number of guests.
#[derive(Clone, Debug)]
pub enum OptimisationResult {
    /// The search was exhausted; no schedule has more guests than this one.
    Optimal(Schedule),
    /// The search was stopped before it was exhausted. This is the best schedule found so far.
    Satisfiable(Schedule),
    /// The search was exhausted without finding any schedule.
    Unsatisfiable,
    /// The search was stopped before any schedule was found.
    Unknown,
}

impl OptimisationResult {
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            OptimisationResult::Optimal(schedule) | OptimisationResult::Satisfiable(schedule) => {
                Some(schedule)
            }
            OptimisationResult::Unsatisfiable | OptimisationResult::Unknown => None,
        }
    }

    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            OptimisationResult::Optimal(schedule) | OptimisationResult::Satisfiable(schedule) => {
                Some(schedule)
            }
            OptimisationResult::Unsatisfiable | OptimisationResult::Unknown => None,
        }
    }

    /// Whether the search ran to completion, so the outcome (a schedule or infeasibility) is
    /// final.
    pub fn is_proven(&self) -> bool {
        matches!(
            self,
            OptimisationResult::Optimal(_) | OptimisationResult::Unsatisfiable
        )
    }

    pub fn is_proven_optimal(&self) -> bool {
        matches!(self, OptimisationResult::Optimal(_))
    }

    pub fn guest_count(&self) -> Option<usize> {
        self.schedule().map(Schedule::guest_count)
    }
}
