//! A [`TerminationCondition`] is a condition which is polled by the search at every branch point
//! and before every propagation call. It indicates when the search should stop, even if
//! optimality has not been proven yet. The most common examples are [`TimeBudget`], which gives
//! the search a fixed amount of time, and [`Cancellation`], which can be triggered from another
//! thread.
//!
//! When the search runs on several workers, every worker polls its own clone of the condition.

mod cancellation;
mod combinator;
mod decision_budget;
mod indefinite;
mod os_signal;
mod time_budget;

pub use cancellation::Cancellation;
pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use os_signal::OsSignal;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the search should give up.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }
}
