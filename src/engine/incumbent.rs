use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use log::info;

use crate::results::Schedule;

/// The best schedule found so far, shared by all search workers of one solve.
///
/// The guest count of the incumbent is kept in an atomic so that workers can bound their search
/// without taking the lock. The schedule behind the mutex is the source of truth: a candidate is
/// only installed if it has strictly more guests than the schedule stored there, so the first
/// schedule found with a given guest count is the one that is kept.
#[derive(Debug, Default)]
pub(crate) struct SharedIncumbent {
    /// Guest count of the incumbent plus one; zero means no incumbent.
    best: AtomicUsize,
    schedule: Mutex<Option<Schedule>>,
}

impl SharedIncumbent {
    pub(crate) fn new() -> SharedIncumbent {
        SharedIncumbent::default()
    }

    /// The guest count of the incumbent, if there is one. Never blocks.
    pub(crate) fn best_guest_count(&self) -> Option<usize> {
        self.best.load(Ordering::Relaxed).checked_sub(1)
    }

    /// Whether a schedule with `guest_count` guests would improve on the incumbent.
    pub(crate) fn would_improve(&self, guest_count: usize) -> bool {
        self.best_guest_count()
            .map_or(true, |best| guest_count > best)
    }

    /// Install `candidate` if it has strictly more guests than the incumbent. Returns whether it
    /// was installed.
    pub(crate) fn try_install(&self, candidate: &Schedule) -> bool {
        let guest_count = candidate.guest_count();
        if !self.would_improve(guest_count) {
            return false;
        }

        let mut guard = self.lock();
        // Another worker may have installed a better schedule while we waited for the lock.
        if guard
            .as_ref()
            .is_some_and(|current| current.guest_count() >= guest_count)
        {
            return false;
        }

        info!(
            "New incumbent with {guest_count} guests and {} hosts",
            candidate.host_count()
        );

        *guard = Some(candidate.clone());
        self.best.store(guest_count + 1, Ordering::Relaxed);

        true
    }

    pub(crate) fn into_schedule(self) -> Option<Schedule> {
        self.schedule
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Schedule>> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedIncumbent;
    use crate::results::Schedule;

    /// A schedule over `num_vessels` vessels where the first `hosts` vessels host.
    fn schedule(num_vessels: usize, hosts: usize) -> Schedule {
        Schedule::new(num_vessels, 0..hosts, vec![Vec::new()])
    }

    #[test]
    fn starts_without_incumbent() {
        let incumbent = SharedIncumbent::new();

        assert_eq!(incumbent.best_guest_count(), None);
        assert!(incumbent.would_improve(0));
        assert!(incumbent.into_schedule().is_none());
    }

    #[test]
    fn only_strict_improvements_are_installed() {
        let incumbent = SharedIncumbent::new();

        assert!(incumbent.try_install(&schedule(5, 2)));
        assert_eq!(incumbent.best_guest_count(), Some(3));

        assert!(!incumbent.try_install(&schedule(5, 3)));
        assert!(!incumbent.try_install(&Schedule::new(5, [3, 4], vec![Vec::new()])));
        assert_eq!(incumbent.best_guest_count(), Some(3));

        assert!(incumbent.try_install(&schedule(5, 1)));
        assert_eq!(incumbent.best_guest_count(), Some(4));
        assert_eq!(
            incumbent.into_schedule().map(|schedule| schedule.hosts().to_vec()),
            Some(vec![0])
        );
    }

    #[test]
    fn concurrent_installs_keep_the_best() {
        let incumbent = SharedIncumbent::new();

        std::thread::scope(|scope| {
            for hosts in 1..=4 {
                let incumbent = &incumbent;
                let _ = scope.spawn(move || {
                    let _ = incumbent.try_install(&schedule(6, hosts));
                });
            }
        });

        assert_eq!(incumbent.best_guest_count(), Some(5));
        assert_eq!(
            incumbent.into_schedule().map(|schedule| schedule.host_count()),
            Some(1)
        );
    }
}
