use std::fmt::Display;
use std::fmt::Formatter;

use super::ScheduleViolation;
use crate::basic_types::HashMap;
use crate::instance::ProblemInstance;
use crate::model::VariableId;
use crate::model::VariableLayout;

/// A complete rendezvous schedule: which vessels host, and for every slot which guest is at which
/// host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    num_vessels: usize,
    /// Sorted by vessel index.
    hosts: Vec<usize>,
    /// For every slot the `(guest, host)` pairs, sorted.
    visits: Vec<Vec<(usize, usize)>>,
}

impl Schedule {
    pub fn new(
        num_vessels: usize,
        hosts: impl IntoIterator<Item = usize>,
        visits: Vec<Vec<(usize, usize)>>,
    ) -> Schedule {
        let mut hosts: Vec<usize> = hosts.into_iter().collect();
        hosts.sort_unstable();

        let mut visits = visits;
        visits.iter_mut().for_each(|slot| slot.sort_unstable());

        Schedule {
            num_vessels,
            hosts,
            visits,
        }
    }

    /// Read the schedule off a complete assignment.
    pub(crate) fn from_assignment(
        layout: &VariableLayout,
        value: impl Fn(VariableId) -> bool,
    ) -> Schedule {
        let hosts = (0..layout.num_vessels()).filter(|&vessel| value(layout.host(vessel)));

        let mut visits = vec![Vec::new(); layout.slot_count()];
        for (slot, pairs) in visits.iter_mut().enumerate() {
            for guest in 0..layout.num_vessels() {
                pairs.extend(
                    layout
                        .visits_from_during(slot, guest)
                        .filter(|&(_, variable)| value(variable))
                        .map(|(host, _)| (guest, host)),
                );
            }
        }

        Schedule::new(layout.num_vessels(), hosts, visits)
    }

    pub fn num_vessels(&self) -> usize {
        self.num_vessels
    }

    pub fn slot_count(&self) -> usize {
        self.visits.len()
    }

    pub fn hosts(&self) -> &[usize] {
        &self.hosts
    }

    pub fn is_host(&self, vessel: usize) -> bool {
        self.hosts.binary_search(&vessel).is_ok()
    }

    pub fn guests(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_vessels).filter(|&vessel| !self.is_host(vessel))
    }

    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// The objective value of the schedule.
    pub fn guest_count(&self) -> usize {
        self.num_vessels - self.hosts.len()
    }

    /// The `(guest, host)` pairs realised during `slot`.
    pub fn visits_during(&self, slot: usize) -> &[(usize, usize)] {
        &self.visits[slot]
    }

    /// All visits as `(slot, guest, host)`.
    pub fn visits(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.visits
            .iter()
            .enumerate()
            .flat_map(|(slot, pairs)| pairs.iter().map(move |&(guest, host)| (slot, guest, host)))
    }

    /// The number of people on board of `host` during `slot`, its own crew included.
    pub fn load(&self, instance: &ProblemInstance, slot: usize, host: usize) -> u64 {
        u64::from(instance.crew_size(host))
            + self.visits[slot]
                .iter()
                .filter(|&&(_, visited)| visited == host)
                .map(|&(guest, _)| u64::from(instance.crew_size(guest)))
                .sum::<u64>()
    }

    /// Verify every constraint against `instance`, without relying on the search engine. Returns
    /// the first violation found.
    pub fn check(&self, instance: &ProblemInstance) -> Result<(), ScheduleViolation> {
        let num_vessels = instance.num_vessels();
        let mismatch = ScheduleViolation::InstanceMismatch {
            vessels: self.num_vessels,
            slots: self.slot_count(),
        };

        if self.num_vessels != num_vessels || self.slot_count() != instance.slot_count() {
            return Err(mismatch);
        }
        if self.hosts.iter().any(|&host| host >= num_vessels)
            || self
                .visits()
                .any(|(_, guest, host)| guest >= num_vessels || host >= num_vessels)
        {
            return Err(mismatch);
        }

        if let Some(pair) = self.hosts.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ScheduleViolation::DuplicateHost { vessel: pair[0] });
        }

        if self.hosts.is_empty() || self.hosts.len() >= num_vessels {
            return Err(ScheduleViolation::HostCount {
                hosts: self.hosts.len(),
            });
        }

        for (slot, guest, host) in self.visits() {
            if guest == host {
                return Err(ScheduleViolation::SelfVisit {
                    slot,
                    vessel: guest,
                });
            }
            if !self.is_host(host) {
                return Err(ScheduleViolation::VisitToNonHost { slot, guest, host });
            }
            if self.is_host(guest) {
                return Err(ScheduleViolation::HostVisits {
                    slot,
                    host: guest,
                    visited: host,
                });
            }
        }

        for (slot, pairs) in self.visits.iter().enumerate() {
            if let Some(pair) = pairs.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(ScheduleViolation::SeveralVisitsInSlot {
                    slot,
                    guest: pair[0].0,
                });
            }

            for host in 0..num_vessels {
                let load = self.load(instance, slot, host);
                let capacity = instance.capacity(host);

                if load > u64::from(capacity) {
                    return Err(ScheduleViolation::Capacity {
                        slot,
                        host,
                        load,
                        capacity,
                    });
                }
            }
        }

        for &host in &self.hosts {
            if !self.visits().any(|(_, _, visited)| visited == host) {
                return Err(ScheduleViolation::HostWithoutVisitors { host });
            }
        }

        for guest in self.guests() {
            if !self.visits().any(|(_, visitor, _)| visitor == guest) {
                return Err(ScheduleViolation::GuestWithoutVisit { guest });
            }

            for &host in &self.hosts {
                let count = self
                    .visits()
                    .filter(|&(_, visitor, visited)| visitor == guest && visited == host)
                    .count();

                if count != 1 {
                    return Err(ScheduleViolation::Pairing { guest, host, count });
                }
            }
        }

        let mut meetings: HashMap<(usize, usize), usize> = HashMap::default();
        for pairs in &self.visits {
            for (index, &(first, host)) in pairs.iter().enumerate() {
                for &(second, _) in pairs[index + 1..]
                    .iter()
                    .filter(|&&(_, other_host)| other_host == host)
                {
                    *meetings
                        .entry((first.min(second), first.max(second)))
                        .or_default() += 1;
                }
            }
        }

        let mut repeated: Vec<_> = meetings.into_iter().filter(|&(_, count)| count > 1).collect();
        repeated.sort_unstable();

        match repeated.first() {
            Some(&((first, second), count)) => Err(ScheduleViolation::RepeatedMeeting {
                first,
                second,
                count,
            }),
            None => Ok(()),
        }
    }

    /// A report which, in addition to the schedule itself, lists the load of every host.
    pub fn report<'a>(&'a self, instance: &'a ProblemInstance) -> ScheduleReport<'a> {
        ScheduleReport {
            schedule: self,
            instance,
        }
    }

    fn write_hosts(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hosts:")?;
        for host in &self.hosts {
            write!(f, " Vessel {}", host + 1)?;
        }
        writeln!(f)
    }

    fn write_slot(&self, f: &mut Formatter<'_>, slot: usize) -> std::fmt::Result {
        writeln!(f, "Slot {}:", slot + 1)?;
        for &(guest, host) in &self.visits[slot] {
            writeln!(
                f,
                "  Vessel {} (guest) visits Vessel {} (host)",
                guest + 1,
                host + 1
            )?;
        }
        Ok(())
    }
}

/// Vessels and slots are numbered from 1, as people on the water count them.
impl Display for Schedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_hosts(f)?;
        for slot in 0..self.slot_count() {
            self.write_slot(f, slot)?;
        }
        Ok(())
    }
}

/// See [`Schedule::report`].
#[derive(Clone, Copy, Debug)]
pub struct ScheduleReport<'a> {
    schedule: &'a Schedule,
    instance: &'a ProblemInstance,
}

impl Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.schedule.write_hosts(f)?;
        for slot in 0..self.schedule.slot_count() {
            self.schedule.write_slot(f, slot)?;
            for &host in self.schedule.hosts() {
                writeln!(
                    f,
                    "  Vessel {} carries {}/{}",
                    host + 1,
                    self.schedule.load(self.instance, slot, host),
                    self.instance.capacity(host)
                )?;
            }
        }
        Ok(())
    }
}
