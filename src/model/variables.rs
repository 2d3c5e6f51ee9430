use std::fmt::Display;
use std::fmt::Formatter;

/// Identifies one boolean decision variable of a [`Model`](super::Model).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u32);

impl VariableId {
    pub(crate) fn new(index: usize) -> VariableId {
        VariableId(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// The meaning of a [`VariableId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variable {
    /// `true` iff `vessel` is a host.
    Host { vessel: usize },
    /// `true` iff `guest` is on board of `host` during `slot`.
    Visit {
        slot: usize,
        guest: usize,
        host: usize,
    },
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::Host { vessel } => write!(f, "host[{vessel}]"),
            Variable::Visit { slot, guest, host } => write!(f, "visit[{slot},{guest},{host}]"),
        }
    }
}

/// Maps host flags and visit flags onto a dense range of [`VariableId`]s.
///
/// The `n` host flags come first, followed by the `slots * n * n` visit flags in
/// `(slot, guest, host)` lexicographic order. The diagonal `visit(t, b, b)` is part of the layout
/// so that indexing stays a plain multiplication; those variables are fixed to `false` at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableLayout {
    num_vessels: usize,
    slot_count: usize,
}

impl VariableLayout {
    pub(crate) fn new(num_vessels: usize, slot_count: usize) -> VariableLayout {
        VariableLayout {
            num_vessels,
            slot_count,
        }
    }

    pub fn num_vessels(&self) -> usize {
        self.num_vessels
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn num_variables(&self) -> usize {
        self.num_vessels + self.slot_count * self.num_vessels * self.num_vessels
    }

    pub fn host(&self, vessel: usize) -> VariableId {
        VariableId::new(vessel)
    }

    pub fn visit(&self, slot: usize, guest: usize, host: usize) -> VariableId {
        VariableId::new(
            self.num_vessels + (slot * self.num_vessels + guest) * self.num_vessels + host,
        )
    }

    pub fn decode(&self, variable: VariableId) -> Variable {
        let index = variable.index();
        if index < self.num_vessels {
            return Variable::Host { vessel: index };
        }

        let offset = index - self.num_vessels;
        let host = offset % self.num_vessels;
        let guest = (offset / self.num_vessels) % self.num_vessels;
        let slot = offset / (self.num_vessels * self.num_vessels);

        Variable::Visit { slot, guest, host }
    }

    pub fn host_flags(&self) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.num_vessels).map(|vessel| self.host(vessel))
    }

    /// All visit flags with `guest != host`, in `(slot, guest, host)` lexicographic order.
    pub fn visits(&self) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.slot_count).flat_map(move |slot| {
            (0..self.num_vessels).flat_map(move |guest| {
                (0..self.num_vessels)
                    .filter(move |&host| host != guest)
                    .map(move |host| self.visit(slot, guest, host))
            })
        })
    }

    /// The visits `host` receives in `slot`, as `(guest, variable)` pairs.
    pub fn visits_into_during(
        &self,
        slot: usize,
        host: usize,
    ) -> impl Iterator<Item = (usize, VariableId)> + '_ {
        (0..self.num_vessels)
            .filter(move |&guest| guest != host)
            .map(move |guest| (guest, self.visit(slot, guest, host)))
    }

    /// The visits `guest` makes in `slot`, as `(host, variable)` pairs.
    pub fn visits_from_during(
        &self,
        slot: usize,
        guest: usize,
    ) -> impl Iterator<Item = (usize, VariableId)> + '_ {
        (0..self.num_vessels)
            .filter(move |&host| host != guest)
            .map(move |host| (host, self.visit(slot, guest, host)))
    }

    /// Every visit `host` can receive over the whole schedule.
    pub fn visits_into(&self, host: usize) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.slot_count)
            .flat_map(move |slot| self.visits_into_during(slot, host).map(|(_, var)| var))
    }

    /// Every visit `guest` can make over the whole schedule.
    pub fn visits_from(&self, guest: usize) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.slot_count)
            .flat_map(move |slot| self.visits_from_during(slot, guest).map(|(_, var)| var))
    }

    /// The visits of `guest` to `host`, one per slot.
    pub fn visits_between(&self, guest: usize, host: usize) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.slot_count).map(move |slot| self.visit(slot, guest, host))
    }
}
