use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::model::VariableId;
use crate::model::VariableLayout;

/// A part of the search tree, identified by the host flags of the first `depth` vessels.
///
/// Subtrees are numbered in the order a depth-first search would visit them: bit `depth - 1 - i`
/// of the index tells whether vessel `i` takes the first value of the host value order (`0`) or
/// the other one (`1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Subtree {
    index: usize,
    depth: usize,
}

impl Subtree {
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// The host flags fixed at the top of this subtree.
    pub(crate) fn prefix<'a>(
        &self,
        layout: &'a VariableLayout,
        first_value: bool,
    ) -> impl Iterator<Item = (VariableId, bool)> + 'a {
        let Subtree { index, depth } = *self;

        (0..depth).map(move |vessel| {
            let takes_other_value = (index >> (depth - 1 - vessel)) & 1 == 1;
            (layout.host(vessel), first_value != takes_other_value)
        })
    }
}

/// Hands out every subtree exactly once, to whichever worker asks first.
#[derive(Debug)]
pub(crate) struct SubtreeQueue {
    next: AtomicUsize,
    depth: usize,
}

impl SubtreeQueue {
    /// Split the search on the first `depth` host flags; the depth is capped at the number of
    /// vessels.
    pub(crate) fn new(depth: usize, num_vessels: usize) -> SubtreeQueue {
        SubtreeQueue {
            next: AtomicUsize::new(0),
            depth: depth.min(num_vessels).min(usize::BITS as usize - 1),
        }
    }

    pub(crate) fn num_subtrees(&self) -> usize {
        1 << self.depth
    }

    pub(crate) fn pop(&self) -> Option<Subtree> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);

        (index < self.num_subtrees()).then_some(Subtree {
            index,
            depth: self.depth,
        })
    }
}
