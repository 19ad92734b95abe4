//! Generates the partitions of n from the partitions of n - 1.
//!
//! Every partition `p` of n - 1 gives rise to `[1] + p`, and additionally to `p` with its smallest
//! part incremented whenever that part is strictly smaller than the next one. Reducing the smallest
//! part of a partition of n by one maps it back to exactly one partition of n - 1, so each partition
//! is produced once.
//!
//! The recursion over n, n - 1, ..., 0 is unrolled into one pending slot per level: pulling the next
//! partition takes the highest level holding a pending candidate and pushes it up through the
//! levels above, which reproduces the lazy recursive order without call-stack depth.
use std::fmt;
use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::error::{non_negative, Error};
use crate::source::PartitionSource;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PartOrder {
    /// smallest part first; new parts are prepended
    Ascending,
    /// smallest part last; new parts are appended
    Descending,
}

#[derive(Debug)]
pub struct RecursiveReduction {
    n: usize,
    order: PartOrder,
    /// `pending[m]` is the incremented candidate derived at level m that has not been emitted yet.
    /// Parts are stored non-increasing so that the smallest part sits at the tail.
    pending: Vec<Option<Vec<usize>>>,
    current: Vec<usize>,
}

impl RecursiveReduction {
    pub fn new<N: PrimInt + fmt::Display>(n: N, order: PartOrder) -> Result<RecursiveReduction, Error> {
        let n = non_negative(n, "n")?;
        let mut pending = vec![None; n + 1];
        pending[0] = Some(Vec::new());
        Ok(RecursiveReduction {
            n,
            order,
            pending,
            current: Vec::with_capacity(n),
        })
    }

    /// Partitions with parts in non-decreasing order, e.g. `[1, 1, 3]`.
    pub fn ascending<N: PrimInt + fmt::Display>(n: N) -> Result<RecursiveReduction, Error> {
        RecursiveReduction::new(n, PartOrder::Ascending)
    }

    /// The mirror image: parts in non-increasing order, e.g. `[3, 1, 1]`.
    pub fn descending<N: PrimInt + fmt::Display>(n: N) -> Result<RecursiveReduction, Error> {
        RecursiveReduction::new(n, PartOrder::Descending)
    }

    pub fn order(&self) -> PartOrder {
        self.order
    }
}

/// Lifts a partition of m - 1 to level m. Returns `part + [1]` and, when the guard holds, leaves the
/// partition with its smallest part incremented in `slot` for the following pull.
fn lift(slot: &mut Option<Vec<usize>>, mut part: Vec<usize>) -> Vec<usize> {
    let len = part.len();
    if len == 1 || (len >= 2 && part[len - 2] > part[len - 1]) {
        let mut incremented = part.clone();
        incremented[len - 1] += 1;
        *slot = Some(incremented);
    }
    part.push(1);
    part
}

impl PartitionSource for RecursiveReduction {
    type View = [usize];

    fn advance(&mut self) -> Option<&[usize]> {
        let level = self.pending.iter().rposition(Option::is_some)?;
        let mut part = self.pending[level].take()?;
        for above in level + 1..=self.n {
            part = lift(&mut self.pending[above], part);
        }
        self.current.clear();
        match self.order {
            PartOrder::Ascending => self.current.extend(part.iter().rev()),
            PartOrder::Descending => self.current.extend_from_slice(&part),
        }
        Some(&self.current)
    }

    fn target(&self) -> usize {
        self.n
    }
}

impl Iterator for RecursiveReduction {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(|view| view.to_vec())
    }
}

impl FusedIterator for RecursiveReduction {}
