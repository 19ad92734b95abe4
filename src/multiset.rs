//! Partitions in multiset form, visited in reverse lexicographic order from `{n: 1}` down to
//! `{1: n}`.
//!
//! Only the tail of the ordered `(part, multiplicity)` list changes between two consecutive
//! partitions, so one step costs O(1) amortized and the structure never holds more than
//! O(sqrt(n)) entries.
use std::fmt;
use std::iter::FusedIterator;

use num::integer::{Integer, Roots};
use num_traits::PrimInt;

use crate::error::{non_negative, Error};
use crate::partition::Multiset;
use crate::source::PartitionSource;

/// The largest number of distinct parts any partition of `n` can have, i.e. the largest `d` with
/// `d * (d + 1) / 2 <= n`.
pub fn max_distinct_parts(n: usize) -> usize {
    // d <= sqrt(2n) <= 2 * (isqrt(n / 2) + 1), then walk down to the exact bound
    let mut d = 2 * ((n / 2).sqrt() + 1);
    while triangular_exceeds(d, n) {
        d -= 1;
    }
    d
}

/// true if `d * (d + 1) / 2 > n`, without overflowing
fn triangular_exceeds(d: usize, n: usize) -> bool {
    let triangular = if d % 2 == 0 { (d / 2).checked_mul(d + 1) } else { d.checked_mul((d + 1) / 2) };
    triangular.map_or(true, |t| t > n)
}

/// the state grows on demand past this many entries
const MAX_INITIAL_CAPACITY: usize = 1024;

#[derive(Debug)]
pub struct MultisetPartitions {
    n: usize,
    state: Multiset,
    started: bool,
    exhausted: bool,
}

impl MultisetPartitions {
    pub fn new<N: PrimInt + fmt::Display>(n: N) -> Result<MultisetPartitions, Error> {
        let n = non_negative(n, "n")?;
        let mut state = Multiset::with_capacity(max_distinct_parts(n).min(MAX_INITIAL_CAPACITY) + 1);
        if n > 0 {
            state.entries.push((n, 1));
        }
        Ok(MultisetPartitions {
            n,
            state,
            started: false,
            exhausted: false,
        })
    }

    /// Moves the state to the next partition in reverse lexicographic order.
    /// Returns false once the all-ones partition has been passed.
    fn step(&mut self) -> bool {
        let entries = &mut self.state.entries;

        let mut reuse = 0;
        if let Some(&(1, count)) = entries.last() {
            reuse = count;
        }
        if reuse > 0 {
            entries.pop();
        }

        let part = match entries.last_mut() {
            None => return false,
            Some(entry) => {
                entry.1 -= 1;
                entry.0
            }
        };
        if entries.last().map_or(false, |&(_, count)| count == 0) {
            entries.pop();
        }
        reuse += part;

        // part >= 2 here because the ones were removed above
        let smaller = part - 1;
        let (quotient, remainder) = reuse.div_rem(&smaller);
        entries.push((smaller, quotient));
        if remainder > 0 {
            entries.push((remainder, 1));
        }
        true
    }
}

impl PartitionSource for MultisetPartitions {
    type View = Multiset;

    fn advance(&mut self) -> Option<&Multiset> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.state);
        }
        if self.step() {
            Some(&self.state)
        } else {
            self.exhausted = true;
            None
        }
    }

    fn target(&self) -> usize {
        self.n
    }
}

impl Iterator for MultisetPartitions {
    type Item = Multiset;
    fn next(&mut self) -> Option<Multiset> {
        self.advance().cloned()
    }
}

impl FusedIterator for MultisetPartitions {}
