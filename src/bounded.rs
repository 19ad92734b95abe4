use std::fmt;
use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::error::{non_negative, Error};
use crate::source::PartitionSource;

/// One level of the partition tree: the amount still to be split and the next leading part to try.
#[derive(Debug)]
struct Frame {
    remaining: usize,
    next_part: usize,
    emitted_whole: bool,
}

/// Partitions of `n` into parts no smaller than `min_part`, each listed in non-decreasing order.
///
/// For every remainder the whole remainder is emitted as a single part first, followed by every
/// split `i + rest` with `min_part <= i <= remainder / 2` where `rest` is partitioned with minimum
/// part `i`. For n = 4 this gives `[4], [1, 3], [1, 1, 2], [1, 1, 1, 1], [2, 2]`.
///
/// The depth-first walk is driven by an explicit stack of frames.
#[derive(Debug)]
pub struct BoundedPartitions {
    n: usize,
    min_part: usize,
    frames: Vec<Frame>,
    /// the leading parts fixed by every frame except the top one
    prefix: Vec<usize>,
    current: Vec<usize>,
    emit_empty: bool,
}

impl BoundedPartitions {
    pub fn new<N: PrimInt + fmt::Display>(n: N, min_part: N) -> Result<BoundedPartitions, Error> {
        let n = non_negative(n, "n")?;
        if min_part < N::one() {
            return Err(Error::InvalidArgument(format!("min_part must be at least 1, received {}", min_part)));
        }
        let min_part = non_negative(min_part, "min_part")?;

        let mut frames = Vec::new();
        // no partition of 0 < n < min_part satisfies the bound
        if n >= min_part {
            frames.push(Frame {
                remaining: n,
                next_part: min_part,
                emitted_whole: false,
            });
        }
        Ok(BoundedPartitions {
            n,
            min_part,
            frames,
            prefix: Vec::new(),
            current: Vec::new(),
            emit_empty: n == 0,
        })
    }

    pub fn unbounded<N: PrimInt + fmt::Display>(n: N) -> Result<BoundedPartitions, Error> {
        BoundedPartitions::new(n, N::one())
    }

    pub fn min_part(&self) -> usize {
        self.min_part
    }
}

impl PartitionSource for BoundedPartitions {
    type View = [usize];

    fn advance(&mut self) -> Option<&[usize]> {
        if self.emit_empty {
            self.emit_empty = false;
            self.current.clear();
            return Some(&self.current);
        }
        loop {
            let frame = self.frames.last_mut()?;
            if !frame.emitted_whole {
                frame.emitted_whole = true;
                let remaining = frame.remaining;
                self.current.clear();
                self.current.extend_from_slice(&self.prefix);
                self.current.push(remaining);
                return Some(&self.current);
            }
            if frame.next_part <= frame.remaining / 2 {
                let part = frame.next_part;
                frame.next_part += 1;
                let remaining = frame.remaining - part;
                self.prefix.push(part);
                self.frames.push(Frame {
                    remaining,
                    next_part: part,
                    emitted_whole: false,
                });
            } else {
                self.frames.pop();
                self.prefix.pop();
            }
        }
    }

    fn target(&self) -> usize {
        self.n
    }
}

impl Iterator for BoundedPartitions {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(|view| view.to_vec())
    }
}

impl FusedIterator for BoundedPartitions {}
