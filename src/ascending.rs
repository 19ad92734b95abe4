//! Ascending compositions: partitions as non-decreasing sequences, generated in lexicographic
//! order by an array-based loop with no recursion.
//!
//! Both variants keep the working array `a` (length n + 1) and the cursor `k`; the emitted
//! partition is always a prefix of `a`.
//!
//! `Baseline` runs one pass of the outer loop per partition: it takes the last two parts, bumps
//! the second-to-last by one, and refills the tail greedily with copies of it. Across the whole run
//! `k` is incremented once per partition and decremented once per partition, so the cost per
//! partition is O(1) amortized.
//!
//! `Accelerated` keeps the tail split as a pair `(a[k], a[l])` and walks `x <= y` through a run of
//! pairs with a unit increment and decrement, emitting each without touching the rest of the array.
//! Both variants emit the same sequence.
use std::fmt;
use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::error::{non_negative, Error};
use crate::source::PartitionSource;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Variant {
    Baseline,
    Accelerated,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    /// n = 0: the empty partition is emitted once
    Empty,
    Outer,
    /// accelerated only: stepping through the run of trailing pairs
    Pairs,
    Done,
}

#[derive(Debug)]
pub struct AscendingCompositions {
    variant: Variant,
    n: usize,
    a: Vec<usize>,
    k: usize,
    // accelerated state carried across advances
    x: usize,
    y: usize,
    l: usize,
    phase: Phase,
}

impl AscendingCompositions {
    pub fn new<N: PrimInt + fmt::Display>(n: N, variant: Variant) -> Result<AscendingCompositions, Error> {
        let n = non_negative(n, "n")?;
        if n == 0 {
            return Ok(AscendingCompositions {
                variant,
                n,
                a: Vec::new(),
                k: 0,
                x: 0,
                y: 0,
                l: 0,
                phase: Phase::Empty,
            });
        }
        let mut a = vec![0usize; n + 1];
        let y = match variant {
            Variant::Baseline => {
                a[1] = n;
                0
            }
            Variant::Accelerated => n - 1
        };
        Ok(AscendingCompositions {
            variant,
            n,
            a,
            k: 1,
            x: 0,
            y,
            l: 0,
            phase: Phase::Outer,
        })
    }

    pub fn baseline<N: PrimInt + fmt::Display>(n: N) -> Result<AscendingCompositions, Error> {
        AscendingCompositions::new(n, Variant::Baseline)
    }

    pub fn accelerated<N: PrimInt + fmt::Display>(n: N) -> Result<AscendingCompositions, Error> {
        AscendingCompositions::new(n, Variant::Accelerated)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// One full outer iteration of the baseline loop. Leaves the next partition in `a[..=k]`.
    fn baseline_step(&mut self) {
        let a = &mut self.a;
        let mut k = self.k;
        let x = a[k - 1] + 1;
        let mut y = a[k] - 1;
        k -= 1;
        while x <= y {
            a[k] = x;
            y -= x;
            k += 1;
        }
        a[k] = x + y;
        self.k = k;
    }

    /// Opens the next block of the accelerated loop: fills the head greedily and positions the
    /// trailing pair `(a[k], a[l])`.
    fn open_block(&mut self) {
        let a = &mut self.a;
        let mut k = self.k;
        let x = a[k - 1] + 1;
        let mut y = self.y;
        k -= 1;
        while 2 * x <= y {
            a[k] = x;
            y -= x;
            k += 1;
        }
        self.k = k;
        self.l = k + 1;
        self.x = x;
        self.y = y;
    }
}

impl PartitionSource for AscendingCompositions {
    type View = [usize];

    fn advance(&mut self) -> Option<&[usize]> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Empty => {
                    self.phase = Phase::Done;
                    return Some(&self.a[..0]);
                }
                Phase::Outer => {
                    if self.k == 0 {
                        self.phase = Phase::Done;
                        return None;
                    }
                    match self.variant {
                        Variant::Baseline => {
                            self.baseline_step();
                            return Some(&self.a[..=self.k]);
                        }
                        Variant::Accelerated => {
                            self.open_block();
                            self.phase = Phase::Pairs;
                        }
                    }
                }
                Phase::Pairs => {
                    let (k, l) = (self.k, self.l);
                    if self.x <= self.y {
                        self.a[k] = self.x;
                        self.a[l] = self.y;
                        self.x += 1;
                        self.y -= 1;
                        return Some(&self.a[..=l]);
                    }
                    let merged = self.x + self.y;
                    self.a[k] = merged;
                    self.y = merged - 1;
                    self.phase = Phase::Outer;
                    return Some(&self.a[..=k]);
                }
            }
        }
    }

    fn target(&self) -> usize {
        self.n
    }
}

impl Iterator for AscendingCompositions {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(|view| view.to_vec())
    }
}

impl FusedIterator for AscendingCompositions {}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::source::PartitionSource;
    use crate::test_util::{assert_complete_enumeration, is_non_decreasing};

    use super::{AscendingCompositions, Variant};

    #[test]
    fn test_lexicographic_order() {
        let expected = vec![
            vec![1, 1, 1, 1],
            vec![1, 1, 2],
            vec![1, 3],
            vec![2, 2],
            vec![4],
        ];
        assert_eq!(AscendingCompositions::baseline(4).unwrap().collect::<Vec<Vec<usize>>>(), expected);
        assert_eq!(AscendingCompositions::accelerated(4).unwrap().collect::<Vec<Vec<usize>>>(), expected);
    }

    #[test]
    fn test_variants_agree() {
        for n in 0..=40usize {
            let baseline: Vec<Vec<usize>> = AscendingCompositions::baseline(n).unwrap().collect();
            let accelerated: Vec<Vec<usize>> = AscendingCompositions::accelerated(n).unwrap().collect();
            assert_eq!(baseline, accelerated, "variants disagree for n = {}", n);
            assert!(baseline.windows(2).all(|w| w[0] < w[1]), "n = {} is not in lexicographic order", n);
        }
    }

    #[test]
    fn test_complete_enumeration() {
        for n in 0..=30usize {
            for &variant in [Variant::Baseline, Variant::Accelerated].iter() {
                let partitions: Vec<Vec<usize>> = AscendingCompositions::new(n, variant).unwrap().collect();
                assert_complete_enumeration(n, &partitions);
                assert!(partitions.iter().all(|p| is_non_decreasing(p)));
            }
        }
    }

    #[test]
    fn test_zero_and_one() {
        for &variant in [Variant::Baseline, Variant::Accelerated].iter() {
            assert_eq!(AscendingCompositions::new(0, variant).unwrap().collect::<Vec<Vec<usize>>>(),
                       vec![Vec::<usize>::new()]);
            assert_eq!(AscendingCompositions::new(1, variant).unwrap().collect::<Vec<Vec<usize>>>(), vec![vec![1]]);
        }
    }

    #[test]
    fn test_early_stop_matches_prefix() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let n = rng.gen_range(1usize, 25);
            let full: Vec<Vec<usize>> = AscendingCompositions::accelerated(n).unwrap().collect();
            let take = rng.gen_range(0, full.len() + 1);
            let prefix: Vec<Vec<usize>> = AscendingCompositions::baseline(n).unwrap().take(take).collect();
            assert_eq!(&full[..take], &prefix[..]);
        }
    }

    #[test]
    fn test_streaming_view() {
        let mut source = AscendingCompositions::baseline(6).unwrap();
        let mut count = 0;
        while let Some(view) = source.advance() {
            assert_eq!(view.iter().sum::<usize>(), 6);
            count += 1;
        }
        assert_eq!(count, 11);
        assert!(source.advance().is_none());
        assert_eq!(source.target(), 6);
    }

    #[test]
    fn test_negative_n() {
        assert!(AscendingCompositions::baseline(-1).unwrap_err().is_invalid_argument());
        assert!(AscendingCompositions::accelerated(-10i64).unwrap_err().is_invalid_argument());
    }
}
