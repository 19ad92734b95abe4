use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use num_traits::PrimInt;

use crate::ascending::AscendingCompositions;
use crate::bounded::BoundedPartitions;
use crate::error::Error;
use crate::multiset::MultisetPartitions;
use crate::partition::Partition;
use crate::reduction::RecursiveReduction;
use crate::source::PartitionSource;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    Reduction,
    ReductionDescending,
    Multiset,
    Bounded,
    AscendingBaseline,
    AscendingAccelerated,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Reduction,
        Strategy::ReductionDescending,
        Strategy::Multiset,
        Strategy::Bounded,
        Strategy::AscendingBaseline,
        Strategy::AscendingAccelerated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Reduction => "reduction",
            Strategy::ReductionDescending => "reduction-descending",
            Strategy::Multiset => "multiset",
            Strategy::Bounded => "bounded",
            Strategy::AscendingBaseline => "ascending-baseline",
            Strategy::AscendingAccelerated => "ascending-accelerated",
        }
    }

    /// true if the strategy emits `Partition::Multiset`, false for `Partition::Sequence`
    pub fn emits_multisets(&self) -> bool {
        *self == Strategy::Multiset
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Strategy, Error> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Strategy::ALL.iter()
                     .find(|strategy| strategy.name() == name)
                     .cloned()
                     .ok_or_else(|| {
                         let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
                         Error::InvalidArgument(format!("unknown strategy {}, expected one of {}", s, names.join(", ")))
                     })
    }
}

/// The partitions of one integer as produced by one strategy.
///
/// `Multiset` yields `Partition::Multiset`; every other strategy yields `Partition::Sequence` with
/// parts in non-decreasing order, except `ReductionDescending` whose parts are non-increasing.
/// Each item is an owned copy, so items may be kept across iterations.
#[derive(Debug)]
pub enum Partitions {
    Reduction(RecursiveReduction),
    Multiset(MultisetPartitions),
    Bounded(BoundedPartitions),
    Ascending(AscendingCompositions),
}

impl Partitions {
    pub fn target(&self) -> usize {
        match self {
            Partitions::Reduction(source) => source.target(),
            Partitions::Multiset(source) => source.target(),
            Partitions::Bounded(source) => source.target(),
            Partitions::Ascending(source) => source.target(),
        }
    }

    /// Exhausts the enumeration without materializing any partition.
    pub fn count_remaining(self) -> usize {
        match self {
            Partitions::Reduction(mut source) => source.drain_count(),
            Partitions::Multiset(mut source) => source.drain_count(),
            Partitions::Bounded(mut source) => source.drain_count(),
            Partitions::Ascending(mut source) => source.drain_count(),
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        match self {
            Partitions::Reduction(source) => source.next().map(Partition::Sequence),
            Partitions::Multiset(source) => source.next().map(Partition::Multiset),
            Partitions::Bounded(source) => source.next().map(Partition::Sequence),
            Partitions::Ascending(source) => source.next().map(Partition::Sequence),
        }
    }
}

impl FusedIterator for Partitions {}

impl From<RecursiveReduction> for Partitions {
    fn from(source: RecursiveReduction) -> Partitions {
        Partitions::Reduction(source)
    }
}

impl From<MultisetPartitions> for Partitions {
    fn from(source: MultisetPartitions) -> Partitions {
        Partitions::Multiset(source)
    }
}

impl From<BoundedPartitions> for Partitions {
    fn from(source: BoundedPartitions) -> Partitions {
        Partitions::Bounded(source)
    }
}

impl From<AscendingCompositions> for Partitions {
    fn from(source: AscendingCompositions) -> Partitions {
        Partitions::Ascending(source)
    }
}

/// Enumerates every partition of `n` with the chosen strategy.
///
/// Arguments are validated here, before any partition is produced: a negative `n` is an
/// `Error::InvalidArgument`. `n = 0` yields exactly one, empty, partition under every strategy.
/// The returned sequence is finite and single-pass.
pub fn enumerate_partitions<N: PrimInt + fmt::Display>(n: N, strategy: Strategy) -> Result<Partitions, Error> {
    Ok(match strategy {
        Strategy::Reduction => RecursiveReduction::ascending(n)?.into(),
        Strategy::ReductionDescending => RecursiveReduction::descending(n)?.into(),
        Strategy::Multiset => MultisetPartitions::new(n)?.into(),
        Strategy::Bounded => BoundedPartitions::unbounded(n)?.into(),
        Strategy::AscendingBaseline => AscendingCompositions::baseline(n)?.into(),
        Strategy::AscendingAccelerated => AscendingCompositions::accelerated(n)?.into(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::partition::Partition;
    use crate::test_util::{assert_complete_enumeration, normalize, PARTITION_NUMBERS};

    use super::{enumerate_partitions, Strategy};

    fn collect_normalized(n: usize, strategy: Strategy) -> Vec<Vec<usize>> {
        let partitions: Vec<Vec<usize>> = enumerate_partitions(n, strategy).unwrap()
                                                                            .map(|p| p.to_ascending())
                                                                            .collect();
        normalize(&partitions)
    }

    #[test]
    fn test_counts_and_sums() {
        for n in 0..=30usize {
            for &strategy in Strategy::ALL.iter() {
                let partitions: Vec<Partition> = enumerate_partitions(n, strategy).unwrap().collect();
                assert_eq!(partitions.len(), PARTITION_NUMBERS[n], "{} for n = {}", strategy, n);
                assert!(partitions.iter().all(|p| p.sum() == n));
                let sequences: Vec<Vec<usize>> = partitions.iter().map(|p| p.to_ascending()).collect();
                assert_complete_enumeration(n, &sequences);
            }
        }
    }

    #[test]
    fn test_cross_strategy_equivalence() {
        for n in 0..=25usize {
            let reference = collect_normalized(n, Strategy::Reduction);
            for &strategy in Strategy::ALL.iter() {
                assert_eq!(collect_normalized(n, strategy), reference, "{} differs for n = {}", strategy, n);
            }
        }
    }

    #[test]
    fn test_concrete_cases() {
        for &strategy in Strategy::ALL.iter() {
            assert_eq!(collect_normalized(0, strategy), vec![Vec::<usize>::new()]);
            assert_eq!(collect_normalized(1, strategy), vec![vec![1]]);
            assert_eq!(collect_normalized(4, strategy), vec![
                vec![1, 1, 1, 1],
                vec![1, 1, 2],
                vec![1, 3],
                vec![2, 2],
                vec![4],
            ]);
        }
        let trace: Vec<Partition> = enumerate_partitions(5, Strategy::Reduction).unwrap().collect();
        let expected: Vec<Partition> = vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 1, 2],
            vec![1, 2, 2],
            vec![1, 1, 3],
            vec![2, 3],
            vec![1, 4],
            vec![5],
        ].into_iter().map(Partition::from).collect();
        assert_eq!(trace, expected);
    }

    #[test]
    fn test_element_forms() {
        for &strategy in Strategy::ALL.iter() {
            for p in enumerate_partitions(6, strategy).unwrap() {
                match p {
                    Partition::Multiset(_) => assert!(strategy.emits_multisets()),
                    Partition::Sequence(_) => assert!(!strategy.emits_multisets()),
                }
            }
        }
    }

    #[test]
    fn test_negative_n_is_rejected_up_front() {
        for &strategy in Strategy::ALL.iter() {
            match enumerate_partitions(-1i32, strategy) {
                Err(e) => assert!(e.is_invalid_argument()),
                Ok(_) => panic!("{} accepted a negative n", strategy),
            }
        }
    }

    #[test]
    fn test_count_remaining() {
        for &strategy in Strategy::ALL.iter() {
            let mut partitions = enumerate_partitions(12, strategy).unwrap();
            assert_eq!(partitions.target(), 12);
            partitions.next();
            partitions.next();
            assert_eq!(partitions.count_remaining(), PARTITION_NUMBERS[12] - 2);
        }
    }

    #[test]
    fn test_parse_strategy() {
        for &strategy in Strategy::ALL.iter() {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("Ascending_Accelerated".parse::<Strategy>().unwrap(), Strategy::AscendingAccelerated);
        assert!("quadratic".parse::<Strategy>().unwrap_err().is_invalid_argument());
        let names: HashSet<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Strategy::ALL.len());
    }
}
