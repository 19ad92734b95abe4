use std::collections::HashSet;

use crate::ascending::AscendingCompositions;
use crate::error::Error;
use crate::multiset::{max_distinct_parts, MultisetPartitions};
use crate::source::PartitionSource;
use crate::strategy::{enumerate_partitions, Strategy};

/// The outcome of cross-checking every strategy for a single `n`.
#[derive(Clone, PartialEq, Debug)]
pub struct ValidationReport {
    pub n: usize,
    pub counts: Vec<(Strategy, usize)>,
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// the count agreed on by every strategy, if they all agree
    pub fn agreed_count(&self) -> Option<usize> {
        let first = self.counts.first().map(|&(_, count)| count)?;
        if self.counts.iter().all(|&(_, count)| count == first) {
            Some(first)
        } else {
            None
        }
    }
}

/// Runs every strategy for `n` and checks that each one emits partitions summing to `n` with
/// positive parts, lists none twice, and produces the same set as all the others. Also checks that
/// the two ascending variants agree item by item and that the multiset state stays within
/// `max_distinct_parts(n)` entries.
pub fn validate(n: usize) -> Result<ValidationReport, Error> {
    let mut counts = Vec::with_capacity(Strategy::ALL.len());
    let mut failures = Vec::new();
    let mut reference: Option<(Strategy, HashSet<Vec<usize>>)> = None;

    for &strategy in Strategy::ALL.iter() {
        let mut seen = HashSet::new();
        let mut count = 0usize;
        for partition in enumerate_partitions(n, strategy)? {
            count += 1;
            if partition.sum() != n {
                failures.push(format!("{}: {} does not sum to {}", strategy, partition, n));
            }
            let normalized = partition.to_ascending();
            if normalized.contains(&0) {
                failures.push(format!("{}: {} contains a zero part", strategy, partition));
            }
            if !seen.insert(normalized) {
                failures.push(format!("{}: {} emitted more than once", strategy, partition));
            }
        }
        counts.push((strategy, count));

        if let Some((reference_strategy, expected)) = &reference {
            if *expected != seen {
                failures.push(format!("{} and {} enumerate different sets for n = {}",
                                      reference_strategy, strategy, n));
            }
        } else {
            reference = Some((strategy, seen));
        }
    }

    let mut baseline = AscendingCompositions::baseline(n)?;
    let mut accelerated = AscendingCompositions::accelerated(n)?;
    let mut position = 0usize;
    loop {
        match (baseline.advance(), accelerated.advance()) {
            (None, None) => break,
            (Some(b), Some(a)) if b == a => position += 1,
            (b, a) => {
                failures.push(format!("ascending variants diverge at position {}: {:?} vs {:?}", position, b, a));
                break;
            }
        }
    }

    let bound = max_distinct_parts(n);
    let mut multisets = MultisetPartitions::new(n)?;
    while let Some(multiset) = multisets.advance() {
        if multiset.num_distinct_parts() > bound {
            failures.push(format!("multiset state {} exceeds {} distinct parts", multiset, bound));
            break;
        }
    }

    Ok(ValidationReport {
        n,
        counts,
        failures,
    })
}
