use std::fmt;

/// A partition in multiset form: `(part, multiplicity)` pairs ordered by strictly decreasing part.
/// Every multiplicity is at least 1 and the parts times their multiplicities sum to the partitioned integer.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Multiset {
    pub(crate) entries: Vec<(usize, usize)>
}

impl Multiset {
    pub fn new() -> Multiset {
        Multiset {
            entries: Vec::new()
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Multiset {
        Multiset {
            entries: Vec::with_capacity(capacity)
        }
    }

    /// Builds the multiset from parts listed in any order. Zero parts are ignored.
    pub fn from_parts(parts: &[usize]) -> Multiset {
        let mut sorted: Vec<usize> = parts.iter().cloned().filter(|&p| p > 0).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let mut entries: Vec<(usize, usize)> = Vec::new();
        for part in sorted {
            match entries.last_mut() {
                Some(entry) if entry.0 == part => entry.1 += 1,
                _ => entries.push((part, 1))
            }
        }
        Multiset {
            entries
        }
    }

    pub fn num_distinct_parts(&self) -> usize {
        self.entries.len()
    }

    pub fn num_parts(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    pub fn sum(&self) -> usize {
        self.entries.iter().map(|&(part, count)| part * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn multiplicity(&self, part: usize) -> usize {
        self.entries
            .iter()
            .find(|&&(p, _)| p == part)
            .map_or(0, |&(_, count)| count)
    }

    /// The smallest part together with its multiplicity.
    pub fn smallest(&self) -> Option<(usize, usize)> {
        self.entries.last().cloned()
    }

    pub fn largest(&self) -> Option<(usize, usize)> {
        self.entries.first().cloned()
    }

    /// Iterates over `(part, multiplicity)` from the largest part to the smallest.
    pub fn iter(&self) -> MultisetIter<'_> {
        MultisetIter {
            iter: self.entries.iter()
        }
    }

    /// Expands the multiset into its non-decreasing sequence form.
    pub fn to_ascending(&self) -> Vec<usize> {
        let mut parts = Vec::with_capacity(self.num_parts());
        for &(part, count) in self.entries.iter().rev() {
            parts.extend(std::iter::repeat(part).take(count));
        }
        parts
    }
}

pub struct MultisetIter<'a> {
    iter: std::slice::Iter<'a, (usize, usize)>,
}

impl<'a> Iterator for MultisetIter<'a> {
    type Item = (usize, usize);
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl fmt::Display for Multiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        let terms: Vec<String> = self.iter().map(|(part, count)| format!("{}^{}", part, count)).collect();
        write!(f, "{}", terms.join(" "))
    }
}

/// One emitted partition, in the representation native to the strategy that produced it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Partition {
    /// parts listed in non-decreasing or non-increasing order, depending on the strategy
    Sequence(Vec<usize>),
    Multiset(Multiset),
}

impl Partition {
    pub fn sum(&self) -> usize {
        match self {
            Partition::Sequence(parts) => parts.iter().sum(),
            Partition::Multiset(multiset) => multiset.sum()
        }
    }

    pub fn num_parts(&self) -> usize {
        match self {
            Partition::Sequence(parts) => parts.len(),
            Partition::Multiset(multiset) => multiset.num_parts()
        }
    }

    /// The normalized form used to compare partitions across representations.
    pub fn to_ascending(&self) -> Vec<usize> {
        match self {
            Partition::Sequence(parts) => {
                let mut sorted = parts.clone();
                sorted.sort_unstable();
                sorted
            }
            Partition::Multiset(multiset) => multiset.to_ascending()
        }
    }

    pub fn to_multiset(&self) -> Multiset {
        match self {
            Partition::Sequence(parts) => Multiset::from_parts(parts),
            Partition::Multiset(multiset) => multiset.clone()
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Partition::Sequence(parts) if parts.is_empty() => write!(f, "(empty)"),
            Partition::Sequence(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", parts.join(" "))
            }
            Partition::Multiset(multiset) => write!(f, "{}", multiset)
        }
    }
}

impl From<Vec<usize>> for Partition {
    fn from(parts: Vec<usize>) -> Partition {
        Partition::Sequence(parts)
    }
}

impl From<Multiset> for Partition {
    fn from(multiset: Multiset) -> Partition {
        Partition::Multiset(multiset)
    }
}
