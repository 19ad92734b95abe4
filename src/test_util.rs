use std::collections::HashSet;

/// p(n) for n in 0..=30
pub const PARTITION_NUMBERS: [usize; 31] = [
    1, 1, 2, 3, 5, 7, 11, 15, 22, 30,
    42, 56, 77, 101, 135, 176, 231, 297, 385, 490,
    627, 792, 1002, 1255, 1575, 1958, 2436, 3010, 3718, 4565,
    5604,
];

/// Sorts the parts of every partition ascending, then sorts the partitions themselves.
pub fn normalize(partitions: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut normalized: Vec<Vec<usize>> = partitions.iter()
                                                    .map(|p| {
                                                        let mut sorted = p.clone();
                                                        sorted.sort_unstable();
                                                        sorted
                                                    })
                                                    .collect();
    normalized.sort();
    normalized
}

/// Asserts that `partitions` is exactly the set of partitions of `n`, each listed once.
pub fn assert_complete_enumeration(n: usize, partitions: &[Vec<usize>]) {
    assert_eq!(partitions.len(), PARTITION_NUMBERS[n], "wrong number of partitions of {}", n);
    let mut seen = HashSet::new();
    for p in partitions.iter() {
        assert_eq!(p.iter().sum::<usize>(), n, "{:?} does not sum to {}", p, n);
        assert!(p.iter().all(|&part| part > 0), "{:?} contains a zero part", p);
        let mut sorted = p.clone();
        sorted.sort_unstable();
        assert!(seen.insert(sorted), "{:?} emitted more than once for n = {}", p, n);
    }
}

pub fn is_non_decreasing(parts: &[usize]) -> bool {
    parts.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_non_increasing(parts: &[usize]) -> bool {
    parts.windows(2).all(|w| w[0] >= w[1])
}
