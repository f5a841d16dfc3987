//! Ranking helpers over count buckets.
//!
//! Both rankings sort by count, highest first, with a stable sort so equal
//! counts keep their original order.

use crate::stats::CountMap;

/// Returns up to `n` `(label, count)` pairs, highest count first.
///
/// Equal counts stay in the order the labels were first seen.
pub fn top_n(counts: &CountMap, n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(&str, u64)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

/// Returns the indices of the `n` largest buckets, lowest index first on ties.
pub fn peak_indices(counts: &[u64], n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..counts.len()).collect();
    indices.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
    indices.truncate(n);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(labels: &[&str]) -> CountMap {
        let mut map = CountMap::new();
        for label in labels {
            map.increment(label);
        }
        map
    }

    #[test]
    fn test_top_n_orders_by_count() {
        let map = counts(&["A", "B", "B", "C", "C", "C"]);
        assert_eq!(
            top_n(&map, 10),
            vec![
                ("C".to_string(), 3),
                ("B".to_string(), 2),
                ("A".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let map = counts(&["Z", "Y", "X", "Y", "Z", "X"]);
        let labels: Vec<_> = top_n(&map, 3).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Z", "Y", "X"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let map = counts(&["A", "B", "C", "D"]);
        assert_eq!(top_n(&map, 2).len(), 2);
        assert!(top_n(&map, 0).is_empty());
        assert!(top_n(&CountMap::new(), 5).is_empty());
    }

    #[test]
    fn test_peak_indices() {
        assert_eq!(peak_indices(&[1, 5, 3, 5, 0], 3), vec![1, 3, 2]);
        assert_eq!(peak_indices(&[0, 0, 0], 2), vec![0, 1]);
        assert_eq!(peak_indices(&[4, 2], 6), vec![0, 1]);
    }
}
