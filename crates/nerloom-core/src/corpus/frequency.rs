//! # Frequency Tables
//!
//! Occurrence counts for words and labels, and the ranking used to pick the
//! vocabulary kept after pruning.

use std::collections::{HashMap, HashSet};

/// Token occurrence counts accumulated while scanning a corpus.
///
/// Counts only ever grow; a table lives for a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`.
    pub fn observe(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Occurrences of `token`, zero if never seen.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(token, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Tokens ordered most frequent first. See [`rank_by_frequency`].
    pub fn ranked(&self) -> Vec<&str> {
        rank_by_frequency(self)
    }

    /// The `k` highest ranked tokens as a set for membership tests.
    pub fn top(&self, k: usize) -> HashSet<&str> {
        self.ranked().into_iter().take(k).collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for token in iter {
            table.observe(token);
        }
        table
    }
}

/// Order the tokens of `table` most frequent first.
///
/// `(count, token)` pairs are sorted ascending and the result reversed, so
/// equal counts come out in descending token order. Rankings are therefore
/// deterministic regardless of hash order.
pub fn rank_by_frequency(table: &FrequencyTable) -> Vec<&str> {
    let mut pairs: Vec<(usize, &str)> = table.iter().map(|(token, count)| (count, token)).collect();
    pairs.sort_unstable();
    pairs.reverse();
    pairs.into_iter().map(|(_, token)| token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(token, count) in entries {
            for _ in 0..count {
                table.observe(token);
            }
        }
        table
    }

    #[test]
    fn test_ranking_breaks_ties_by_descending_key() {
        let freqs = table(&[("a", 2), ("b", 2), ("c", 1)]);
        assert_eq!(rank_by_frequency(&freqs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ranking_orders_by_count_first() {
        let freqs = table(&[("the", 5), ("zebra", 1), ("apple", 3)]);
        assert_eq!(freqs.ranked(), vec!["the", "apple", "zebra"]);
    }

    #[test]
    fn test_ranking_uses_byte_order_for_ties() {
        let freqs = table(&[("Zurich", 1), ("apple", 1), ("York", 1)]);
        assert_eq!(freqs.ranked(), vec!["apple", "Zurich", "York"]);
    }

    #[test]
    fn test_empty_table() {
        let freqs = FrequencyTable::new();
        assert!(freqs.is_empty());
        assert!(freqs.ranked().is_empty());
        assert!(freqs.top(10).is_empty());
    }

    #[test]
    fn test_observe_and_count() {
        let freqs: FrequencyTable = ["New", "York", "New"].into_iter().collect();
        assert_eq!(freqs.count("New"), 2);
        assert_eq!(freqs.count("York"), 1);
        assert_eq!(freqs.count("Boston"), 0);
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs.total(), 3);
    }

    #[test]
    fn test_top_k() {
        let freqs = table(&[("a", 2), ("b", 2), ("c", 1)]);
        let top = freqs.top(2);
        assert_eq!(top.len(), 2);
        assert!(top.contains("a") && top.contains("b"));

        let tie = freqs.top(1);
        assert!(tie.contains("b"));
        assert_eq!(freqs.top(10).len(), 3);
    }
}
