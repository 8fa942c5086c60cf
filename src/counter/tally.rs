//! Line tallies

use std::collections::HashMap;

use crate::core::model::CountEntry;

/// Occurrence counts of trimmed lines
#[derive(Debug, Clone, Default)]
pub struct LineCounts {
    counts: HashMap<String, u64>,
    total: u64,
}

impl LineCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one raw line, trimmed
    pub fn add(&mut self, line: &str) {
        let line = line.trim();
        self.total += 1;
        match self.counts.get_mut(line) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(line.to_string(), 1);
            }
        }
    }

    /// Occurrences of `line` (zero when never seen)
    pub fn get(&self, line: &str) -> u64 {
        self.counts.get(line).copied().unwrap_or_default()
    }

    /// Number of lines counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct trimmed lines
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Entries sorted ascending by count, ties broken by line text
    pub fn into_sorted(self) -> Vec<CountEntry> {
        let mut entries: Vec<CountEntry> = self
            .counts
            .into_iter()
            .map(|(line, count)| CountEntry::new(line, count))
            .collect();
        entries.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.line.cmp(&b.line)));
        entries
    }
}

impl<S: AsRef<str>> Extend<S> for LineCounts {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for line in iter {
            self.add(line.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LineCounts {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut counts = LineCounts::new();
        counts.extend(iter);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_trimmed_lines() {
        let counts: LineCounts = ["a", "b", "a", " a "].into_iter().collect();
        assert_eq!(counts.get("a"), 3);
        assert_eq!(counts.get("b"), 1);
        assert_eq!(counts.get("c"), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.distinct(), 2);
    }

    #[test]
    fn test_sorted_by_count_then_text() {
        let counts: LineCounts = ["a", "b", "a", " a "].into_iter().collect();
        assert_eq!(
            counts.into_sorted(),
            vec![CountEntry::new("b", 1), CountEntry::new("a", 3)]
        );
    }

    #[test]
    fn test_ties_sorted_lexicographically() {
        let counts: LineCounts = ["zeta", "beta", "alpha", "beta", "zeta", "gamma"]
            .into_iter()
            .collect();
        let sorted: Vec<(u64, String)> = counts
            .into_sorted()
            .into_iter()
            .map(|e| (e.count, e.line))
            .collect();
        assert_eq!(
            sorted,
            vec![
                (1, "alpha".to_string()),
                (1, "gamma".to_string()),
                (2, "beta".to_string()),
                (2, "zeta".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_lines_collapse_to_empty_string() {
        let counts: LineCounts = ["", "   ", "\t"].into_iter().collect();
        assert_eq!(counts.into_sorted(), vec![CountEntry::new("", 3)]);
    }

    #[test]
    fn test_sum_of_counts_equals_total() {
        let input: Vec<String> = (0..200).map(|i| format!("k{}", i % 7)).collect();
        let counts: LineCounts = input.iter().collect();
        let total = counts.total();
        let sorted = counts.into_sorted();
        assert_eq!(sorted.iter().map(|e| e.count).sum::<u64>(), total);
        assert_eq!(total, 200);
        assert!(sorted
            .windows(2)
            .all(|w| (w[0].count, &w[0].line) < (w[1].count, &w[1].line)));
    }

    #[test]
    fn test_empty() {
        let counts = LineCounts::new();
        assert!(counts.into_sorted().is_empty());
    }
}
