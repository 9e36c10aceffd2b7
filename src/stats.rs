//! Statistics tracking for an evaluation run
//!
//! Counts how many ground truth files were found, how many were evaluated,
//! and why the rest were skipped.

use serde::{Deserialize, Serialize};

/// Statistics collected while walking and evaluating file pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Number of ground truth files found
    pub files_found: usize,

    /// Number of file pairs evaluated and folded into the totals
    pub files_processed: usize,

    /// Number of ground truth files without a prediction file
    pub skipped_missing_pair: usize,

    /// Number of file pairs skipped because either file could not be parsed
    pub skipped_malformed: usize,

    /// Number of file pairs skipped because either file could not be read
    #[serde(default)]
    pub skipped_unreadable: usize,
}

impl EvaluationStats {
    /// Create a new `EvaluationStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that was found and evaluated
    pub fn add_processed(&mut self) {
        self.files_found += 1;
        self.files_processed += 1;
    }

    /// Record a ground truth file skipped for lack of predictions
    pub fn skip_missing_pair(&mut self) {
        self.files_found += 1;
        self.skipped_missing_pair += 1;
    }

    /// Record a file pair skipped due to malformed input
    pub fn skip_malformed(&mut self) {
        self.files_found += 1;
        self.skipped_malformed += 1;
    }

    /// Record a file pair skipped because it could not be read
    pub fn skip_unreadable(&mut self) {
        self.files_found += 1;
        self.skipped_unreadable += 1;
    }

    /// Calculate the total number of skipped files
    pub fn total_skipped(&self) -> usize {
        self.skipped_missing_pair + self.skipped_malformed + self.skipped_unreadable
    }

    /// Combine counters from another run segment
    pub fn merge(&mut self, other: &EvaluationStats) {
        self.files_found += other.files_found;
        self.files_processed += other.files_processed;
        self.skipped_missing_pair += other.skipped_missing_pair;
        self.skipped_malformed += other.skipped_malformed;
        self.skipped_unreadable += other.skipped_unreadable;
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "EvaluationStats {{ found: {}, processed: {}, skipped: {} (missing pair: {}, malformed: {}, unreadable: {}) }}",
            self.files_found,
            self.files_processed,
            self.total_skipped(),
            self.skipped_missing_pair,
            self.skipped_malformed,
            self.skipped_unreadable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = EvaluationStats::new();
        assert_eq!(stats.files_found, 0);
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.total_skipped(), 0);
    }

    #[test]
    fn test_skip_counters() {
        let mut stats = EvaluationStats::new();
        stats.add_processed();
        stats.skip_missing_pair();
        stats.skip_malformed();
        stats.skip_malformed();
        stats.skip_unreadable();

        assert_eq!(stats.skipped_missing_pair, 1);
        assert_eq!(stats.skipped_malformed, 2);
        assert_eq!(stats.skipped_unreadable, 1);
        assert_eq!(stats.total_skipped(), 4);
        assert_eq!(stats.files_found, 5);
        assert_eq!(stats.files_processed, 1);
    }

    #[test]
    fn test_merge_sums_counters() {
        let mut left = EvaluationStats::new();
        left.add_processed();
        left.skip_missing_pair();
        let mut right = EvaluationStats::new();
        right.add_processed();
        right.skip_unreadable();

        left.merge(&right);
        assert_eq!(left.files_found, 4);
        assert_eq!(left.files_processed, 2);
        assert_eq!(left.skipped_missing_pair, 1);
        assert_eq!(left.skipped_unreadable, 1);
    }

    #[test]
    fn test_summary_string() {
        let mut stats = EvaluationStats::new();
        stats.files_found = 5;
        stats.files_processed = 4;
        stats.skipped_missing_pair = 1;

        let summary = stats.summary_string();
        assert!(summary.contains("found: 5"));
        assert!(summary.contains("processed: 4"));
        assert!(summary.contains("missing pair: 1"));
    }
}
