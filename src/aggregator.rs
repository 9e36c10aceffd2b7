//! Accumulation of per-file counts into run-wide per-class metrics.

use crate::error::EvalError;
use crate::matching::FileCounts;
use crate::report::{ClassReport, EvaluationReport};
use crate::stats::EvaluationStats;
use crate::types::ClassMetrics;
use std::collections::BTreeMap;

/// Running per-class totals for one evaluation run.
///
/// Only integer counters are stored. Precision, recall and F1 are derived
/// when a report is built. Partial aggregators (for example one per worker
/// thread) combine with [`MetricsAggregator::merge`]; since every counter is
/// a plain sum the result does not depend on file or merge order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsAggregator {
    classes: BTreeMap<String, ClassMetrics>,
    stats: EvaluationStats,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's per-class counts to the running totals.
    pub fn fold(&mut self, counts: &FileCounts) {
        for (label, file_metrics) in counts {
            self.classes
                .entry(label.clone())
                .or_default()
                .add(file_metrics);
        }
    }

    /// Count one successfully processed file.
    pub fn record_file(&mut self) {
        self.stats.add_processed();
    }

    /// Fold a file's counts and count it as processed.
    pub fn fold_file(&mut self, counts: &FileCounts) {
        self.fold(counts);
        self.record_file();
    }

    /// Count a ground truth file that had no prediction file.
    pub fn record_missing_pair(&mut self) {
        self.stats.skip_missing_pair();
    }

    /// Count a file pair skipped because of a file-level error.
    ///
    /// Parse failures count as malformed, I/O failures as unreadable.
    pub fn record_skipped(&mut self, error: &EvalError) {
        match error {
            EvalError::IoError(_) => self.stats.skip_unreadable(),
            EvalError::MissingPair { .. } => self.stats.skip_missing_pair(),
            _ => self.stats.skip_malformed(),
        }
    }

    /// Combine another aggregator's totals and run statistics into this one.
    pub fn merge(&mut self, other: &MetricsAggregator) {
        for (label, metrics) in &other.classes {
            self.classes.entry(label.clone()).or_default().add(metrics);
        }
        self.stats.merge(&other.stats);
    }

    pub fn class_metrics(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes.get(&label.to_lowercase())
    }

    /// Labels seen so far, in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn files_processed(&self) -> usize {
        self.stats.files_processed
    }

    pub fn stats(&self) -> &EvaluationStats {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Counters summed over every class (micro average).
    pub fn overall(&self) -> ClassMetrics {
        self.classes
            .values()
            .fold(ClassMetrics::new(), |mut total, metrics| {
                total.add(metrics);
                total
            })
    }

    /// Build a report from the current totals and run statistics.
    pub fn report(&self) -> EvaluationReport {
        let classes = self
            .classes
            .iter()
            .map(|(label, metrics)| (label.clone(), ClassReport::from_metrics(metrics)))
            .collect();

        EvaluationReport {
            files_processed: self.stats.files_processed,
            classes,
            overall: ClassReport::from_metrics(&self.overall()),
            stats: self.stats.clone(),
        }
    }
}
