//! Evaluation report types and text rendering.

use crate::stats::EvaluationStats;
use crate::types::ClassMetrics;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Final counts and rates for one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassReport {
    pub total_ground_truth: usize,
    pub total_predictions: usize,
    pub true_positives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl ClassReport {
    pub fn from_metrics(metrics: &ClassMetrics) -> Self {
        Self {
            total_ground_truth: metrics.total_ground_truth,
            total_predictions: metrics.total_predictions,
            true_positives: metrics.true_positives,
            precision: metrics.precision(),
            recall: metrics.recall(),
            f1_score: metrics.f1_score(),
        }
    }
}

/// Results of an evaluation run, keyed by class label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub files_processed: usize,
    pub classes: BTreeMap<String, ClassReport>,
    /// Counts summed over all classes.
    pub overall: ClassReport,
    pub stats: EvaluationStats,
}

impl EvaluationReport {
    pub fn class(&self, label: &str) -> Option<&ClassReport> {
        self.classes.get(&label.to_lowercase())
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report as human-readable text.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Final Evaluation Results ===")?;
        writeln!(f, "Total files processed: {}", self.files_processed)?;
        if self.stats.total_skipped() > 0 {
            writeln!(
                f,
                "Files skipped: {} (missing predictions: {}, malformed: {}, unreadable: {})",
                self.stats.total_skipped(),
                self.stats.skipped_missing_pair,
                self.stats.skipped_malformed,
                self.stats.skipped_unreadable
            )?;
        }

        for (label, class) in &self.classes {
            writeln!(f)?;
            writeln!(f, "Metrics for {}:", label.to_uppercase())?;
            write!(f, "{class}")?;
        }

        if !self.classes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Overall:")?;
            write!(f, "{}", self.overall)?;
        }

        Ok(())
    }
}

impl fmt::Display for ClassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Total ground truth boxes: {}", self.total_ground_truth)?;
        writeln!(f, "  Total predictions: {}", self.total_predictions)?;
        writeln!(
            f,
            "  True positives (Number of correctly predicted boxes): {}",
            self.true_positives
        )?;
        writeln!(f, "  Precision: {:.3}", self.precision)?;
        writeln!(f, "  Recall: {:.3}", self.recall)?;
        writeln!(f, "  F1-score: {:.3}", self.f1_score)
    }
}
