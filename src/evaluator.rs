//! Main evaluation orchestrator.
//!
//! Each file pair is loaded, matched and folded into a single
//! [`MetricsAggregator`] before the next one starts. A pair that cannot be
//! read or parsed is logged and counted in the run statistics instead of
//! aborting the run.

use crate::aggregator::MetricsAggregator;
use crate::config::{validate_iou_threshold, EvalConfig};
use crate::error::Result;
use crate::loader::{load_annotations_from_file, load_predictions_from_file};
use crate::matching::{match_boxes, FileCounts};
use crate::pairing::{find_file_pairs, FilePair};
use crate::report::EvaluationReport;
use crate::types::LabeledBox;
use tracing::{debug, info, warn};

/// Evaluate in-memory files against each other.
///
/// Every element of `files` is one file's `(ground_truth, predictions)`.
///
/// # Example
///
/// ```
/// use detection_eval::evaluator::evaluate;
/// use detection_eval::types::{BoundingBox, LabeledBox};
///
/// let gt = vec![LabeledBox::new("button", BoundingBox::new(0.0, 0.0, 10.0, 10.0))];
/// let preds = vec![LabeledBox::new("button", BoundingBox::new(1.0, 1.0, 10.0, 10.0))];
///
/// let report = evaluate(&[(gt, preds)], 0.5).unwrap();
/// assert_eq!(report.class("button").unwrap().f1_score, 1.0);
/// ```
pub fn evaluate(
    files: &[(Vec<LabeledBox>, Vec<LabeledBox>)],
    iou_threshold: f64,
) -> Result<EvaluationReport> {
    validate_iou_threshold(iou_threshold)?;

    let mut aggregator = MetricsAggregator::new();
    for (ground_truth, predictions) in files {
        let file_match = match_boxes(ground_truth, predictions, iou_threshold);
        aggregator.fold_file(&file_match.counts);
    }

    Ok(aggregator.report())
}

/// Load and match a single file pair.
///
/// # Errors
///
/// Returns a file-level error if either file cannot be read or parsed.
pub fn evaluate_file_pair(pair: &FilePair, iou_threshold: f64) -> Result<FileCounts> {
    let ground_truth = load_annotations_from_file(&pair.ground_truth)?;
    let predictions = load_predictions_from_file(&pair.predictions)?;

    let file_match = match_boxes(&ground_truth, &predictions, iou_threshold);
    debug!(
        file = %pair.ground_truth.display(),
        ground_truth = ground_truth.len(),
        predictions = predictions.len(),
        true_positives = file_match.true_positives(),
        "matched"
    );

    Ok(file_match.counts)
}

/// Evaluate a list of file pairs, skipping pairs that fail to load.
///
/// File-level errors are logged and counted in the aggregator's run
/// statistics.
///
/// # Errors
///
/// Any error that is not file-level aborts the run.
pub fn evaluate_pairs(pairs: &[FilePair], iou_threshold: f64) -> Result<MetricsAggregator> {
    let mut aggregator = MetricsAggregator::new();

    for pair in pairs {
        info!(file = %pair.ground_truth.display(), "processing");
        match evaluate_file_pair(pair, iou_threshold) {
            Ok(counts) => aggregator.fold_file(&counts),
            Err(e) if e.is_file_level() => {
                warn!(file = %pair.ground_truth.display(), error = %e, "skipping file pair");
                aggregator.record_skipped(&e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(aggregator)
}

/// Evaluate every paired file in the configured directories.
///
/// An empty annotations directory gives a report with zero totals.
///
/// # Errors
///
/// Returns an error if the threshold is invalid or the annotations
/// directory does not exist.
pub fn evaluate_directories(config: &EvalConfig) -> Result<EvaluationReport> {
    config.validate()?;

    let pairing = find_file_pairs(
        &config.annotations_dir,
        &config.predictions_dir,
        &config.prediction_prefix,
    )?;

    let mut aggregator = evaluate_pairs(&pairing.pairs, config.iou_threshold)?;
    for _ in &pairing.missing {
        aggregator.record_missing_pair();
    }

    let stats = aggregator.stats();
    info!(
        found = stats.files_found,
        processed = stats.files_processed,
        skipped = stats.total_skipped(),
        "evaluation finished"
    );

    Ok(aggregator.report())
}
