//! Greedy class-constrained matching of predictions to ground truth.

use crate::metrics::iou::calculate_iou;
use crate::types::{ClassMetrics, LabeledBox};
use serde::Serialize;
use std::collections::HashMap;

/// IoU threshold used when none is configured.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// A ground truth box paired with the prediction that detected it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub ground_truth_index: usize,
    pub prediction_index: usize,
    pub label: String,
    pub iou: f64,
}

/// Per-class counters for a single file.
pub type FileCounts = HashMap<String, ClassMetrics>;

/// Outcome of matching one file's predictions against its ground truth.
#[derive(Debug, Clone, Default)]
pub struct FileMatch {
    /// Accepted matches, in ground truth order.
    pub matches: Vec<Match>,
    /// Counters for every class seen in either list.
    pub counts: FileCounts,
}

impl FileMatch {
    pub fn true_positives(&self) -> usize {
        self.matches.len()
    }
}

/// Match predictions to ground truth boxes for a single file.
///
/// Ground truth boxes are visited in order. Each one claims the unclaimed
/// prediction with the same label and the highest IoU, provided that IoU is
/// strictly greater than `iou_threshold`. A claimed prediction is never
/// considered again, so an earlier ground truth box wins a prediction that
/// several boxes would like to claim. Among predictions with equal IoU the
/// lowest index wins.
///
/// Unmatched predictions are not listed; they show up as
/// `total_predictions - true_positives` in the counts.
///
/// # Example
///
/// ```
/// use detection_eval::matching::match_boxes;
/// use detection_eval::types::{BoundingBox, LabeledBox};
///
/// let gt = vec![LabeledBox::new("button", BoundingBox::new(0.0, 0.0, 10.0, 10.0))];
/// let preds = vec![LabeledBox::new("Button", BoundingBox::new(1.0, 1.0, 10.0, 10.0))];
///
/// let result = match_boxes(&gt, &preds, 0.5);
/// assert_eq!(result.true_positives(), 1);
/// assert_eq!(result.counts["button"].true_positives, 1);
/// ```
pub fn match_boxes(
    ground_truth: &[LabeledBox],
    predictions: &[LabeledBox],
    iou_threshold: f64,
) -> FileMatch {
    let mut counts = count_boxes(ground_truth, predictions);
    let mut claimed = vec![false; predictions.len()];
    let mut matches = Vec::new();

    for (gt_idx, gt) in ground_truth.iter().enumerate() {
        let mut best_iou = iou_threshold;
        let mut best_pred_idx: Option<usize> = None;

        for (pred_idx, pred) in predictions.iter().enumerate() {
            if claimed[pred_idx] || pred.label != gt.label {
                continue;
            }

            let iou = calculate_iou(&gt.bbox, &pred.bbox);
            if iou > best_iou {
                best_iou = iou;
                best_pred_idx = Some(pred_idx);
            }
        }

        if let Some(pred_idx) = best_pred_idx {
            claimed[pred_idx] = true;
            counts.entry(gt.label.clone()).or_default().true_positives += 1;
            matches.push(Match {
                ground_truth_index: gt_idx,
                prediction_index: pred_idx,
                label: gt.label.clone(),
                iou: best_iou,
            });
        }
    }

    FileMatch { matches, counts }
}

/// Count true positives for a single file at the given threshold.
pub fn count_true_positives(
    ground_truth: &[LabeledBox],
    predictions: &[LabeledBox],
    iou_threshold: f64,
) -> usize {
    match_boxes(ground_truth, predictions, iou_threshold).true_positives()
}

/// Initialize counters for every class in either list with box totals.
fn count_boxes(ground_truth: &[LabeledBox], predictions: &[LabeledBox]) -> FileCounts {
    let mut counts = FileCounts::new();

    for gt in ground_truth {
        counts.entry(gt.label.clone()).or_default().total_ground_truth += 1;
    }
    for pred in predictions {
        counts.entry(pred.label.clone()).or_default().total_predictions += 1;
    }

    counts
}
