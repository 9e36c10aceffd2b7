//! Core data types for labeled boxes and per-class counters.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box stored by its corners.
///
/// Boxes are built from an origin `(x, y)` and a size `(width, height)`:
/// - `x1`, `y1`: top-left corner
/// - `x2 = x1 + width`, `y2 = y1 + height`: bottom-right corner
///
/// Negative sizes are clamped to zero, so `x2 >= x1` and `y2 >= y1` always
/// hold. A zero-area box is valid and overlaps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl BoundingBox {
    /// Create a new bounding box from origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width.max(0.0),
            y2: y + height.max(0.0),
        }
    }

    /// Create a bounding box from its corners, reordering them if needed.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if the bounding box has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// The overlapping rectangle of two boxes, if it has positive area.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let left = self.x1.max(other.x1);
        let top = self.y1.max(other.y1);
        let right = self.x2.min(other.x2);
        let bottom = self.y2.min(other.y2);

        if right <= left || bottom <= top {
            return None;
        }

        Some(BoundingBox {
            x1: left,
            y1: top,
            x2: right,
            y2: bottom,
        })
    }
}

/// A bounding box tagged with a class label.
///
/// Labels are lower-cased on construction, so matching between ground truth
/// and predictions is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledBox {
    pub label: String,
    pub bbox: BoundingBox,
}

impl LabeledBox {
    pub fn new(label: &str, bbox: BoundingBox) -> Self {
        Self {
            label: label.to_lowercase(),
            bbox,
        }
    }
}

/// Running counters for a single class.
///
/// Rates are derived from the integer counters on demand so that
/// accumulating many files never drifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub total_ground_truth: usize,
    pub total_predictions: usize,
    pub true_positives: usize,
}

impl ClassMetrics {
    /// Create counters with all values at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another set of counters to this one.
    pub fn add(&mut self, other: &ClassMetrics) {
        self.total_ground_truth += other.total_ground_truth;
        self.total_predictions += other.total_predictions;
        self.true_positives += other.true_positives;
    }

    /// Unmatched or excess predictions.
    pub fn false_positives(&self) -> usize {
        self.total_predictions.saturating_sub(self.true_positives)
    }

    /// Ground truth boxes no prediction was matched to.
    pub fn false_negatives(&self) -> usize {
        self.total_ground_truth.saturating_sub(self.true_positives)
    }

    pub fn precision(&self) -> f64 {
        crate::metrics::calculate_precision(self.true_positives, self.total_predictions)
    }

    pub fn recall(&self) -> f64 {
        crate::metrics::calculate_recall(self.true_positives, self.total_ground_truth)
    }

    pub fn f1_score(&self) -> f64 {
        crate::metrics::calculate_f1_score(self.precision(), self.recall())
    }
}
