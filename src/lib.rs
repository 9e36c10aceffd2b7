//! # detection-eval
//!
//! A Rust library for scoring object detection output against ground truth
//! annotations with per-class precision, recall and F1.
//!
//! ## Features
//!
//! - Load ground truth annotation files and prediction files (JSON)
//! - Calculate IoU (Intersection over Union) between bounding boxes
//! - Greedy one-to-one matching per file, constrained to the same class
//! - Accumulate per-class counts over any number of files
//! - Pair annotation and prediction files in two directories and report
//!   the results as text or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use detection_eval::loader::{load_annotations_from_str, load_predictions_from_str};
//! use detection_eval::matching::match_boxes;
//! use detection_eval::MetricsAggregator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ground_truth = load_annotations_from_str(
//!     r#"{"annotations": [{"tag": "Button", "x": 0, "y": 0, "width": 10, "height": 10}]}"#,
//! )?;
//! let predictions = load_predictions_from_str(
//!     r#"{"predictions": [{"type": "button", "coordinates": {"x": 1, "y": 1, "width": 10, "height": 10}}]}"#,
//! )?;
//!
//! let mut aggregator = MetricsAggregator::new();
//! aggregator.fold_file(&match_boxes(&ground_truth, &predictions, 0.5).counts);
//!
//! let report = aggregator.report();
//! assert_eq!(report.class("button").unwrap().recall, 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## File Formats
//!
//! Ground truth:
//!
//! ```json
//! { "annotations": [ { "tag": "button", "x": 0, "y": 0, "width": 10, "height": 10 } ] }
//! ```
//!
//! Predictions, stored as `predictions_<ground truth file name>`:
//!
//! ```json
//! { "predictions": [ { "type": "button", "coordinates": { "x": 0, "y": 0, "width": 10, "height": 10 } } ] }
//! ```

pub mod error;
pub mod types;
pub mod metrics;
pub mod matching;
pub mod aggregator;
pub mod loader;
pub mod pairing;
pub mod stats;
pub mod report;
pub mod config;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{EvalError, Result};
pub use types::{BoundingBox, ClassMetrics, LabeledBox};
pub use matching::{match_boxes, FileCounts, FileMatch, Match, DEFAULT_IOU_THRESHOLD};
pub use aggregator::MetricsAggregator;
pub use loader::{
    load_annotations_from_file, load_annotations_from_str, load_predictions_from_file,
    load_predictions_from_str,
};
pub use report::{ClassReport, EvaluationReport};
pub use stats::EvaluationStats;
pub use config::EvalConfig;
pub use evaluator::{evaluate, evaluate_directories};
