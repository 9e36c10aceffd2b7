//! Evaluation run configuration.

use crate::error::{EvalError, Result};
use crate::matching::DEFAULT_IOU_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix joining a ground truth file name to its prediction file name.
pub const DEFAULT_PREDICTION_PREFIX: &str = "predictions_";

#[derive(Debug, Deserialize)]
struct ConfigTable {
    evaluation: EvalConfig,
}

/// Settings for a directory evaluation run.
///
/// Can be loaded from a TOML file with an `[evaluation]` table. Missing keys
/// fall back to the defaults.
///
/// ```toml
/// [evaluation]
/// annotations_dir = "./backend/annotations"
/// predictions_dir = "./backend/predictions"
/// iou_threshold = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub annotations_dir: PathBuf,
    pub predictions_dir: PathBuf,
    pub iou_threshold: f64,
    pub prediction_prefix: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            annotations_dir: PathBuf::from("./backend/annotations"),
            predictions_dir: PathBuf::from("./backend/predictions"),
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            prediction_prefix: DEFAULT_PREDICTION_PREFIX.to_string(),
        }
    }
}

impl EvalConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(annotations_dir: P, predictions_dir: Q) -> Self {
        Self {
            annotations_dir: annotations_dir.into(),
            predictions_dir: predictions_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_iou_threshold(mut self, iou_threshold: f64) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let table: ConfigTable = toml::from_str(toml_str)?;
        table.evaluation.validate()?;
        Ok(table.evaluation)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let toml_str = fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str)
    }

    /// Check that the threshold lies in [0.0, 1.0].
    pub fn validate(&self) -> Result<()> {
        validate_iou_threshold(self.iou_threshold)
    }
}

/// Reject IoU thresholds that are not finite or fall outside [0.0, 1.0].
pub fn validate_iou_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(EvalError::InvalidThreshold(format!(
            "IoU threshold must be between 0.0 and 1.0, got {threshold}"
        )));
    }
    Ok(())
}
