//! Pairing of ground truth files with their prediction files.

use crate::error::{EvalError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A ground truth file and the prediction file generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub ground_truth: PathBuf,
    pub predictions: PathBuf,
}

/// Result of scanning the annotations directory.
#[derive(Debug, Clone, Default)]
pub struct Pairing {
    /// Pairs whose prediction file exists, sorted by ground truth file name.
    pub pairs: Vec<FilePair>,
    /// Ground truth files with no prediction file.
    pub missing: Vec<PathBuf>,
}

impl Pairing {
    pub fn files_found(&self) -> usize {
        self.pairs.len() + self.missing.len()
    }
}

/// Name of the prediction file for a ground truth file name.
///
/// ```
/// use detection_eval::pairing::prediction_file_name;
///
/// assert_eq!(prediction_file_name("predictions_", "screen.json"), "predictions_screen.json");
/// ```
pub fn prediction_file_name(prefix: &str, ground_truth_name: &str) -> String {
    format!("{prefix}{ground_truth_name}")
}

/// Find every `*.json` ground truth file and its prediction counterpart.
///
/// Files are returned in file name order so runs are reproducible.
/// A missing prediction file is logged and listed in [`Pairing::missing`].
///
/// # Errors
///
/// Returns `DirectoryNotFound` if `annotations_dir` does not exist.
pub fn find_file_pairs(
    annotations_dir: &Path,
    predictions_dir: &Path,
    prefix: &str,
) -> Result<Pairing> {
    if !annotations_dir.is_dir() {
        return Err(EvalError::DirectoryNotFound(annotations_dir.to_path_buf()));
    }

    let mut ground_truth_files: Vec<PathBuf> = fs::read_dir(annotations_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_json(path))
        .collect();
    ground_truth_files.sort();

    let mut pairing = Pairing::default();
    for ground_truth in ground_truth_files {
        let Some(name) = ground_truth.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %ground_truth.display(), "skipping file with non UTF-8 name");
            continue;
        };

        let predictions = predictions_dir.join(prediction_file_name(prefix, name));
        if predictions.is_file() {
            debug!(ground_truth = %ground_truth.display(), predictions = %predictions.display(), "paired");
            pairing.pairs.push(FilePair {
                ground_truth,
                predictions,
            });
        } else {
            let missing = EvalError::MissingPair {
                ground_truth: ground_truth.clone(),
            };
            warn!("{missing}, skipping");
            pairing.missing.push(ground_truth);
        }
    }

    Ok(pairing)
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}
