//! JSON loading for ground truth annotation and prediction files.
//!
//! Both formats are parsed through strict serde schemas. A missing key, a
//! non-numeric coordinate or a non-finite value is reported as
//! [`EvalError::MalformedInput`] before any matching happens. Keys not named
//! in the schema are ignored.

use crate::error::{EvalError, Result};
use crate::types::{BoundingBox, LabeledBox};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ground truth document: `{"annotations": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub annotations: Vec<AnnotationEntry>,
}

/// A single ground truth box with its class tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    pub tag: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Prediction document: `{"predictions": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDocument {
    pub predictions: Vec<PredictionEntry>,
}

/// A single predicted box with its class type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinates,
}

/// Origin and size of a predicted box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AnnotationDocument {
    /// Convert the document into lower-cased labeled boxes.
    pub fn into_boxes(self, source_name: &str) -> Result<Vec<LabeledBox>> {
        self.annotations
            .into_iter()
            .enumerate()
            .map(|(idx, ann)| {
                let bbox = checked_bbox(source_name, idx, ann.x, ann.y, ann.width, ann.height)?;
                Ok(LabeledBox::new(&ann.tag, bbox))
            })
            .collect()
    }
}

impl PredictionDocument {
    /// Convert the document into lower-cased labeled boxes.
    pub fn into_boxes(self, source_name: &str) -> Result<Vec<LabeledBox>> {
        self.predictions
            .into_iter()
            .enumerate()
            .map(|(idx, pred)| {
                let c = pred.coordinates;
                let bbox = checked_bbox(source_name, idx, c.x, c.y, c.width, c.height)?;
                Ok(LabeledBox::new(&pred.kind, bbox))
            })
            .collect()
    }
}

/// Load ground truth boxes from an annotation JSON file.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened and `MalformedInput` if
/// it does not match the annotation schema.
///
/// # Example
///
/// ```no_run
/// use detection_eval::loader::load_annotations_from_file;
///
/// let boxes = load_annotations_from_file("annotations/screen_1.json").unwrap();
/// println!("Loaded {} ground truth boxes", boxes.len());
/// ```
pub fn load_annotations_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledBox>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let reader = BufReader::new(File::open(path)?);
    let document: AnnotationDocument = serde_json::from_reader(reader)
        .map_err(|e| parse_error(&source_name, e))?;

    document.into_boxes(&source_name)
}

/// Load ground truth boxes from an annotation JSON string.
///
/// # Example
///
/// ```
/// use detection_eval::loader::load_annotations_from_str;
///
/// let json = r#"{"annotations": [{"tag": "Button", "x": 0, "y": 0, "width": 10, "height": 10}]}"#;
/// let boxes = load_annotations_from_str(json).unwrap();
/// assert_eq!(boxes[0].label, "button");
/// ```
pub fn load_annotations_from_str(json_str: &str) -> Result<Vec<LabeledBox>> {
    let document: AnnotationDocument = serde_json::from_str(json_str)
        .map_err(|e| parse_error("<string>", e))?;

    document.into_boxes("<string>")
}

/// Load predicted boxes from a prediction JSON file.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened and `MalformedInput` if
/// it does not match the prediction schema.
pub fn load_predictions_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledBox>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let reader = BufReader::new(File::open(path)?);
    let document: PredictionDocument = serde_json::from_reader(reader)
        .map_err(|e| parse_error(&source_name, e))?;

    document.into_boxes(&source_name)
}

/// Load predicted boxes from a prediction JSON string.
///
/// # Example
///
/// ```
/// use detection_eval::loader::load_predictions_from_str;
///
/// let json = r#"{"predictions": [
///     {"type": "INPUT", "coordinates": {"x": 5, "y": 5, "width": 20, "height": 8}}
/// ]}"#;
/// let boxes = load_predictions_from_str(json).unwrap();
/// assert_eq!(boxes[0].label, "input");
/// ```
pub fn load_predictions_from_str(json_str: &str) -> Result<Vec<LabeledBox>> {
    let document: PredictionDocument = serde_json::from_str(json_str)
        .map_err(|e| parse_error("<string>", e))?;

    document.into_boxes("<string>")
}

fn checked_bbox(
    source_name: &str,
    idx: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<BoundingBox> {
    if [x, y, width, height].iter().any(|v| !v.is_finite()) {
        return Err(EvalError::malformed(
            source_name,
            format!("entry {idx} has a non-finite coordinate"),
        ));
    }

    Ok(BoundingBox::new(x, y, width, height))
}

/// Read failures stay I/O errors; everything else is malformed input.
fn parse_error(source_name: &str, error: serde_json::Error) -> EvalError {
    if error.is_io() {
        EvalError::IoError(error.into())
    } else {
        EvalError::malformed(source_name, error.to_string())
    }
}
