//! Integration tests for the complete evaluation pipeline.

use detection_eval::config::EvalConfig;
use detection_eval::evaluator::{evaluate, evaluate_directories};
use detection_eval::types::{BoundingBox, LabeledBox};
use std::fs;
use std::path::PathBuf;

fn labeled(label: &str, x: f64, y: f64, width: f64, height: f64) -> LabeledBox {
    LabeledBox::new(label, BoundingBox::new(x, y, width, height))
}

fn scratch_dirs(name: &str) -> (PathBuf, PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!(
        "detection-eval-integration-{}-{name}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    let annotations = root.join("annotations");
    let predictions = root.join("predictions");
    fs::create_dir_all(&annotations).unwrap();
    fs::create_dir_all(&predictions).unwrap();
    (root, annotations, predictions)
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_shifted_box_same_class_matches() {
    let files = vec![(
        vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
        vec![labeled("button", 1.0, 1.0, 10.0, 10.0)],
    )];

    let report = evaluate(&files, 0.5).unwrap();
    let button = report.class("button").unwrap();

    assert_eq!(button.true_positives, 1);
    assert_eq!(button.precision, 1.0);
    assert_eq!(button.recall, 1.0);
    assert_eq!(button.f1_score, 1.0);
}

#[test]
fn test_class_mismatch_never_matches() {
    let files = vec![(
        vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
        vec![labeled("input", 0.0, 0.0, 10.0, 10.0)],
    )];

    let report = evaluate(&files, 0.5).unwrap();

    let button = report.class("button").unwrap();
    assert_eq!(button.true_positives, 0);
    assert_eq!(button.precision, 0.0);
    assert_eq!(button.recall, 0.0);
    assert_eq!(button.f1_score, 0.0);

    let input = report.class("input").unwrap();
    assert_eq!(input.true_positives, 0);
    assert_eq!(input.total_predictions, 1);
    assert_eq!(input.precision, 0.0);
}

#[test]
fn test_first_ground_truth_claims_shared_prediction() {
    // Both ground truth boxes overlap the one prediction above the threshold
    let files = vec![(
        vec![
            labeled("button", 0.0, 0.0, 10.0, 10.0),
            labeled("button", 0.0, 0.0, 10.0, 10.0),
        ],
        vec![labeled("button", 1.0, 1.0, 10.0, 10.0)],
    )];

    let report = evaluate(&files, 0.5).unwrap();
    let button = report.class("button").unwrap();

    assert_eq!(button.true_positives, 1);
    assert_eq!(button.total_ground_truth, 2);
    assert_eq!(button.recall, 0.5);
    assert_eq!(button.precision, 1.0);
}

#[test]
fn test_empty_predictions() {
    let files = vec![(
        vec![
            labeled("dropdown", 0.0, 0.0, 10.0, 10.0),
            labeled("dropdown", 20.0, 0.0, 10.0, 10.0),
            labeled("dropdown", 40.0, 0.0, 10.0, 10.0),
        ],
        vec![],
    )];

    let report = evaluate(&files, 0.5).unwrap();
    let dropdown = report.class("dropdown").unwrap();

    assert_eq!(dropdown.true_positives, 0);
    assert_eq!(dropdown.total_predictions, 0);
    assert_eq!(dropdown.recall, 0.0);
    assert_eq!(dropdown.precision, 0.0);
    assert_eq!(dropdown.f1_score, 0.0);
}

// ============================================================================
// MULTI-FILE ACCUMULATION
// ============================================================================

#[test]
fn test_totals_accumulate_across_files() {
    let files = vec![
        (
            vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
            vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
        ),
        (
            vec![
                labeled("button", 0.0, 0.0, 10.0, 10.0),
                labeled("input", 50.0, 50.0, 30.0, 10.0),
            ],
            vec![
                labeled("button", 100.0, 100.0, 10.0, 10.0),
                labeled("input", 50.0, 50.0, 30.0, 10.0),
            ],
        ),
    ];

    let report = evaluate(&files, 0.5).unwrap();
    assert_eq!(report.files_processed, 2);

    let button = report.class("button").unwrap();
    assert_eq!(button.total_ground_truth, 2);
    assert_eq!(button.total_predictions, 2);
    assert_eq!(button.true_positives, 1);
    assert_eq!(button.precision, 0.5);

    assert_eq!(report.overall.true_positives, 2);
    assert_eq!(report.overall.total_ground_truth, 3);
}

#[test]
fn test_file_order_does_not_change_totals() {
    let a = (
        vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
        vec![labeled("button", 1.0, 1.0, 10.0, 10.0)],
    );
    let b = (
        vec![labeled("input", 0.0, 0.0, 10.0, 10.0)],
        vec![labeled("button", 0.0, 0.0, 10.0, 10.0)],
    );

    let forward = evaluate(&[a.clone(), b.clone()], 0.5).unwrap();
    let backward = evaluate(&[b, a], 0.5).unwrap();
    assert_eq!(forward, backward);
}

// ============================================================================
// DIRECTORY EVALUATION
// ============================================================================

#[test]
fn test_evaluate_directories() {
    let (root, annotations, predictions) = scratch_dirs("full");

    fs::write(
        annotations.join("screen_1.json"),
        r#"{"annotations": [
            {"tag": "Button", "x": 0, "y": 0, "width": 10, "height": 10},
            {"tag": "input", "x": 20, "y": 20, "width": 40, "height": 10}
        ]}"#,
    )
    .unwrap();
    fs::write(
        predictions.join("predictions_screen_1.json"),
        r#"{"predictions": [
            {"type": "button", "coordinates": {"x": 1, "y": 1, "width": 10, "height": 10}},
            {"type": "INPUT", "coordinates": {"x": 200, "y": 200, "width": 40, "height": 10}}
        ]}"#,
    )
    .unwrap();
    // No predictions for this one
    fs::write(
        annotations.join("screen_2.json"),
        r#"{"annotations": [{"tag": "button", "x": 0, "y": 0, "width": 5, "height": 5}]}"#,
    )
    .unwrap();
    // Malformed ground truth
    fs::write(
        annotations.join("screen_3.json"),
        r#"{"annotations": [{"tag": "button", "x": 0}]}"#,
    )
    .unwrap();
    fs::write(
        predictions.join("predictions_screen_3.json"),
        r#"{"predictions": []}"#,
    )
    .unwrap();

    let report = evaluate_directories(&EvalConfig::new(&annotations, &predictions)).unwrap();

    assert_eq!(report.files_processed, 1);
    assert_eq!(report.stats.files_found, 3);
    assert_eq!(report.stats.skipped_missing_pair, 1);
    assert_eq!(report.stats.skipped_malformed, 1);

    let button = report.class("button").unwrap();
    assert_eq!(button.true_positives, 1);
    let input = report.class("input").unwrap();
    assert_eq!(input.true_positives, 0);
    assert_eq!(input.total_predictions, 1);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_evaluate_empty_directory() {
    let (root, annotations, predictions) = scratch_dirs("empty");

    let report = evaluate_directories(&EvalConfig::new(&annotations, &predictions)).unwrap();
    assert_eq!(report.files_processed, 0);
    assert!(report.classes.is_empty());
    assert_eq!(report.overall.f1_score, 0.0);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_custom_threshold_changes_outcome() {
    let (root, annotations, predictions) = scratch_dirs("threshold");

    fs::write(
        annotations.join("a.json"),
        r#"{"annotations": [{"tag": "button", "x": 0, "y": 0, "width": 10, "height": 10}]}"#,
    )
    .unwrap();
    // IoU = 81 / 119 ≈ 0.68
    fs::write(
        predictions.join("predictions_a.json"),
        r#"{"predictions": [{"type": "button", "coordinates": {"x": 1, "y": 1, "width": 10, "height": 10}}]}"#,
    )
    .unwrap();

    let lenient = EvalConfig::new(&annotations, &predictions).with_iou_threshold(0.5);
    let strict = EvalConfig::new(&annotations, &predictions).with_iou_threshold(0.7);

    assert_eq!(evaluate_directories(&lenient).unwrap().overall.true_positives, 1);
    assert_eq!(evaluate_directories(&strict).unwrap().overall.true_positives, 0);

    fs::remove_dir_all(&root).unwrap();
}
