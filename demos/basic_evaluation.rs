//! Basic evaluation example demonstrating core functionality.

use detection_eval::{
    load_annotations_from_str, load_predictions_from_str, match_boxes,
    metrics::iou::calculate_iou, BoundingBox, MetricsAggregator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Detection Evaluation Example ===\n");

    // Example 1: IoU Calculation
    println!("1. IoU Calculation");
    let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let bbox2 = BoundingBox::new(1.0, 1.0, 10.0, 10.0);
    println!("   IoU of a box shifted by one pixel: {:.4}", calculate_iou(&bbox1, &bbox2));
    println!();

    // Example 2: Load ground truth
    println!("2. Loading Annotations");
    let ground_truth = load_annotations_from_str(
        r#"{
        "annotations": [
            {"tag": "Button", "x": 100, "y": 100, "width": 200, "height": 150},
            {"tag": "Input", "x": 350, "y": 200, "width": 100, "height": 120},
            {"tag": "Button", "x": 500, "y": 40, "width": 80, "height": 30}
        ]
    }"#,
    )?;
    println!("   Loaded {} ground truth boxes", ground_truth.len());
    println!();

    // Example 3: Load predictions
    println!("3. Loading Predictions");
    let predictions = load_predictions_from_str(
        r#"{
        "predictions": [
            {"type": "button", "coordinates": {"x": 105, "y": 98, "width": 195, "height": 155}},
            {"type": "input", "coordinates": {"x": 348, "y": 198, "width": 105, "height": 125}},
            {"type": "dropdown", "coordinates": {"x": 50, "y": 50, "width": 80, "height": 90}}
        ]
    }"#,
    )?;
    println!("   Loaded {} predictions", predictions.len());
    println!();

    // Example 4: Matching
    println!("4. Matching at IoU > 0.5");
    let file_match = match_boxes(&ground_truth, &predictions, 0.5);
    for m in &file_match.matches {
        println!(
            "   ground truth #{} <-> prediction #{} ({}, IoU {:.3})",
            m.ground_truth_index, m.prediction_index, m.label, m.iou
        );
    }
    println!();

    // Example 5: Aggregation and report
    println!("5. Report");
    let mut aggregator = MetricsAggregator::new();
    aggregator.fold_file(&file_match.counts);
    print!("{}", aggregator.report().render_text());

    Ok(())
}
