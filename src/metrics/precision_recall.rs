//! Precision and Recall calculation.

/// Calculate precision as the share of predictions that were matched.
///
/// Returns 0.0 when there are no predictions.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::precision_recall::calculate_precision;
///
/// assert_eq!(calculate_precision(8, 10), 0.8);
/// assert_eq!(calculate_precision(0, 0), 0.0);
/// ```
pub fn calculate_precision(true_positives: usize, total_predictions: usize) -> f64 {
    if total_predictions == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let precision = true_positives as f64 / total_predictions as f64;

    debug_assert!(
        (0.0..=1.0).contains(&precision),
        "Precision must be between 0 and 1, got {precision}"
    );

    precision
}

/// Calculate recall as the share of ground truth boxes that were matched.
///
/// Returns 0.0 when there is no ground truth.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::precision_recall::calculate_recall;
///
/// assert_eq!(calculate_recall(3, 4), 0.75);
/// assert_eq!(calculate_recall(0, 0), 0.0);
/// ```
pub fn calculate_recall(true_positives: usize, total_ground_truth: usize) -> f64 {
    if total_ground_truth == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let recall = true_positives as f64 / total_ground_truth as f64;

    debug_assert!(
        (0.0..=1.0).contains(&recall),
        "Recall must be between 0 and 1, got {recall}"
    );

    recall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_precision_recall() {
        assert_eq!(calculate_precision(10, 10), 1.0);
        assert_eq!(calculate_recall(10, 10), 1.0);
    }

    #[test]
    fn test_zero_precision() {
        assert_eq!(calculate_precision(0, 10), 0.0);
        assert_eq!(calculate_recall(0, 5), 0.0);
    }

    #[test]
    fn test_precision_recall_values() {
        assert!((calculate_precision(8, 10) - 0.8).abs() < 1e-10);
        assert!((calculate_recall(8, 11) - 8.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_denominators() {
        assert_eq!(calculate_precision(0, 0), 0.0);
        assert_eq!(calculate_recall(0, 0), 0.0);
    }
}
