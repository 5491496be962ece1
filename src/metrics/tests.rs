use super::*;

#[test]
fn test_accuracy_known_value() {
    let y_true = vec![0, 1, 2, 0, 1, 2];
    let y_pred = vec![0, 2, 1, 0, 0, 1];
    assert!((accuracy(&y_pred, &y_true) - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_perfect_predictions() {
    let y = vec![0, 1, 2, 1, 0];
    assert!((accuracy(&y, &y) - 1.0).abs() < 1e-6);
    assert!((precision(&y, &y, Average::Macro) - 1.0).abs() < 1e-6);
    assert!((recall(&y, &y, Average::Macro) - 1.0).abs() < 1e-6);
    assert!((f1_score(&y, &y, Average::Macro) - 1.0).abs() < 1e-6);
}

#[test]
fn test_macro_f1_known_value() {
    // Class 0: tp=2, fp=1, fn=0 -> p=2/3, r=1, f1=0.8
    // Class 1: tp=1, fp=0, fn=1 -> p=1, r=0.5, f1=2/3
    let y_true = vec![0, 0, 1, 1];
    let y_pred = vec![0, 0, 1, 0];
    let expected = (0.8 + 2.0 / 3.0) / 2.0;
    assert!((f1_score(&y_pred, &y_true, Average::Macro) - expected).abs() < 1e-6);
}

#[test]
fn test_micro_equals_accuracy_for_single_label() {
    let y_true = vec![0, 1, 2, 0, 1, 2, 2];
    let y_pred = vec![0, 1, 1, 0, 2, 2, 2];
    let acc = accuracy(&y_pred, &y_true);
    assert!((precision(&y_pred, &y_true, Average::Micro) - acc).abs() < 1e-6);
    assert!((recall(&y_pred, &y_true, Average::Micro) - acc).abs() < 1e-6);
    assert!((f1_score(&y_pred, &y_true, Average::Micro) - acc).abs() < 1e-6);
}

#[test]
fn test_weighted_average_uses_support() {
    // Class 0 (support 3) perfect, class 1 (support 1) missed entirely.
    let y_true = vec![0, 0, 0, 1];
    let y_pred = vec![0, 0, 0, 0];
    let weighted = recall(&y_pred, &y_true, Average::Weighted);
    assert!((weighted - 0.75).abs() < 1e-6);
    let macro_r = recall(&y_pred, &y_true, Average::Macro);
    assert!((macro_r - 0.5).abs() < 1e-6);
}

#[test]
fn test_per_class_recall() {
    let y_true = vec![0, 0, 1, 1, 1];
    let y_pred = vec![0, 1, 1, 1, 0];
    let recalls = per_class_recall(&y_pred, &y_true);
    assert!((recalls[0] - 0.5).abs() < 1e-6);
    assert!((recalls[1] - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_unpredicted_class_scores_zero() {
    let y_true = vec![0, 1, 2];
    let y_pred = vec![0, 1, 0];
    let recalls = per_class_recall(&y_pred, &y_true);
    assert_eq!(recalls[2], 0.0);
    // No division-by-zero panic anywhere.
    let _ = f1_score(&y_pred, &y_true, Average::Macro);
}

#[test]
fn test_confusion_matrix_layout() {
    let y_true = vec![0, 0, 1, 1];
    let y_pred = vec![0, 1, 1, 1];
    let cm = confusion_matrix(&y_pred, &y_true);
    assert_eq!(cm[0][0], 1);
    assert_eq!(cm[0][1], 1);
    assert_eq!(cm[1][0], 0);
    assert_eq!(cm[1][1], 2);
}

#[test]
fn test_classification_report_contains_labels() {
    let y_true = vec![0, 0, 1, 1];
    let y_pred = vec![0, 1, 1, 1];
    let labels = vec!["Dining".to_string(), "Fuel".to_string()];
    let report = classification_report(&y_pred, &y_true, &labels);
    assert!(report.contains("Dining"));
    assert!(report.contains("Fuel"));
    assert!(report.contains("macro F1"));
}

#[test]
#[should_panic(expected = "same length")]
fn test_length_mismatch_panics() {
    let _ = accuracy(&[0, 1], &[0]);
}
