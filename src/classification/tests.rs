use super::*;

fn one_hot(idx: usize) -> SparseVector {
    SparseVector::from_entries(vec![(idx, 1.0)])
}

fn separable_training_set() -> (Vec<SparseVector>, Vec<usize>) {
    // Three classes, each owning one feature, three samples per class.
    let mut x = Vec::new();
    let mut y = Vec::new();
    for class in 0..3 {
        for _ in 0..3 {
            x.push(one_hot(class));
            y.push(class);
        }
    }
    (x, y)
}

#[test]
fn test_fit_and_predict_separable() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new().with_max_iter(300);
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    for class in 0..3 {
        assert_eq!(
            model.predict(&one_hot(class)).expect("dimensions match"),
            class
        );
    }
}

#[test]
fn test_predict_proba_is_distribution() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new();
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    let proba = model.predict_proba(&one_hot(1)).expect("dimensions match");
    assert_eq!(proba.len(), 3);
    assert!(proba.iter().all(|&p| p >= 0.0));
    assert!((proba.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn test_zero_vector_still_answers() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new();
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    // OOV document: no features. Prediction falls back to the intercepts.
    let proba = model
        .predict_proba(&SparseVector::empty())
        .expect("zero vector is valid input");
    assert!((proba.sum() - 1.0).abs() < 1e-6);
    let prediction = model.predict(&SparseVector::empty());
    assert!(prediction.is_ok());
}

#[test]
fn test_argmax_tie_goes_to_earliest() {
    assert_eq!(argmax(&[0.25, 0.25, 0.25, 0.25]), 0);
    assert_eq!(argmax(&[0.1, 0.4, 0.4, 0.1]), 1);
    assert_eq!(argmax(&[0.0, 0.0, 1.0]), 2);
}

#[test]
fn test_dimension_mismatch_on_predict() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new();
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    let too_wide = one_hot(7);
    let err = model.predict_proba(&too_wide).unwrap_err();
    assert!(matches!(
        err,
        crate::error::ClasificarError::DimensionMismatch { .. }
    ));
}

#[test]
fn test_fit_rejects_bad_inputs() {
    let mut model = SoftmaxRegression::new();

    // Length mismatch.
    assert!(model.fit(&[one_hot(0)], &[0, 1], 2, 2).is_err());
    // Empty.
    assert!(model.fit(&[], &[], 2, 2).is_err());
    // Label out of range.
    assert!(model.fit(&[one_hot(0), one_hot(1)], &[0, 5], 2, 2).is_err());
    // Feature index out of range.
    assert!(model.fit(&[one_hot(9), one_hot(1)], &[0, 1], 2, 2).is_err());
    // Single class.
    assert!(model.fit(&[one_hot(0), one_hot(1)], &[0, 0], 2, 1).is_err());
}

#[test]
fn test_unfitted_model_errors() {
    let model = SoftmaxRegression::new();
    assert!(!model.is_fitted());
    assert!(model.predict_proba(&one_hot(0)).is_err());
    assert!(model.class_coefficients(0).is_err());
}

#[test]
fn test_iteration_cap_is_not_an_error() {
    let (x, y) = separable_training_set();
    // One iteration cannot converge; fit must still succeed.
    let mut model = SoftmaxRegression::new().with_max_iter(1);
    model.fit(&x, &y, 3, 3).expect("cap termination is clean");
    assert!(model.is_fitted());
}

#[test]
fn test_class_weighting_helps_minority_class() {
    // 20:2 imbalance; both classes own a disjoint feature.
    let mut x = Vec::new();
    let mut y = Vec::new();
    for _ in 0..20 {
        x.push(one_hot(0));
        y.push(0);
    }
    for _ in 0..2 {
        x.push(one_hot(1));
        y.push(1);
    }

    let mut balanced = SoftmaxRegression::new().with_max_iter(300);
    balanced.fit(&x, &y, 2, 2).expect("fit should succeed");
    assert_eq!(
        balanced.predict(&one_hot(1)).expect("dimensions match"),
        1,
        "minority class must be recoverable with balanced weighting"
    );
}

#[test]
fn test_score_on_training_data() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new().with_max_iter(300);
    model.fit(&x, &y, 3, 3).expect("fit should succeed");
    let acc = model.score(&x, &y).expect("score should succeed");
    assert!((acc - 1.0).abs() < 1e-6);
}

#[test]
fn test_class_coefficients_shape() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new();
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    assert_eq!(model.n_classes(), 3);
    assert_eq!(model.n_features(), 3);
    let row = model.class_coefficients(2).expect("class in range");
    assert_eq!(row.len(), 3);
    // A class's own feature should carry its largest coefficient.
    assert_eq!(argmax(row), 2);
}

#[test]
fn test_predict_is_deterministic() {
    let (x, y) = separable_training_set();
    let mut model = SoftmaxRegression::new();
    model.fit(&x, &y, 3, 3).expect("fit should succeed");

    let input = SparseVector::from_entries(vec![(0, 0.6), (2, 0.8)]);
    let first = model.predict_proba(&input).expect("dimensions match");
    let second = model.predict_proba(&input).expect("dimensions match");
    assert_eq!(first, second);
}
