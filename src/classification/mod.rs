//! Classification algorithms.
//!
//! Implements multinomial logistic regression (softmax regression) over
//! sparse document vectors, with class-balanced loss weighting so rare
//! categories are not starved during training.

#[cfg(test)]
mod tests;

use crate::error::{ClasificarError, Result};
use crate::primitives::{Matrix, Vector};
use crate::vectorize::SparseVector;
use serde::{Deserialize, Serialize};

/// Index of the largest value; ties go to the earliest index.
pub(crate) fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    best
}

/// In-place numerically stable softmax.
fn softmax(scores: &mut [f32]) {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut sum = 0.0;
    for score in scores.iter_mut() {
        *score = (*score - max).exp();
        sum += *score;
    }
    for score in scores.iter_mut() {
        *score /= sum;
    }
}

/// Multinomial logistic regression over sparse feature vectors.
///
/// Trained by full-batch gradient descent on the class-weighted multinomial
/// cross-entropy. The optimizer runs to convergence or to the iteration cap,
/// whichever comes first; hitting the cap is not an error.
///
/// # Example
///
/// ```
/// use clasificar::classification::SoftmaxRegression;
/// use clasificar::vectorize::SparseVector;
///
/// let x = vec![
///     SparseVector::from_entries(vec![(0, 1.0)]),
///     SparseVector::from_entries(vec![(1, 1.0)]),
/// ];
/// let y = vec![0, 1];
///
/// let mut model = SoftmaxRegression::new().with_max_iter(300);
/// model.fit(&x, &y, 2, 2).expect("training data is valid");
///
/// let proba = model.predict_proba(&x[0]).expect("dimensions match");
/// assert!((proba.sum() - 1.0).abs() < 1e-6);
/// assert_eq!(model.predict(&x[0]).expect("dimensions match"), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    /// Per-class coefficient rows (`n_classes` x `n_features`)
    weights: Option<Matrix<f32>>,
    /// Per-class bias terms
    intercepts: Vec<f32>,
    /// Learning rate for gradient descent
    learning_rate: f32,
    /// Iteration cap
    max_iter: usize,
    /// Convergence tolerance on the gradient's max absolute entry
    tol: f32,
    /// Weight each class inversely to its frequency
    class_weighting: bool,
}

impl SoftmaxRegression {
    /// Creates a classifier with production defaults (200 iterations,
    /// class-balanced weighting on).
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            intercepts: Vec::new(),
            learning_rate: 0.5,
            max_iter: 200,
            tol: 1e-5,
            class_weighting: true,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Enables or disables class-balanced loss weighting.
    #[must_use]
    pub fn with_class_weighting(mut self, enabled: bool) -> Self {
        self.class_weighting = enabled;
        self
    }

    /// Fits the model to sparse training vectors.
    ///
    /// With class weighting enabled, each sample of class `c` carries weight
    /// `n_samples / (n_classes * count_c)`, so every class contributes
    /// equally to the loss regardless of its frequency.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are empty or inconsistent, a label is
    /// outside `0..n_classes`, or a vector indexes past `n_features`.
    pub fn fit(
        &mut self,
        x: &[SparseVector],
        y: &[usize],
        n_features: usize,
        n_classes: usize,
    ) -> Result<()> {
        if x.len() != y.len() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("{} labels", x.len()),
                actual: format!("{} labels", y.len()),
            });
        }
        if x.is_empty() {
            return Err("cannot fit with zero samples".into());
        }
        if n_classes < 2 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "n_classes".to_string(),
                value: n_classes.to_string(),
                constraint: ">= 2".to_string(),
            });
        }
        if n_features == 0 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "n_features".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        for &label in y {
            if label >= n_classes {
                return Err(ClasificarError::DimensionMismatch {
                    expected: format!("label < {n_classes}"),
                    actual: format!("label {label}"),
                });
            }
        }
        for vector in x {
            if let Some(max_index) = vector.max_index() {
                if max_index >= n_features {
                    return Err(ClasificarError::DimensionMismatch {
                        expected: format!("feature index < {n_features}"),
                        actual: format!("feature index {max_index}"),
                    });
                }
            }
        }

        let n_samples = x.len();
        let mut class_counts = vec![0usize; n_classes];
        for &label in y {
            class_counts[label] += 1;
        }
        let sample_weights: Vec<f32> = if self.class_weighting {
            y.iter()
                .map(|&label| n_samples as f32 / (n_classes as f32 * class_counts[label] as f32))
                .collect()
        } else {
            vec![1.0; n_samples]
        };
        let weight_total: f32 = sample_weights.iter().sum();

        let mut weights = Matrix::zeros(n_classes, n_features);
        let mut intercepts = vec![0.0f32; n_classes];
        let mut scores = vec![0.0f32; n_classes];
        let mut weight_grad = vec![0.0f32; n_classes * n_features];
        let mut intercept_grad = vec![0.0f32; n_classes];

        for _ in 0..self.max_iter {
            weight_grad.iter_mut().for_each(|g| *g = 0.0);
            intercept_grad.iter_mut().for_each(|g| *g = 0.0);

            for (i, vector) in x.iter().enumerate() {
                for (class, score) in scores.iter_mut().enumerate() {
                    let mut z = intercepts[class];
                    let row = weights.row(class);
                    for (idx, value) in vector.iter() {
                        z += row[idx] * value;
                    }
                    *score = z;
                }
                softmax(&mut scores);

                for class in 0..n_classes {
                    let indicator = if y[i] == class { 1.0 } else { 0.0 };
                    let err = sample_weights[i] * (scores[class] - indicator);
                    intercept_grad[class] += err;
                    let row_grad = &mut weight_grad[class * n_features..(class + 1) * n_features];
                    for (idx, value) in vector.iter() {
                        row_grad[idx] += err * value;
                    }
                }
            }

            let mut max_grad = 0.0f32;
            for class in 0..n_classes {
                let step = self.learning_rate * intercept_grad[class] / weight_total;
                intercepts[class] -= step;
                max_grad = max_grad.max((intercept_grad[class] / weight_total).abs());
                for idx in 0..n_features {
                    let g = weight_grad[class * n_features + idx] / weight_total;
                    max_grad = max_grad.max(g.abs());
                    let updated = weights.get(class, idx) - self.learning_rate * g;
                    weights.set(class, idx, updated);
                }
            }

            if max_grad < self.tol {
                break;
            }
        }

        self.weights = Some(weights);
        self.intercepts = intercepts;
        Ok(())
    }

    /// Probability distribution over classes for one sparse vector.
    ///
    /// Probabilities are non-negative and sum to 1 within floating-point
    /// tolerance, in the fixed class ordering used at fit time.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the vector indexes past
    /// the fitted feature space (an unrecoverable invariant violation).
    pub fn predict_proba(&self, x: &SparseVector) -> Result<Vector<f32>> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| ClasificarError::Other("model is not fitted".to_string()))?;
        let (n_classes, n_features) = weights.shape();
        if let Some(max_index) = x.max_index() {
            if max_index >= n_features {
                return Err(ClasificarError::DimensionMismatch {
                    expected: format!("feature index < {n_features}"),
                    actual: format!("feature index {max_index}"),
                });
            }
        }

        let mut scores = vec![0.0f32; n_classes];
        for (class, score) in scores.iter_mut().enumerate() {
            let mut z = self.intercepts[class];
            let row = weights.row(class);
            for (idx, value) in x.iter() {
                z += row[idx] * value;
            }
            *score = z;
        }
        softmax(&mut scores);
        Ok(Vector::from_vec(scores))
    }

    /// Predicted class index: argmax of `predict_proba`, earliest class on
    /// ties.
    ///
    /// # Errors
    ///
    /// Propagates `predict_proba` failures.
    pub fn predict(&self, x: &SparseVector) -> Result<usize> {
        let proba = self.predict_proba(x)?;
        Ok(argmax(proba.as_slice()))
    }

    /// Predicted class indices for a batch of vectors.
    ///
    /// # Errors
    ///
    /// Propagates the first per-vector failure.
    pub fn predict_labels(&self, x: &[SparseVector]) -> Result<Vec<usize>> {
        x.iter().map(|vector| self.predict(vector)).collect()
    }

    /// Accuracy on labeled vectors.
    ///
    /// # Errors
    ///
    /// Propagates prediction failures.
    pub fn score(&self, x: &[SparseVector], y: &[usize]) -> Result<f32> {
        if x.len() != y.len() || x.is_empty() {
            return Err("x and y must be non-empty and the same length".into());
        }
        let predictions = self.predict_labels(x)?;
        let correct = predictions
            .iter()
            .zip(y.iter())
            .filter(|(pred, truth)| pred == truth)
            .count();
        Ok(correct as f32 / y.len() as f32)
    }

    /// Coefficient row for one class.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the class is out of
    /// range.
    pub fn class_coefficients(&self, class: usize) -> Result<&[f32]> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| ClasificarError::Other("model is not fitted".to_string()))?;
        if class >= weights.n_rows() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("class < {}", weights.n_rows()),
                actual: format!("class {class}"),
            });
        }
        Ok(weights.row(class))
    }

    /// Per-class bias terms.
    #[must_use]
    pub fn intercepts(&self) -> &[f32] {
        &self.intercepts
    }

    /// Number of classes, 0 if unfitted.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.weights.as_ref().map_or(0, Matrix::n_rows)
    }

    /// Number of features, 0 if unfitted.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.weights.as_ref().map_or(0, Matrix::n_cols)
    }

    /// True once `fit` has completed.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }
}

impl Default for SoftmaxRegression {
    fn default() -> Self {
        Self::new()
    }
}
