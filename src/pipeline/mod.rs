//! Model unit and prediction facade.
//!
//! A [`CategoryModel`] bundles the fitted vectorizer, classifier, and
//! category labels as one persisted unit: the feature space the weights
//! were trained against must be byte-identical to the one used at
//! inference time, so the pieces are never saved or loaded separately.
//!
//! The [`Predictor`] is an explicitly constructed, read-only context
//! object — never a mutable singleton — so callers inject it where needed
//! and tests swap in fixture models.


use crate::classification::{argmax, SoftmaxRegression};
use crate::error::{ClasificarError, Result};
use crate::explain::top_contributions;
use crate::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Number of explanation features returned by default.
pub const DEFAULT_TOP_FEATURES: usize = 5;

/// A fitted vectorizer + classifier + category set, persisted as one unit.
///
/// # Examples
///
/// ```
/// use clasificar::pipeline::CategoryModel;
///
/// let texts = vec![
///     "starbucks cafe",
///     "starbucks coffee shop",
///     "shell petrol pump",
///     "shell petrol refill",
/// ];
/// let labels = vec!["Dining", "Dining", "Fuel", "Fuel"];
///
/// let model = CategoryModel::train(&texts, &labels).expect("corpus is valid");
/// assert_eq!(model.categories(), ["Dining", "Fuel"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryModel {
    vectorizer: TfidfVectorizer,
    classifier: SoftmaxRegression,
    categories: Vec<String>,
}

impl CategoryModel {
    /// Trains a model with default vectorizer and classifier settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty, inconsistent, or yields
    /// fewer than two categories.
    pub fn train<S: AsRef<str>, L: AsRef<str>>(texts: &[S], labels: &[L]) -> Result<Self> {
        Self::train_with(
            texts,
            labels,
            TfidfVectorizer::new(),
            SoftmaxRegression::new(),
        )
    }

    /// Trains a model with caller-configured components.
    ///
    /// The category set is the sorted unique labels; a category's index in
    /// that ordering is its class index for the lifetime of the model.
    ///
    /// # Errors
    ///
    /// Returns an error if inputs are inconsistent or fitting fails.
    pub fn train_with<S: AsRef<str>, L: AsRef<str>>(
        texts: &[S],
        labels: &[L],
        mut vectorizer: TfidfVectorizer,
        mut classifier: SoftmaxRegression,
    ) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("{} labels", texts.len()),
                actual: format!("{} labels", labels.len()),
            });
        }
        if texts.is_empty() {
            return Err("cannot train on an empty corpus".into());
        }

        let categories: Vec<String> = labels
            .iter()
            .map(|label| label.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if categories.len() < 2 {
            return Err("training corpus must contain at least two categories".into());
        }

        let y: Vec<usize> = labels
            .iter()
            .map(|label| {
                categories
                    .binary_search_by(|category| category.as_str().cmp(label.as_ref()))
                    .unwrap_or(0)
            })
            .collect();

        let vectors = vectorizer.fit_transform(texts)?;
        classifier.fit(&vectors, &y, vectorizer.n_features(), categories.len())?;

        Ok(Self {
            vectorizer,
            classifier,
            categories,
        })
    }

    /// Saves the model as a single JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O or serialization failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads a previously saved model artifact.
    ///
    /// Cross-component dimensions are checked after deserialization; a
    /// mismatch means the artifact is corrupt and the caller must treat
    /// the failure as a startup abort, never serve with a partial model.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparseable, or internally
    /// inconsistent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let model: Self = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        Ok(model)
    }

    /// Checks that vectorizer, classifier, and category set agree.
    fn validate(&self) -> Result<()> {
        if !self.classifier.is_fitted() {
            return Err(ClasificarError::Serialization(
                "artifact contains an unfitted classifier".to_string(),
            ));
        }
        if self.classifier.n_features() != self.vectorizer.n_features() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("{} features", self.vectorizer.n_features()),
                actual: format!("{} features", self.classifier.n_features()),
            });
        }
        if self.classifier.n_classes() != self.categories.len() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("{} classes", self.categories.len()),
                actual: format!("{} classes", self.classifier.n_classes()),
            });
        }
        Ok(())
    }

    /// Category labels in fixed class-index order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The fitted vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// The fitted classifier.
    #[must_use]
    pub fn classifier(&self) -> &SoftmaxRegression {
        &self.classifier
    }
}

/// Prediction output for one transaction description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning category label
    pub category: String,
    /// Probability of the winning category, in [0, 1]
    pub confidence: f32,
    /// Feature names with the largest positive contribution, best first
    pub top_features: Vec<String>,
}

/// Read-only prediction facade over a fitted [`CategoryModel`].
///
/// Stateless per call and `Send + Sync`: concurrent callers share one
/// instance without locking.
///
/// # Examples
///
/// ```
/// use clasificar::pipeline::{CategoryModel, Predictor};
///
/// let texts = vec![
///     "starbucks cafe",
///     "starbucks coffee",
///     "shell petrol",
///     "shell petrol pump",
/// ];
/// let labels = vec!["Dining", "Dining", "Fuel", "Fuel"];
/// let model = CategoryModel::train(&texts, &labels).expect("corpus is valid");
///
/// let predictor = Predictor::new(model);
/// let prediction = predictor.predict("STARBUCKS #0421 MUMBAI IN").expect("never fails on text");
/// assert_eq!(prediction.category, "Dining");
/// assert!(prediction.top_features.contains(&"starbucks".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    model: CategoryModel,
    top_k: usize,
}

impl Predictor {
    /// Wraps a fitted model; explanation lists are capped at
    /// [`DEFAULT_TOP_FEATURES`] entries.
    #[must_use]
    pub fn new(model: CategoryModel) -> Self {
        Self {
            model,
            top_k: DEFAULT_TOP_FEATURES,
        }
    }

    /// Sets the explanation list cap.
    #[must_use]
    pub fn with_top_features(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Classifies one transaction description.
    ///
    /// Malformed or unrecognized text is not an error: it degrades to the
    /// zero vector and the classifier still answers, with low confidence.
    /// Callers wanting to reject unreliable predictions should threshold
    /// on `confidence`.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations (a corrupt model) surface as
    /// errors; they are not retryable.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let vector = self.model.vectorizer.transform(text);
        let proba = self.model.classifier.predict_proba(&vector)?;
        let best = argmax(proba.as_slice());
        let confidence = proba[best];

        let coefficients = self.model.classifier.class_coefficients(best)?;
        let names = self.model.vectorizer.feature_names();
        let top_features = top_contributions(&vector, coefficients, self.top_k)
            .into_iter()
            .map(|contribution| names[contribution.feature].clone())
            .collect();

        Ok(Prediction {
            category: self.model.categories[best].clone(),
            confidence,
            top_features,
        })
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &CategoryModel {
        &self.model
    }
}
