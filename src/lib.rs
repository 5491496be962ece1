//! Clasificar: transaction category classification in pure Rust.
//!
//! Classifies free-text financial-transaction descriptions into a fixed
//! taxonomy of spend categories (Dining, Groceries, Fuel, ...) and explains
//! each prediction by naming the n-grams that pushed the winning category.
//!
//! The pipeline is deliberately boring and deterministic: text
//! normalization -> tf-idf vectorization over word n-grams -> multinomial
//! logistic regression -> linear top-feature attribution. The fitted
//! vocabulary, IDF table, weights, and category set travel as one
//! immutable artifact; prediction is pure computation with no shared
//! mutable state, so one [`pipeline::Predictor`] serves concurrent callers
//! without locking.
//!
//! # Quick Start
//!
//! ```
//! use clasificar::prelude::*;
//!
//! let texts = vec![
//!     "starbucks coffee",
//!     "starbucks latte",
//!     "shell petrol",
//!     "shell petrol pump",
//! ];
//! let labels = vec!["Dining", "Dining", "Fuel", "Fuel"];
//!
//! let model = CategoryModel::train(&texts, &labels).unwrap();
//! let predictor = Predictor::new(model);
//!
//! let prediction = predictor.predict("STARBUCKS #0421 MUMBAI IN").unwrap();
//! assert_eq!(prediction.category, "Dining");
//! assert!(prediction.confidence > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`text`]: normalization and word n-gram generation
//! - [`vectorize`]: tf-idf vectorizer with a bounded vocabulary
//! - [`classification`]: multinomial logistic regression (class-balanced)
//! - [`explain`]: linear top-feature attribution for predictions
//! - [`pipeline`]: the persisted model unit and the prediction facade
//! - [`model_selection`]: seeded and stratified train/test splits
//! - [`metrics`]: accuracy, precision/recall/F1, confusion matrix, reports
//! - [`taxonomy`]: authoritative category list (YAML-backed)
//! - [`feedback`]: append-only human-in-the-loop correction log
//! - [`synthetic`]: seeded labeled-transaction generator
//! - [`primitives`]: dense Vector and Matrix types

pub mod classification;
pub mod error;
pub mod explain;
pub mod feedback;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod synthetic;
pub mod taxonomy;
pub mod text;
pub mod vectorize;

pub use error::{ClasificarError, Result};
pub use pipeline::{CategoryModel, Prediction, Predictor};
