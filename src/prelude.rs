//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use clasificar::prelude::*;
//! ```

pub use crate::classification::SoftmaxRegression;
pub use crate::error::{ClasificarError, Result};
pub use crate::explain::{top_contributions, Contribution};
pub use crate::metrics::{accuracy, f1_score, Average};
pub use crate::pipeline::{CategoryModel, Prediction, Predictor};
pub use crate::primitives::{Matrix, Vector};
pub use crate::text::normalize;
pub use crate::vectorize::{SparseVector, TfidfVectorizer};
