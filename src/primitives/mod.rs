//! Core numeric primitives (Vector, Matrix).
//!
//! Dense types backing classifier weights and probability outputs.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
