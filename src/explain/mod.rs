//! Linear attribution for predicted categories.
//!
//! Ranks which active features pushed the winning category's score up. The
//! contribution score is the elementwise product of a feature's tf-idf
//! weight and the winning class's coefficient for it — a simple linear
//! attribution heuristic kept for behavioral parity, not a rigorous
//! explainability method. Purely diagnostic: it never alters the
//! prediction.


use crate::vectorize::SparseVector;

/// One attributed feature: its vocabulary index and contribution score.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// Feature index in the fitted vocabulary
    pub feature: usize,
    /// Vector weight times class coefficient, strictly positive
    pub score: f32,
}

/// Top-k features contributing toward the predicted class.
///
/// Only strictly positive contributions qualify: a feature whose
/// coefficient pushes *against* the predicted class never appears. Results
/// are sorted by score descending, then feature index ascending for
/// deterministic ordering among equal scores. Returns fewer than `k`
/// entries when fewer qualify; never pads.
#[must_use]
pub fn top_contributions(
    vector: &SparseVector,
    class_coefficients: &[f32],
    k: usize,
) -> Vec<Contribution> {
    let mut contributions: Vec<Contribution> = vector
        .iter()
        .filter(|&(feature, _)| feature < class_coefficients.len())
        .map(|(feature, weight)| Contribution {
            feature,
            score: weight * class_coefficients[feature],
        })
        .filter(|contribution| contribution.score > 0.0)
        .collect();

    contributions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.feature.cmp(&b.feature))
    });
    contributions.truncate(k);
    contributions
}
