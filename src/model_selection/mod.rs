//! Train/test splitting utilities.
//!
//! Seeded shuffles for reproducible experiments, with a stratified variant
//! that preserves per-category proportions in both splits.

#[cfg(test)]
mod tests;

use crate::error::{ClasificarError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

/// Shuffles indices with an optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }
    indices
}

fn validate_split_inputs(n_x: usize, n_y: usize, test_size: f32) -> Result<usize> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ClasificarError::InvalidHyperparameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: "0.0 < test_size < 1.0".to_string(),
        });
    }
    if n_x != n_y {
        return Err(ClasificarError::DimensionMismatch {
            expected: format!("{n_x} labels"),
            actual: format!("{n_y} labels"),
        });
    }
    let n_test = (n_x as f32 * test_size).round() as usize;
    let n_train = n_x.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(format!(
            "split would leave an empty side (n_train={n_train}, n_test={n_test})"
        )
        .into());
    }
    Ok(n_train)
}

fn take<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&idx| items[idx].clone()).collect()
}

/// Shuffled train/test split over parallel slices.
///
/// Returns `(x_train, x_test, y_train, y_test)`.
///
/// # Errors
///
/// Returns an error if `test_size` is outside (0, 1), the slices disagree
/// in length, or either side of the split would be empty.
///
/// # Example
///
/// ```
/// use clasificar::model_selection::train_test_split;
///
/// let x: Vec<u32> = (0..10).collect();
/// let y = vec![0usize; 10];
/// let (x_train, x_test, _, _) = train_test_split(&x, &y, 0.2, Some(42)).unwrap();
/// assert_eq!(x_train.len(), 8);
/// assert_eq!(x_test.len(), 2);
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split<X: Clone, Y: Clone>(
    x: &[X],
    y: &[Y],
    test_size: f32,
    random_state: Option<u64>,
) -> Result<(Vec<X>, Vec<X>, Vec<Y>, Vec<Y>)> {
    let n_train = validate_split_inputs(x.len(), y.len(), test_size)?;
    let indices = shuffle_indices(x.len(), random_state);
    let (train_idx, test_idx) = indices.split_at(n_train);
    Ok((
        take(x, train_idx),
        take(x, test_idx),
        take(y, train_idx),
        take(y, test_idx),
    ))
}

/// Stratified train/test split: each class is split in proportion.
///
/// Classes too small to contribute a test sample stay entirely in the
/// training side. Returns `(x_train, x_test, y_train, y_test)`.
///
/// # Errors
///
/// Returns an error under the same conditions as [`train_test_split`].
#[allow(clippy::type_complexity)]
pub fn stratified_train_test_split<X: Clone>(
    x: &[X],
    y: &[usize],
    test_size: f32,
    random_state: Option<u64>,
) -> Result<(Vec<X>, Vec<X>, Vec<usize>, Vec<usize>)> {
    validate_split_inputs(x.len(), y.len(), test_size)?;

    let mut by_class: HashMap<usize, Vec<usize>> = HashMap::new();
    for (idx, &label) in y.iter().enumerate() {
        by_class.entry(label).or_default().push(idx);
    }

    let mut train_idx = Vec::new();
    let mut test_idx = Vec::new();
    // Deterministic class order so a fixed seed fixes the whole split.
    let mut classes: Vec<usize> = by_class.keys().copied().collect();
    classes.sort_unstable();

    for (offset, class) in classes.into_iter().enumerate() {
        let members = &by_class[&class];
        let order = shuffle_indices(members.len(), random_state.map(|s| s + offset as u64));
        let n_test = (members.len() as f32 * test_size).round() as usize;
        for (pos, &member_pos) in order.iter().enumerate() {
            if pos < n_test {
                test_idx.push(members[member_pos]);
            } else {
                train_idx.push(members[member_pos]);
            }
        }
    }

    if test_idx.is_empty() || train_idx.is_empty() {
        return Err("stratified split would leave an empty side".into());
    }

    Ok((
        take(x, &train_idx),
        take(x, &test_idx),
        take(y, &train_idx),
        take(y, &test_idx),
    ))
}
