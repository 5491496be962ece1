//! Classification metrics.
//!
//! Accuracy, precision, recall, F1 with macro/micro/weighted averaging,
//! plus a confusion matrix and a plain-text per-category report for
//! evaluation runs.

#[cfg(test)]
mod tests;

/// Averaging strategy for multi-class metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Average {
    /// Per-class metric, unweighted mean.
    Macro,
    /// Global counts of TP, FP, FN.
    Micro,
    /// Per-class metric, weighted by class support.
    Weighted,
}

/// Per-class true positive / false positive / false negative counts.
#[derive(Debug, Clone)]
struct ClassCounts {
    tp: Vec<usize>,
    fp: Vec<usize>,
    fn_: Vec<usize>,
    support: Vec<usize>,
}

fn count_classes(y_pred: &[usize], y_true: &[usize]) -> ClassCounts {
    assert_eq!(y_pred.len(), y_true.len(), "vectors must have same length");
    assert!(!y_true.is_empty(), "vectors cannot be empty");

    let n_classes = y_true
        .iter()
        .chain(y_pred.iter())
        .max()
        .map_or(0, |&max| max + 1);
    let mut counts = ClassCounts {
        tp: vec![0; n_classes],
        fp: vec![0; n_classes],
        fn_: vec![0; n_classes],
        support: vec![0; n_classes],
    };
    for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
        counts.support[truth] += 1;
        if pred == truth {
            counts.tp[truth] += 1;
        } else {
            counts.fp[pred] += 1;
            counts.fn_[truth] += 1;
        }
    }
    counts
}

fn ratio(num: usize, den: usize) -> f32 {
    if den == 0 {
        0.0
    } else {
        num as f32 / den as f32
    }
}

fn average_per_class(per_class: &[f32], support: &[usize], average: Average) -> f32 {
    match average {
        Average::Macro => per_class.iter().sum::<f32>() / per_class.len() as f32,
        Average::Weighted => {
            let total: usize = support.iter().sum();
            per_class
                .iter()
                .zip(support.iter())
                .map(|(&value, &count)| value * ratio(count, total))
                .sum()
        }
        Average::Micro => unreachable!("micro averaging uses global counts"),
    }
}

/// Classification accuracy: fraction of correct predictions.
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
///
/// # Examples
///
/// ```
/// use clasificar::metrics::accuracy;
///
/// let y_true = vec![0, 1, 2, 0];
/// let y_pred = vec![0, 1, 1, 0];
/// assert!((accuracy(&y_pred, &y_true) - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "vectors must have same length");
    assert!(!y_true.is_empty(), "vectors cannot be empty");
    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(pred, truth)| pred == truth)
        .count();
    correct as f32 / y_true.len() as f32
}

/// Precision: TP / (TP + FP).
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn precision(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    let counts = count_classes(y_pred, y_true);
    if matches!(average, Average::Micro) {
        let tp: usize = counts.tp.iter().sum();
        let fp: usize = counts.fp.iter().sum();
        return ratio(tp, tp + fp);
    }
    let per_class: Vec<f32> = counts
        .tp
        .iter()
        .zip(counts.fp.iter())
        .map(|(&tp, &fp)| ratio(tp, tp + fp))
        .collect();
    average_per_class(&per_class, &counts.support, average)
}

/// Recall: TP / (TP + FN).
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn recall(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    let counts = count_classes(y_pred, y_true);
    if matches!(average, Average::Micro) {
        let tp: usize = counts.tp.iter().sum();
        let fn_: usize = counts.fn_.iter().sum();
        return ratio(tp, tp + fn_);
    }
    let per_class: Vec<f32> = counts
        .tp
        .iter()
        .zip(counts.fn_.iter())
        .map(|(&tp, &fn_)| ratio(tp, tp + fn_))
        .collect();
    average_per_class(&per_class, &counts.support, average)
}

fn harmonic(p: f32, r: f32) -> f32 {
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// F1 score: harmonic mean of precision and recall.
///
/// Macro F1 is the unweighted mean of per-class F1 values, matching the
/// validation metric reported at training time.
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn f1_score(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    let counts = count_classes(y_pred, y_true);
    if matches!(average, Average::Micro) {
        let p = precision(y_pred, y_true, Average::Micro);
        let r = recall(y_pred, y_true, Average::Micro);
        return harmonic(p, r);
    }
    let per_class: Vec<f32> = (0..counts.tp.len())
        .map(|class| {
            let p = ratio(counts.tp[class], counts.tp[class] + counts.fp[class]);
            let r = ratio(counts.tp[class], counts.tp[class] + counts.fn_[class]);
            harmonic(p, r)
        })
        .collect();
    average_per_class(&per_class, &counts.support, average)
}

/// Per-class recall values, indexed by class.
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn per_class_recall(y_pred: &[usize], y_true: &[usize]) -> Vec<f32> {
    let counts = count_classes(y_pred, y_true);
    counts
        .tp
        .iter()
        .zip(counts.fn_.iter())
        .map(|(&tp, &fn_)| ratio(tp, tp + fn_))
        .collect()
}

/// Confusion matrix: rows are true classes, columns predicted classes.
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize]) -> Vec<Vec<usize>> {
    assert_eq!(y_pred.len(), y_true.len(), "vectors must have same length");
    assert!(!y_true.is_empty(), "vectors cannot be empty");

    let n_classes = y_true
        .iter()
        .chain(y_pred.iter())
        .max()
        .map_or(0, |&max| max + 1);
    let mut matrix = vec![vec![0usize; n_classes]; n_classes];
    for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
        matrix[truth][pred] += 1;
    }
    matrix
}

/// Plain-text per-category report with precision/recall/F1/support rows
/// and a macro-F1 summary line.
///
/// # Panics
///
/// Panics if the slices differ in length or are empty.
#[must_use]
pub fn classification_report(y_pred: &[usize], y_true: &[usize], labels: &[String]) -> String {
    let counts = count_classes(y_pred, y_true);
    let mut report = format!(
        "{:<16} {:>9} {:>9} {:>9} {:>9}\n",
        "category", "precision", "recall", "f1", "support"
    );
    for class in 0..counts.tp.len() {
        let p = ratio(counts.tp[class], counts.tp[class] + counts.fp[class]);
        let r = ratio(counts.tp[class], counts.tp[class] + counts.fn_[class]);
        let f1 = harmonic(p, r);
        let name = labels
            .get(class)
            .map_or_else(|| class.to_string(), Clone::clone);
        report.push_str(&format!(
            "{name:<16} {p:>9.3} {r:>9.3} {f1:>9.3} {:>9}\n",
            counts.support[class]
        ));
    }
    report.push_str(&format!(
        "\naccuracy: {:.3}  macro F1: {:.3}\n",
        accuracy(y_pred, y_true),
        f1_score(y_pred, y_true, Average::Macro)
    ));
    report
}
