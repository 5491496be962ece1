//! Text normalization and word n-gram generation.
//!
//! The normalizer is applied identically at training and prediction time;
//! any divergence between the two paths is a correctness bug.

#[cfg(test)]
mod tests;

/// Normalizes raw transaction text.
///
/// Lower-cases, collapses every run of whitespace to a single space, and
/// trims. Empty or whitespace-only input yields the empty string rather
/// than an error: the classifier must always answer, even on garbage.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use clasificar::text::normalize;
///
/// assert_eq!(normalize("STARBUCKS  #0421\tMUMBAI IN"), "starbucks #0421 mumbai in");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generates contiguous word n-grams for n in `min_n..=max_n`.
///
/// Tokens are the whitespace-separated words of (already normalized) text;
/// n-grams are joined with a single space, so feature names read as plain
/// phrases (`"starbucks"`, `"uber trip"`).
///
/// # Examples
///
/// ```
/// use clasificar::text::word_ngrams;
///
/// let grams = word_ngrams("big bazaar pos", 1, 2);
/// assert_eq!(grams, vec!["big", "bazaar", "pos", "big bazaar", "bazaar pos"]);
/// ```
#[must_use]
pub fn word_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let min_n = min_n.max(1);
    let mut grams = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}
