//! TF-IDF vectorization over word n-grams.
//!
//! Learns a bounded vocabulary from a training corpus and maps any text to
//! a sparse, L2-normalized tf-idf vector over that vocabulary. The fitted
//! vocabulary and IDF table are frozen: tokens unseen at training time are
//! silently dropped at transform time.


use crate::error::Result;
use crate::text::{normalize, word_ngrams};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A sparse document vector: sorted (feature index, weight) pairs.
///
/// Ephemeral per-request representation; weights are non-negative tf-idf
/// values, L2-normalized so that any document with at least one recognized
/// token has unit norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// Creates a sparse vector from (index, weight) pairs.
    ///
    /// Entries are sorted by feature index.
    #[must_use]
    pub fn from_entries(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        Self { entries }
    }

    /// The zero vector (no recognized tokens).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this is the zero vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (feature index, weight) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.entries.iter().copied()
    }

    /// Weight for a feature index, 0.0 if absent.
    #[must_use]
    pub fn get(&self, index: usize) -> f32 {
        self.entries
            .binary_search_by_key(&index, |&(idx, _)| idx)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    /// Largest feature index present, if any.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.entries.last().map(|&(idx, _)| idx)
    }

    /// L2 norm of the vector.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }
}

/// TF-IDF vectorizer over word n-grams.
///
/// Defaults match the production training configuration: n-grams of length
/// 1–3, minimum document frequency 2, vocabulary capped at 50,000 entries.
///
/// # Examples
///
/// ```
/// use clasificar::vectorize::TfidfVectorizer;
///
/// let docs = vec![
///     "starbucks coffee",
///     "starbucks latte",
///     "shell petrol pump",
///     "shell petrol refill",
/// ];
/// let mut vectorizer = TfidfVectorizer::new().with_min_df(2);
/// vectorizer.fit(&docs).expect("fit should succeed");
///
/// let v = vectorizer.transform("STARBUCKS #0421");
/// assert_eq!(v.nnz(), 1);
/// assert!((v.norm() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    ngram_range: (usize, usize),
    min_df: usize,
    max_features: Option<usize>,
    vocabulary: HashMap<String, usize>,
    feature_names: Vec<String>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Creates a vectorizer with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ngram_range: (1, 3),
            min_df: 2,
            max_features: Some(50_000),
            vocabulary: HashMap::new(),
            feature_names: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Sets the n-gram range (inclusive, clamped to at least 1).
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n.max(1), max_n.max(1));
        self
    }

    /// Sets the minimum document frequency threshold.
    ///
    /// Terms appearing in fewer than `min_df` documents are excluded.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Sets the maximum vocabulary size, or `None` for unbounded.
    #[must_use]
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Learns the vocabulary and IDF table from a corpus.
    ///
    /// Qualifying terms (document frequency >= `min_df`) are ranked by total
    /// corpus frequency descending, ties broken lexicographically ascending,
    /// then truncated to `max_features`. A term's feature index is its
    /// position in that ranking. IDF uses the smoothed form
    /// `ln((1 + n_docs) / (1 + df)) + 1`, frozen after fit.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty or no term qualifies.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err("cannot fit vectorizer on an empty corpus".into());
        }

        let n_docs = documents.len();
        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let clean = normalize(doc.as_ref());
            let mut doc_terms: HashSet<String> = HashSet::new();
            for term in word_ngrams(&clean, self.ngram_range.0, self.ngram_range.1) {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                doc_terms.insert(term);
            }
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_freq
            .into_iter()
            .filter(|(term, _)| doc_freq.get(term).copied().unwrap_or(0) >= self.min_df)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(cap) = self.max_features {
            ranked.truncate(cap);
        }

        if ranked.is_empty() {
            return Err("no term met the minimum document frequency threshold".into());
        }

        self.feature_names = ranked.into_iter().map(|(term, _)| term).collect();
        self.vocabulary = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.idf = self
            .feature_names
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f32;
                ((1.0 + n_docs as f32) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        Ok(())
    }

    /// Maps text to a sparse tf-idf vector over the fitted vocabulary.
    ///
    /// Out-of-vocabulary terms are dropped without error; text with no
    /// recognized tokens yields the zero vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        let clean = normalize(text);
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in word_ngrams(&clean, self.ngram_range.0, self.ngram_range.1) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        if counts.is_empty() {
            return SparseVector::empty();
        }

        let mut entries: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for entry in &mut entries {
                entry.1 /= norm;
            }
        }
        SparseVector::from_entries(entries)
    }

    /// Fits on the corpus, then transforms every document.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        Ok(documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect())
    }

    /// The fitted term -> feature index mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Feature names in index order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of features in the fitted vocabulary.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Frozen per-feature inverse document frequencies.
    #[must_use]
    pub fn idf(&self) -> &[f32] {
        &self.idf
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
