//! Spend-category taxonomy.
//!
//! The authoritative display list of category labels, loaded from a YAML
//! config. A trained model's category set should be a subset of this list,
//! but that relationship is an operational concern — the prediction core
//! does not enforce it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordered list of spend-category labels.
///
/// # Examples
///
/// ```
/// use clasificar::taxonomy::Taxonomy;
///
/// let taxonomy = Taxonomy::new(vec!["Dining".to_string(), "Fuel".to_string()]);
/// assert!(taxonomy.contains("Fuel"));
/// assert!(!taxonomy.contains("Crypto"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    categories: Vec<String>,
}

impl Taxonomy {
    /// Creates a taxonomy from an ordered label list.
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    /// Loads a taxonomy from a YAML file of the form
    /// `categories: [Dining, Groceries, ...]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid YAML.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let taxonomy = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(taxonomy)
    }

    /// Category labels in display order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// True if the label is part of the taxonomy.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.categories.iter().any(|category| category.as_str() == label)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True if the taxonomy has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
