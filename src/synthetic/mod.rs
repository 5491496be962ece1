//! Synthetic labeled-transaction generation.
//!
//! Seeded generator producing realistic raw transaction descriptions
//! (merchant name plus POS decoration) with known categories. Used by the
//! CLI's `generate-data` command and by tests that need a labeled corpus.

#[cfg(test)]
mod tests;

use crate::error::{ClasificarError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const MERCHANTS: &[(&str, &[&str])] = &[
    (
        "Dining",
        &[
            "Starbucks",
            "McDonald's",
            "Domino's Pizza",
            "KFC",
            "Subway",
            "Cafe Coffee Day",
        ],
    ),
    (
        "Groceries",
        &[
            "Big Bazaar",
            "DMart",
            "Reliance Fresh",
            "Walmart",
            "Target Groceries",
        ],
    ),
    (
        "Shopping",
        &["Amazon", "Flipkart", "Myntra", "Ajio", "Best Buy"],
    ),
    (
        "Fuel",
        &[
            "Shell Petrol",
            "HP Petrol Pump",
            "IndianOil",
            "BP Fuel Station",
        ],
    ),
    (
        "Bills",
        &[
            "Airtel Postpaid",
            "Jio Fiber",
            "Electricity Board",
            "Water Utility",
            "Gas Company",
        ],
    ),
    (
        "Travel",
        &["Uber", "Ola Cabs", "IndiGo Airlines", "MakeMyTrip", "IRCTC"],
    ),
    (
        "Entertainment",
        &["Netflix", "Spotify", "BookMyShow", "PVR Cinemas", "SonyLiv"],
    ),
    (
        "Others",
        &[
            "Service Charge",
            "Bank Fee",
            "Maintenance Charge",
            "Parking",
            "Toll Plaza",
        ],
    ),
];

const DECORATIONS: &[&str] = &[
    "",
    " #0421",
    " *REF 9982",
    " - ONLINE",
    " - POS TXN",
    " INTL",
    " MUMBAI IN",
    " BLR IN",
    " NEW DELHI",
];

/// Category labels the generator produces, in fixed order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    MERCHANTS.iter().map(|&(category, _)| category).collect()
}

/// Seeded generator of labeled transaction descriptions.
///
/// # Examples
///
/// ```
/// use clasificar::synthetic::TransactionGenerator;
///
/// let mut generator = TransactionGenerator::new(42);
/// let (texts, labels) = generator.corpus(50);
/// assert_eq!(texts.len(), 50);
/// assert_eq!(labels.len(), 50);
/// ```
#[derive(Debug)]
pub struct TransactionGenerator {
    rng: StdRng,
}

impl TransactionGenerator {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One labeled sample: `(raw description, category)`.
    pub fn sample(&mut self) -> (String, String) {
        let &(category, merchants) = MERCHANTS
            .choose(&mut self.rng)
            .expect("merchant table is non-empty");
        (self.decorate(merchants), category.to_string())
    }

    /// A raw description for a specific category.
    ///
    /// # Errors
    ///
    /// Returns an error for a category the generator doesn't know.
    pub fn sample_for(&mut self, category: &str) -> Result<String> {
        let merchants = MERCHANTS
            .iter()
            .find(|&&(name, _)| name == category)
            .map(|&(_, merchants)| merchants)
            .ok_or_else(|| ClasificarError::Other(format!("unknown category: {category}")))?;
        Ok(self.decorate(merchants))
    }

    /// A labeled corpus of `n` samples.
    pub fn corpus(&mut self, n: usize) -> (Vec<String>, Vec<String>) {
        let mut texts = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let (text, label) = self.sample();
            texts.push(text);
            labels.push(label);
        }
        (texts, labels)
    }

    fn decorate(&mut self, merchants: &[&str]) -> String {
        let merchant = merchants
            .choose(&mut self.rng)
            .expect("merchant pool is non-empty");
        let decoration = DECORATIONS
            .choose(&mut self.rng)
            .expect("decoration pool is non-empty");
        format!("{merchant}{decoration}")
    }
}
