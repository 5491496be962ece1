//! Human-in-the-loop feedback persistence.
//!
//! Corrections are appended to a JSON-lines log for later retraining. The
//! prediction core never reads these records back; the log is a pure sink.

use crate::error::Result;
use crate::pipeline::Prediction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One user correction of a model prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// When the feedback was recorded (UTC)
    pub timestamp: DateTime<Utc>,
    /// Original transaction description
    pub description: String,
    /// Category the model predicted
    pub predicted_category: String,
    /// Confidence the model reported
    pub predicted_confidence: f32,
    /// Category the user says is correct
    pub corrected_category: String,
    /// Optional free-text comment
    pub comment: Option<String>,
}

impl FeedbackRecord {
    /// Builds a timestamped record from a prediction and its correction.
    #[must_use]
    pub fn new(
        description: &str,
        prediction: &Prediction,
        corrected_category: &str,
        comment: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            description: description.to_string(),
            predicted_category: prediction.category.clone(),
            predicted_confidence: prediction.confidence,
            corrected_category: corrected_category.to_string(),
            comment,
        }
    }
}

/// Append-only feedback sink backed by a JSON-lines file.
///
/// The file is created on first append.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Creates a log handle for the given path.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Appends one record as a JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, record: &FeedbackRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// The log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction() -> Prediction {
        Prediction {
            category: "Shopping".to_string(),
            confidence: 0.41,
            top_features: vec!["amazon".to_string()],
        }
    }

    #[test]
    fn test_append_creates_file_and_lines_parse() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = FeedbackLog::new(dir.path().join("feedback.jsonl"));

        let prediction = sample_prediction();
        log.append(&FeedbackRecord::new(
            "AMAZON *REF 9982",
            &prediction,
            "Shopping",
            None,
        ))
        .expect("append should succeed");
        log.append(&FeedbackRecord::new(
            "AMZN GROCERY ORDER",
            &prediction,
            "Groceries",
            Some("was a grocery order".to_string()),
        ))
        .expect("append should succeed");

        let contents = std::fs::read_to_string(log.path()).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let record: FeedbackRecord = serde_json::from_str(line).expect("valid JSON line");
            assert_eq!(record.predicted_category, "Shopping");
        }
    }

    #[test]
    fn test_append_is_append_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = FeedbackLog::new(dir.path().join("feedback.jsonl"));
        let prediction = sample_prediction();

        for _ in 0..3 {
            log.append(&FeedbackRecord::new("txn", &prediction, "Others", None))
                .expect("append should succeed");
        }
        let contents = std::fs::read_to_string(log.path()).expect("read log");
        assert_eq!(contents.lines().count(), 3);
    }
}
