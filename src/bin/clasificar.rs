//! clasificar - transaction categorisation CLI
//!
//! Usage:
//!   clasificar generate-data -o data.jsonl -n 500     # synthetic corpus
//!   clasificar train -d data.jsonl -o model.json      # train + held-out report
//!   clasificar evaluate -m model.json -d test.jsonl   # evaluate on a dataset
//!   clasificar predict -m model.json "STARBUCKS #0421"
//!   clasificar categories -t taxonomy.yaml            # list taxonomy labels

use clap::{Parser, Subcommand};
use clasificar::classification::SoftmaxRegression;
use clasificar::error::Result;
use clasificar::metrics::classification_report;
use clasificar::model_selection::stratified_train_test_split;
use clasificar::pipeline::{CategoryModel, Predictor};
use clasificar::synthetic::TransactionGenerator;
use clasificar::taxonomy::Taxonomy;
use clasificar::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// clasificar - Transaction Categorisation Tool
///
/// Train, evaluate, and query tf-idf + logistic-regression category models.
#[derive(Parser)]
#[command(name = "clasificar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic labeled dataset (JSON lines)
    GenerateData {
        /// Output dataset path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "500")]
        samples: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Train a model and report held-out metrics
    Train {
        /// Labeled dataset (JSON lines: {"description", "category"})
        #[arg(short, long, value_name = "FILE")]
        data: PathBuf,

        /// Output model artifact path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Held-out fraction for the evaluation report
        #[arg(long, default_value = "0.2")]
        test_size: f32,

        /// Split seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Optimizer iteration cap
        #[arg(long, default_value = "200")]
        max_iter: usize,

        /// Minimum document frequency for vocabulary terms
        #[arg(long, default_value = "2")]
        min_df: usize,

        /// Vocabulary size cap
        #[arg(long, default_value = "50000")]
        max_features: usize,
    },

    /// Evaluate a saved model against a labeled dataset
    Evaluate {
        /// Model artifact path
        #[arg(short, long, value_name = "FILE")]
        model: PathBuf,

        /// Labeled dataset (JSON lines)
        #[arg(short, long, value_name = "FILE")]
        data: PathBuf,
    },

    /// Classify one transaction description
    Predict {
        /// Model artifact path
        #[arg(short, long, value_name = "FILE")]
        model: PathBuf,

        /// Transaction description text
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the taxonomy's category labels
    Categories {
        /// Taxonomy YAML path
        #[arg(short, long, value_name = "FILE")]
        taxonomy: PathBuf,
    },
}

/// One dataset line.
#[derive(Debug, Serialize, Deserialize)]
struct DatasetRecord {
    description: String,
    category: String,
}

fn read_dataset(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let file = File::open(path)?;
    let mut texts = Vec::new();
    let mut labels = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DatasetRecord = serde_json::from_str(&line)?;
        texts.push(record.description);
        labels.push(record.category);
    }
    Ok((texts, labels))
}

fn write_dataset(path: &Path, texts: &[String], labels: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (description, category) in texts.iter().zip(labels.iter()) {
        let record = DatasetRecord {
            description: description.clone(),
            category: category.clone(),
        };
        writeln!(writer, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}

/// Maps string labels onto sorted-unique class indices.
fn encode_labels(labels: &[String]) -> (Vec<String>, Vec<usize>) {
    let classes: Vec<String> = labels.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    let encoded = labels
        .iter()
        .map(|label| {
            classes
                .binary_search_by(|class| class.as_str().cmp(label))
                .unwrap_or(0)
        })
        .collect();
    (classes, encoded)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::GenerateData {
            output,
            samples,
            seed,
        } => {
            let mut generator = TransactionGenerator::new(seed);
            let (texts, labels) = generator.corpus(samples);
            write_dataset(&output, &texts, &labels)?;
            println!("wrote {samples} samples to {}", output.display());
        }
        Commands::Train {
            data,
            output,
            test_size,
            seed,
            max_iter,
            min_df,
            max_features,
        } => {
            let (texts, labels) = read_dataset(&data)?;
            let (classes, encoded) = encode_labels(&labels);
            let (x_train, x_test, y_train, y_test) =
                stratified_train_test_split(&texts, &encoded, test_size, Some(seed))?;
            let train_labels: Vec<&str> = y_train.iter().map(|&idx| classes[idx].as_str()).collect();

            let model = CategoryModel::train_with(
                &x_train,
                &train_labels,
                TfidfVectorizer::new()
                    .with_min_df(min_df)
                    .with_max_features(Some(max_features)),
                SoftmaxRegression::new().with_max_iter(max_iter),
            )?;

            if model.categories() != classes.as_slice() {
                return Err(
                    "held-out split removed a category from the training side; lower --test-size"
                        .into(),
                );
            }

            let predictor = Predictor::new(model);
            let y_pred = predict_indices(&predictor, &x_test)?;
            println!(
                "{}",
                classification_report(&y_pred, &y_test, predictor.model().categories())
            );

            predictor.model().save(&output)?;
            println!("saved model to {}", output.display());
        }
        Commands::Evaluate { model, data } => {
            let model = CategoryModel::load(&model)?;
            let (texts, labels) = read_dataset(&data)?;

            let categories = model.categories().to_vec();
            let y_true: Vec<usize> = labels
                .iter()
                .map(|label| {
                    categories
                        .binary_search_by(|category| category.as_str().cmp(label))
                        .map_err(|_| format!("dataset label not in model: {label}"))
                })
                .collect::<std::result::Result<_, _>>()?;

            let predictor = Predictor::new(model);
            let y_pred = predict_indices(&predictor, &texts)?;
            println!("{}", classification_report(&y_pred, &y_true, &categories));
        }
        Commands::Predict { model, text } => {
            let model = CategoryModel::load(&model)?;
            let predictor = Predictor::new(model);
            let prediction = predictor.predict(&text)?;
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
        Commands::Categories { taxonomy } => {
            let taxonomy = Taxonomy::from_yaml_file(&taxonomy)?;
            for category in taxonomy.categories() {
                println!("{category}");
            }
        }
    }
    Ok(())
}

fn predict_indices(predictor: &Predictor, texts: &[String]) -> Result<Vec<usize>> {
    let categories = predictor.model().categories();
    texts
        .iter()
        .map(|text| {
            let prediction = predictor.predict(text)?;
            categories
                .binary_search_by(|category| category.as_str().cmp(&prediction.category))
                .map_err(|_| "predicted category missing from model".into())
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
