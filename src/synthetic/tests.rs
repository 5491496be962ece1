use super::*;

#[test]
fn test_corpus_size_and_label_validity() {
    let mut generator = TransactionGenerator::new(7);
    let (texts, labels) = generator.corpus(100);
    assert_eq!(texts.len(), 100);
    assert_eq!(labels.len(), 100);

    let known = categories();
    for label in &labels {
        assert!(known.contains(&label.as_str()), "unknown label: {label}");
    }
    for text in &texts {
        assert!(!text.is_empty());
    }
}

#[test]
fn test_same_seed_same_corpus() {
    let first = TransactionGenerator::new(42).corpus(30);
    let second = TransactionGenerator::new(42).corpus(30);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_diverge() {
    let first = TransactionGenerator::new(1).corpus(30);
    let second = TransactionGenerator::new(2).corpus(30);
    assert_ne!(first, second);
}

#[test]
fn test_sample_for_category() {
    let mut generator = TransactionGenerator::new(3);
    let text = generator.sample_for("Dining").expect("known category");
    let dining = ["Starbucks", "McDonald", "Domino", "KFC", "Subway", "Cafe"];
    assert!(dining.iter().any(|merchant| text.contains(merchant)));
}

#[test]
fn test_sample_for_unknown_category_errors() {
    let mut generator = TransactionGenerator::new(3);
    assert!(generator.sample_for("Crypto").is_err());
}

#[test]
fn test_categories_list() {
    let known = categories();
    assert_eq!(known.len(), 8);
    assert!(known.contains(&"Dining"));
    assert!(known.contains(&"Others"));
}
