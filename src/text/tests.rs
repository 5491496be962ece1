use super::*;

#[test]
fn test_normalize_lowercases_and_collapses() {
    assert_eq!(normalize("KFC  - POS TXN"), "kfc - pos txn");
    assert_eq!(normalize("Uber\t\nTrip"), "uber trip");
}

#[test]
fn test_normalize_trims() {
    assert_eq!(normalize("  netflix subscription  "), "netflix subscription");
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" \t\n "), "");
}

#[test]
fn test_normalize_idempotent() {
    let samples = [
        "STARBUCKS #0421 MUMBAI IN",
        "  Shell   Petrol  ",
        "déjà VU café",
        "",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_word_ngrams_unigrams_only() {
    assert_eq!(word_ngrams("a b c", 1, 1), vec!["a", "b", "c"]);
}

#[test]
fn test_word_ngrams_full_range() {
    let grams = word_ngrams("a b c", 1, 3);
    assert_eq!(grams, vec!["a", "b", "c", "a b", "b c", "a b c"]);
}

#[test]
fn test_word_ngrams_short_text() {
    // Windows longer than the token list produce nothing.
    assert_eq!(word_ngrams("solo", 1, 3), vec!["solo"]);
    assert!(word_ngrams("", 1, 3).is_empty());
}

#[test]
fn test_word_ngrams_min_n_clamped() {
    // min_n of 0 is treated as 1.
    assert_eq!(word_ngrams("x y", 0, 1), vec!["x", "y"]);
}
