use super::*;

#[test]
fn test_split_sizes() {
    let x: Vec<u32> = (0..10).collect();
    let y: Vec<usize> = vec![0; 10];
    let (x_train, x_test, y_train, y_test) =
        train_test_split(&x, &y, 0.3, Some(7)).expect("split should succeed");
    assert_eq!(x_train.len(), 7);
    assert_eq!(x_test.len(), 3);
    assert_eq!(y_train.len(), 7);
    assert_eq!(y_test.len(), 3);
}

#[test]
fn test_split_is_a_partition() {
    let x: Vec<u32> = (0..20).collect();
    let y: Vec<usize> = vec![0; 20];
    let (x_train, x_test, _, _) =
        train_test_split(&x, &y, 0.25, Some(1)).expect("split should succeed");

    let mut all: Vec<u32> = x_train.into_iter().chain(x_test).collect();
    all.sort_unstable();
    assert_eq!(all, x);
}

#[test]
fn test_seed_makes_split_deterministic() {
    let x: Vec<u32> = (0..15).collect();
    let y: Vec<usize> = vec![0; 15];
    let first = train_test_split(&x, &y, 0.2, Some(42)).expect("split should succeed");
    let second = train_test_split(&x, &y, 0.2, Some(42)).expect("split should succeed");
    assert_eq!(first, second);
}

#[test]
fn test_invalid_test_size() {
    let x = vec![1u32, 2];
    let y = vec![0usize, 1];
    assert!(train_test_split(&x, &y, 0.0, None).is_err());
    assert!(train_test_split(&x, &y, 1.0, None).is_err());
    assert!(train_test_split(&x, &y, -0.5, None).is_err());
}

#[test]
fn test_length_mismatch() {
    let x = vec![1u32, 2, 3];
    let y = vec![0usize];
    assert!(train_test_split(&x, &y, 0.5, None).is_err());
}

#[test]
fn test_stratified_preserves_proportions() {
    // 40 samples of class 0, 10 of class 1.
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in 0..40 {
        x.push(i);
        y.push(0usize);
    }
    for i in 40..50 {
        x.push(i);
        y.push(1usize);
    }

    let (_, _, y_train, y_test) =
        stratified_train_test_split(&x, &y, 0.2, Some(3)).expect("split should succeed");

    let test_minority = y_test.iter().filter(|&&label| label == 1).count();
    let train_minority = y_train.iter().filter(|&&label| label == 1).count();
    assert_eq!(test_minority, 2);
    assert_eq!(train_minority, 8);
}

#[test]
fn test_stratified_keeps_singleton_class_in_train() {
    let x = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut y = vec![0usize; 10];
    y.push(1); // one lone sample of class 1

    let (_, _, y_train, y_test) =
        stratified_train_test_split(&x, &y, 0.2, Some(5)).expect("split should succeed");
    assert!(y_train.contains(&1));
    assert!(!y_test.contains(&1));
}

#[test]
fn test_stratified_deterministic() {
    let x: Vec<u32> = (0..30).collect();
    let y: Vec<usize> = (0..30).map(|i| i % 3).collect();
    let first = stratified_train_test_split(&x, &y, 0.3, Some(9)).expect("split should succeed");
    let second = stratified_train_test_split(&x, &y, 0.3, Some(9)).expect("split should succeed");
    assert_eq!(first, second);
}
