//! crates/pictionary/tests/selection_test.rs
//!
//! Statistical and file-based checks for word selection.
//! Seeded generators keep the distribution checks deterministic.

use std::collections::HashMap;
use std::io::Write;

use fastrand::Rng;
use tempfile::NamedTempFile;

use pictionary::{LengthRange, WORDS, WordSelector, WordsError, select_word_with};

const DRAWS: usize = 10_000;

/// Counts how often each word is drawn.
fn histogram(selector: &WordSelector, range: LengthRange, seed: u64) -> HashMap<String, usize> {
  let mut rng = Rng::with_seed(seed);
  let mut counts = HashMap::new();
  for _ in 0..DRAWS {
    let selection = selector.select_with(&mut rng, range).expect("selection should succeed");
    *counts.entry(selection.word.to_string()).or_insert(0) += 1;
  }
  counts
}

#[test]
fn unconstrained_draws_are_roughly_uniform() {
  let selector = WordSelector::builtin();
  let counts = histogram(&selector, LengthRange::unbounded(), 2024);

  let expected = DRAWS as f64 / WORDS.len() as f64;
  assert_eq!(counts.len(), WORDS.len(), "every word should appear at least once");

  for (word, count) in &counts {
    // expected = 250, sd ≈ 15.6; ±40% is far outside sampling noise
    let ratio = *count as f64 / expected;
    assert!((0.6..=1.4).contains(&ratio), "{word}: {count} draws (ratio {ratio:.2})");
  }
}

#[test]
fn constrained_draws_are_uniform_over_candidates() {
  let selector = WordSelector::builtin();
  let range = LengthRange::new(3, 3);
  let counts = histogram(&selector, range, 99);

  let candidates: Vec<&str> = WORDS.iter().copied().filter(|w| range.contains(w)).collect();
  assert_eq!(counts.len(), candidates.len());

  let expected = DRAWS as f64 / candidates.len() as f64;
  for word in candidates {
    let count = counts.get(word).copied().unwrap_or(0);
    let ratio = count as f64 / expected;
    assert!((0.8..=1.2).contains(&ratio), "{word}: {count} draws");
  }
}

#[test]
fn every_draw_is_a_corpus_member() {
  let selector = WordSelector::builtin();
  let mut rng = Rng::with_seed(5);
  let ranges = [
    LengthRange::unbounded(),
    LengthRange::new(3, 10),
    LengthRange::new(5, 5),
    LengthRange::new(100, 200),
    LengthRange::new(9, 2),
  ];

  for range in ranges {
    for _ in 0..200 {
      let selection = select_word_with(&mut rng, &WORDS, range).unwrap();
      assert!(WORDS.contains(&selection.word));
      assert_eq!(selection.fallback, !WORDS.iter().any(|w| range.contains(w)));
      if !selection.fallback {
        assert!(range.contains(selection.word));
      }
    }
  }
}

#[test]
fn selector_from_file() {
  let mut file = NamedTempFile::new().expect("create temp file");
  writeln!(file, "# custom prompts\nRocket\nvolcano\n\nlighthouse").expect("write words");

  let selector = WordSelector::from_file(file.path()).expect("load word list");
  assert_eq!(selector.words(), ["rocket", "volcano", "lighthouse"]);

  let selection = selector.select(LengthRange::new(10, 10)).unwrap();
  assert_eq!(selection.word, "lighthouse");
  assert!(!selection.fallback);
}

#[test]
fn selector_from_file_without_words() {
  let mut file = NamedTempFile::new().expect("create temp file");
  writeln!(file, "# nothing here").expect("write comment");

  let err = WordSelector::from_file(file.path()).unwrap_err();
  assert!(matches!(err, WordsError::EmptyCorpus));
}

#[test]
fn selector_from_missing_file() {
  let dir = tempfile::tempdir().expect("create temp dir");
  let err = WordSelector::from_file(dir.path().join("missing.txt")).unwrap_err();
  assert!(matches!(err, WordsError::CorpusRead { .. }));
}
