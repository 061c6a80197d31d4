// crates/pictionary/src/selector.rs

//! Random word selection with optional length constraints.
//!
//! 候補集合 `{ w | min <= len(w) <= max }` から一様に 1 語を選ぶ。
//! 候補が空の場合はエラーにせず、コーパス全体から選び直す（フォールバック）。

use std::path::Path;

use fastrand::Rng;
use tracing::debug;

use crate::constraints::LengthRange;
use crate::corpus::{WORDS, load_corpus};
use crate::errors::{WordsError, WordsResult};

/// Result of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
  /// The chosen word (always a member of the corpus)
  pub word: &'a str,
  /// `true` when no word satisfied the constraints and the draw used the whole corpus
  pub fallback: bool,
}

/// Draws a word from `corpus` using the thread-local random source.
///
/// # Errors
/// Returns [`WordsError::EmptyCorpus`] if `corpus` is empty.
pub fn select_word<S: AsRef<str>>(corpus: &[S], range: LengthRange) -> WordsResult<Selection<'_>> {
  select_word_with(&mut Rng::new(), corpus, range)
}

/// Draws a word from `corpus` using the given generator.
///
/// # Errors
/// Returns [`WordsError::EmptyCorpus`] if `corpus` is empty.
pub fn select_word_with<'a, S: AsRef<str>>(
  rng: &mut Rng,
  corpus: &'a [S],
  range: LengthRange,
) -> WordsResult<Selection<'a>> {
  if corpus.is_empty() {
    return Err(WordsError::EmptyCorpus);
  }

  let candidates: Vec<&'a str> =
    corpus.iter().map(AsRef::as_ref).filter(|word| range.contains(word)).collect();

  if let Some(word) = rng.choice(candidates) {
    return Ok(Selection { word, fallback: false });
  }

  debug!(%range, corpus_len = corpus.len(), "no word matches the length range, using full corpus");

  rng
    .choice(corpus)
    .map(|word| Selection { word: word.as_ref(), fallback: true })
    .ok_or(WordsError::EmptyCorpus)
}

/// Owns a non-empty corpus and draws words from it.
///
/// Cheap to share behind an `Arc`; it is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSelector {
  words: Vec<String>,
}

impl WordSelector {
  /// Creates a selector from an arbitrary word list.
  ///
  /// # Errors
  /// Returns [`WordsError::EmptyCorpus`] if `words` yields nothing.
  pub fn new<I, S>(words: I) -> WordsResult<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let words: Vec<String> = words.into_iter().map(Into::into).collect();
    if words.is_empty() {
      return Err(WordsError::EmptyCorpus);
    }
    Ok(Self { words })
  }

  /// Selector over the built-in [`WORDS`].
  #[must_use]
  pub fn builtin() -> Self {
    Self { words: WORDS.iter().map(|word| (*word).to_string()).collect() }
  }

  /// Loads the corpus from a newline separated file (see [`crate::corpus::parse_corpus`]).
  ///
  /// # Errors
  /// Returns an error if the file cannot be read or contains no words.
  pub fn from_file(path: impl AsRef<Path>) -> WordsResult<Self> {
    Ok(Self { words: load_corpus(path)? })
  }

  /// The words in corpus order.
  #[must_use]
  pub fn words(&self) -> &[String] {
    &self.words
  }

  /// Number of words (never zero).
  #[must_use]
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns `true` if the corpus has no words.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Returns `true` if `word` is part of the corpus.
  #[must_use]
  pub fn contains(&self, word: &str) -> bool {
    self.words.iter().any(|w| w == word)
  }

  /// Unconstrained draw over the whole corpus.
  ///
  /// # Errors
  /// Only fails if the corpus were empty, which construction rules out.
  pub fn random_word(&self) -> WordsResult<&str> {
    self.random_word_with(&mut Rng::new())
  }

  /// Unconstrained draw using the given generator.
  ///
  /// # Errors
  /// See [`WordSelector::random_word`].
  pub fn random_word_with(&self, rng: &mut Rng) -> WordsResult<&str> {
    self.select_with(rng, LengthRange::unbounded()).map(|selection| selection.word)
  }

  /// Draws a word satisfying `range`, falling back to the whole corpus.
  ///
  /// # Errors
  /// See [`WordSelector::random_word`].
  pub fn select(&self, range: LengthRange) -> WordsResult<Selection<'_>> {
    self.select_with(&mut Rng::new(), range)
  }

  /// Same as [`WordSelector::select`] with an explicit generator.
  ///
  /// # Errors
  /// See [`WordSelector::random_word`].
  pub fn select_with(&self, rng: &mut Rng, range: LengthRange) -> WordsResult<Selection<'_>> {
    select_word_with(rng, &self.words, range)
  }
}

impl Default for WordSelector {
  fn default() -> Self {
    Self::builtin()
  }
}
