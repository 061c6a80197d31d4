// crates/pictionary/src/corpus.rs

//! Built-in word list and loaders for custom word lists.

use std::path::Path;

use tracing::debug;

use crate::errors::{WordsError, WordsResult};

/// Number of words in the built-in corpus.
pub const WORD_COUNT: usize = 40;

/// Built-in drawing prompts.
///
/// Every entry is lowercase ASCII and between 3 and 8 characters long,
/// so the default 3..=10 length bounds never trigger the fallback path.
pub const WORDS: [&str; WORD_COUNT] = [
  "house", "car", "cat", "dog", "tree", "flower", "sun", "moon", "star", "fish", //
  "bird", "book", "phone", "computer", "chair", "table", "window", "door", "key", "clock", //
  "bicycle", "airplane", "boat", "train", "bus", "road", "bridge", "mountain", "river", "ocean", //
  "pizza", "burger", "cake", "apple", "banana", "guitar", "piano", "camera", "ball", "game",
];

/// Parses a newline separated word list.
///
/// - Surrounding whitespace is trimmed and words are lowercased
/// - Blank lines and lines starting with `#` are skipped
/// - Order and duplicates are preserved
pub fn parse_corpus(text: &str) -> Vec<String> {
  text
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'))
    .map(str::to_lowercase)
    .collect()
}

/// Reads and parses a word list file.
///
/// # Errors
/// - [`WordsError::CorpusRead`] if the file cannot be read
/// - [`WordsError::EmptyCorpus`] if the file contains no words
pub fn load_corpus(path: impl AsRef<Path>) -> WordsResult<Vec<String>> {
  let path = path.as_ref();
  let text = std::fs::read_to_string(path).map_err(|e| WordsError::corpus_read(path, e))?;

  let words = parse_corpus(&text);
  if words.is_empty() {
    return Err(WordsError::EmptyCorpus);
  }

  debug!(path = %path.display(), word_count = words.len(), "word list loaded");
  Ok(words)
}
