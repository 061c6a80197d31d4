//! Word Selection Service

use pictionary::{LengthRange, WordSelector};
use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::models::{RandomWordResponse, WordRequest, WordResponse};

/// Common interface for the word service
///
/// This trait allows swapping production implementation (`WordApiServiceFull`) with
/// test stubs/mocks.
pub trait WordApiService: Send + Sync {
  /// Draws a word from the whole corpus
  ///
  /// # Errors
  /// Internal error only
  fn random_word(&self) -> Result<RandomWordResponse>;

  /// Draws a word within the requested (or configured) length bounds
  ///
  /// # Errors
  /// Internal error only
  fn pick_word(&self, request: WordRequest) -> Result<WordResponse>;
}

/// Word Selection Service
///
/// Holds the corpus and the default length bounds taken from `Config`.
#[derive(Debug, Clone)]
pub struct WordApiServiceFull {
  selector: WordSelector,
  default_range: LengthRange,
}

impl WordApiServiceFull {
  /// Initializes the service
  ///
  /// Uses `config.word_list_path` if set, the built-in corpus otherwise.
  ///
  /// # Errors
  /// Returns an error if the word list cannot be read or is empty
  pub fn new(config: &Config) -> Result<Self> {
    let selector = match &config.word_list_path {
      Some(path) => WordSelector::from_file(path)?,
      None => WordSelector::builtin(),
    };

    Ok(Self::with_selector(selector, config.word_length_range()))
  }

  /// Builds the service around an existing selector
  #[must_use]
  pub fn with_selector(selector: WordSelector, default_range: LengthRange) -> Self {
    Self { selector, default_range }
  }

  /// Number of words available
  #[must_use]
  pub fn word_count(&self) -> usize {
    self.selector.len()
  }

  /// Resolves the length bounds for a request
  ///
  /// Each side is overridden independently by the request.
  #[must_use]
  pub fn range_for(&self, request: &WordRequest) -> LengthRange {
    LengthRange::new(
      request.min_length.unwrap_or(self.default_range.min),
      request.max_length.unwrap_or(self.default_range.max),
    )
  }
}

/// Production implementation of trait `WordApiService`
impl WordApiService for WordApiServiceFull {
  fn random_word(&self) -> Result<RandomWordResponse> {
    let word = self.selector.random_word()?;
    Ok(RandomWordResponse { word: word.to_string() })
  }

  fn pick_word(&self, request: WordRequest) -> Result<WordResponse> {
    let range = self.range_for(&request);
    let selection = self.selector.select(range)?;

    debug!(%range, word = selection.word, fallback = selection.fallback, "word selected");

    Ok(WordResponse {
      word: selection.word.to_string(),
      round_time: request.round_time,
      fallback: selection.fallback,
    })
  }
}
