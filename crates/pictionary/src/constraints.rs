// crates/pictionary/src/constraints.rs

//! Length constraints applied to the corpus before drawing a word.

use std::fmt;

/// Inclusive character-length bounds for a word.
///
/// Lengths are counted in `char`s, not bytes.
/// A range with `min > max` is accepted and simply matches no word.
///
/// # Examples
/// ```
/// use pictionary::LengthRange;
///
/// let range = LengthRange::new(3, 5);
/// assert!(range.contains("cat"));
/// assert!(!range.contains("airplane"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
  /// Minimum length (inclusive)
  pub min: usize,
  /// Maximum length (inclusive)
  pub max: usize,
}

impl LengthRange {
  /// Creates a range from explicit bounds.
  #[must_use]
  pub const fn new(min: usize, max: usize) -> Self {
    Self { min, max }
  }

  /// A range that matches every word.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self { min: 0, max: usize::MAX }
  }

  /// Returns `true` if the word's length lies within the bounds.
  #[must_use]
  pub fn contains(&self, word: &str) -> bool {
    let len = word.chars().count();
    self.min <= len && len <= self.max
  }

  /// Returns `true` if no word can ever satisfy this range.
  #[must_use]
  pub const fn is_contradictory(&self) -> bool {
    self.min > self.max
  }
}

impl Default for LengthRange {
  fn default() -> Self {
    Self::unbounded()
  }
}

impl fmt::Display for LengthRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.max == usize::MAX {
      write!(f, "{}..", self.min)
    } else {
      write!(f, "{}..={}", self.min, self.max)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bounds_are_inclusive() {
    let range = LengthRange::new(3, 5);
    assert!(range.contains("cat"));
    assert!(range.contains("house"));
    assert!(!range.contains("ox"));
    assert!(!range.contains("flower"));
  }

  #[test]
  fn length_counts_chars_not_bytes() {
    // "café" is 4 chars but 5 bytes
    assert!(LengthRange::new(4, 4).contains("café"));
  }

  #[test]
  fn unbounded_matches_everything() {
    let range = LengthRange::default();
    assert!(range.contains(""));
    assert!(range.contains("supercalifragilisticexpialidocious"));
  }

  #[test]
  fn contradictory_range_matches_nothing() {
    let range = LengthRange::new(10, 3);
    assert!(range.is_contradictory());
    assert!(!range.contains("house"));
    assert!(!range.contains("computer"));
  }

  #[test]
  fn display() {
    assert_eq!(LengthRange::new(3, 10).to_string(), "3..=10");
    assert_eq!(LengthRange::unbounded().to_string(), "0..");
  }
}
