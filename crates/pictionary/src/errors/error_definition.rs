//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 単語選択・コーパス読み込みに関するエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordsError {
  /// コーパスが空（抽選対象の単語が 1 つもない）
  #[error("単語リストが空です: 少なくとも 1 語が必要です")]
  EmptyCorpus,

  /// 単語リストファイルの読み込みに失敗
  #[error("単語リストの読み込みに失敗しました: path={path:?}, error={source}")]
  CorpusRead {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

impl WordsError {
  /// Creates a `CorpusRead` error from the underlying IO error.
  pub fn corpus_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::CorpusRead { path: path.into(), source: Arc::new(source) }
  }
}

/// Result 型エイリアス
pub type WordsResult<T> = std::result::Result<T, WordsError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn corpus_read_keeps_path_and_source() {
    let err = WordsError::corpus_read("/tmp/words.txt", io::Error::from(io::ErrorKind::NotFound));
    let message = err.to_string();
    assert!(message.contains("words.txt"));

    match err {
      WordsError::CorpusRead { path, source } => {
        assert_eq!(path, PathBuf::from("/tmp/words.txt"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
