//! APIエラー定義

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// pictionary クレートのエラー型をインポート
use pictionary::WordsError;

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("入力値が無効です: {0}")]
  InvalidInput(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse { error: ErrorBody { code: self.code(), message: self.to_string() } };

    (status, Json(body)).into_response()
  }
}

/// WordsError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
/// 単語リストの問題は起動時にしか起きないため、いずれも設定エラーか内部エラーになる。
impl From<WordsError> for ApiError {
  fn from(err: WordsError) -> Self {
    match err {
      WordsError::CorpusRead { .. } => ApiError::config(err.to_string()),
      WordsError::EmptyCorpus => ApiError::internal(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Json extractor のリジェクションを統一フォーマットのエラーに変換
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::invalid_input(rejection.body_text())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_input_creation() {
    let err = ApiError::invalid_input("テストエラー");
    assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn internal_creation() {
    let err = ApiError::internal("内部処理エラー");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.code(), "internal_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("PORT が不正です");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.code(), "config_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_words_error_empty_corpus() {
    let api_err: ApiError = WordsError::EmptyCorpus.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Internal);
    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_words_error_corpus_read() {
    let words_err =
      WordsError::corpus_read("words.txt", std::io::Error::from(std::io::ErrorKind::NotFound));
    let api_err: ApiError = words_err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Config);
    assert!(api_err.to_string().contains("words.txt"));
  }

  #[tokio::test]
  async fn into_response_has_error_body() {
    let response = ApiError::invalid_input("bad body").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes =
      axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).expect("valid json");
    assert_eq!(json["error"]["code"], "invalid_input");
    assert!(json["error"]["message"].as_str().unwrap().contains("bad body"));
  }
}
