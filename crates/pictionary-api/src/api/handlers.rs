//! HTTPハンドラー定義

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{HealthResponse, RandomWordResponse, WordRequest, WordResponse};

use super::state::AppState;

/// ヘルスチェックエンドポイント（`GET /`, `GET /health`）
///
/// 依存する外部リソースがないため、常に `{"status": "ok"}` を返す。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::ok())
}

/// GET /random-word エンドポイント
///
/// 組み込みコーパス全体から制約なしで 1 語を返す。
///
/// # Response
/// - 200 OK: `{"word": "cat"}`
pub async fn get_random_word(
  State(state): State<AppState>,
) -> Result<Json<RandomWordResponse>, ApiError> {
  let response = state.service.random_word()?;

  debug!(word = %response.word, "ランダム単語を返却");

  Ok(Json(response))
}

/// POST /word エンドポイント
///
/// 文字数の上下限を満たす単語を 1 語選ぶ。該当する単語がなければコーパス全体から選ぶ。
///
/// # Request Body
/// ```json
/// { "round_time": 45, "min_length": 3, "max_length": 10 }
/// ```
/// 全フィールド省略可能（`round_time` の既定値は 60）。
///
/// # Response
/// - 200 OK: `{"word": "house", "round_time": 45, "fallback": false}`
/// - 400 Bad Request: JSON が不正
pub async fn post_word(
  State(state): State<AppState>,
  payload: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<WordResponse>, ApiError> {
  let Json(request) = payload.inspect_err(|e| debug!(error = %e, "リクエストボディが不正"))?;

  debug!(
    round_time = request.round_time,
    min_length = ?request.min_length,
    max_length = ?request.max_length,
    "お題リクエストを受信"
  );

  // 単語選択は軽量なため spawn_blocking を使わずに同期的に実行する
  let response = state.service.pick_word(request)?;

  info!(word = %response.word, fallback = response.fallback, "お題を選択");

  Ok(Json(response))
}
