//! リクエストモデル定義

use serde::Deserialize;

use crate::config::DEFAULT_ROUND_TIME;

/// お題リクエスト（`POST /word`）
///
/// 全フィールド省略可能。文字数の上下限は省略時にサーバー設定の値を使う。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRequest {
  /// ラウンド時間（秒）。サーバーは解釈せずそのまま返す
  #[serde(default = "default_round_time")]
  pub round_time: u32,
  /// 最小文字数の上書き
  #[serde(default)]
  pub min_length: Option<usize>,
  /// 最大文字数の上書き
  #[serde(default)]
  pub max_length: Option<usize>,
}

fn default_round_time() -> u32 {
  DEFAULT_ROUND_TIME
}

impl Default for WordRequest {
  fn default() -> Self {
    Self { round_time: DEFAULT_ROUND_TIME, min_length: None, max_length: None }
  }
}
