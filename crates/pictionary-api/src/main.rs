//! pictionary-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pictionary_api::ApiError;
use pictionary_api::api::AppState;
use pictionary_api::api::run_server;
use pictionary_api::config::{APP_NAME, Config};
use pictionary_api::service::WordApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルの決定に DEBUG を使うため先に読む）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG が設定されていればそちらを優先）
  let default_level = if config.debug { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    app = APP_NAME,
    min_word_length = config.min_word_length,
    max_word_length = config.max_word_length,
    cors = ?config.cors,
    debug = config.debug,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(WordApiServiceFull::new(&config)?);
  tracing::info!(word_count = service.word_count(), "単語サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
