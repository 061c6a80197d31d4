//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::handlers::{get_random_word, health_check, post_word};
use super::state::AppState;
use crate::config::{APP_NAME, CorsPolicy};
use crate::errors::ApiError;

/// CORS ポリシーからレイヤーを作成する
///
/// `CorsPolicy::Disabled` の場合は `None`（レイヤーを付与しない）。
#[must_use]
pub fn cors_layer(policy: &CorsPolicy) -> Option<CorsLayer> {
  match policy {
    CorsPolicy::AllowAny => Some(CorsLayer::permissive()),
    CorsPolicy::AllowOrigins(origins) => Some(
      CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(Any)
        .allow_headers(Any),
    ),
    CorsPolicy::Disabled => None,
  }
}

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let mut router = Router::new()
    .route("/", get(health_check))
    .route("/health", get(health_check))
    .route("/random-word", get(get_random_word))
    .route("/word", post(post_word))
    .layer(TraceLayer::new_for_http());

  if let Some(cors) = cors_layer(&state.config.cors) {
    router = router.layer(cors);
  }

  router.with_state(state)
}

/// サーバーを起動する
///
/// Ctrl+C / SIGTERM を受け取ると処理中のリクエストを待ってから終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  info!(app = APP_NAME, "サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  info!("サーバーを停止しました");
  Ok(())
}

/// 終了シグナルを待機する
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      error!(error = %e, "Ctrl+C ハンドラーの登録に失敗しました");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        error!(error = %e, "SIGTERM ハンドラーの登録に失敗しました");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  info!("終了シグナルを受信しました");
}
