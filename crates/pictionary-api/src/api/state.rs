//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WordApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service; both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word Selection Service
  ///
  /// - Production: `Arc::new(WordApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubWordApiService)`
  pub service: Arc<dyn WordApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn WordApiService>) -> Self {
    Self { config, service }
  }
}
