//! Config module

mod constants;
mod env;

pub use constants::{
  APP_NAME, DEFAULT_CORS_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_MAX_WORD_LENGTH,
  DEFAULT_MIN_WORD_LENGTH, DEFAULT_PORT, DEFAULT_ROUND_TIME,
};
pub use env::{Config, CorsPolicy};
