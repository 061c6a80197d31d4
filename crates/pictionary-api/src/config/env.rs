//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use pictionary::LengthRange;

use super::constants::{
  DEFAULT_CORS_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH,
  DEFAULT_PORT,
};
use crate::errors::ApiError;

/// CORS policy applied to every route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
  /// Any origin, method and header (`*`)
  AllowAny,
  /// Only the listed origins
  AllowOrigins(Vec<HeaderValue>),
  /// No CORS layer at all
  Disabled,
}

impl FromStr for CorsPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s == "*" {
      return Ok(Self::AllowAny);
    }
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
      return Ok(Self::Disabled);
    }

    let origins = s
      .split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(|origin| {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
          return Err(format!(
            "Invalid origin: {origin}. Origins must start with http:// or https://"
          ));
        }
        HeaderValue::from_str(origin).map_err(|e| format!("Invalid origin: {origin} ({e})"))
      })
      .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
      return Ok(Self::Disabled);
    }
    Ok(Self::AllowOrigins(origins))
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind host (e.g. "0.0.0.0")
  pub host: String,
  /// Bind port
  pub port: u16,
  /// Default lower length bound for `POST /word`
  pub min_word_length: usize,
  /// Default upper length bound for `POST /word`
  pub max_word_length: usize,
  /// CORS policy
  pub cors: CorsPolicy,
  /// Optional word list replacing the built-in corpus
  pub word_list_path: Option<PathBuf>,
  /// Local development toggle (verbose logging)
  pub debug: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      min_word_length: DEFAULT_MIN_WORD_LENGTH,
      max_word_length: DEFAULT_MAX_WORD_LENGTH,
      cors: CorsPolicy::AllowAny,
      word_list_path: None,
      debug: false,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a map instead of touching the process environment.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
    let min_word_length = parse_or(&lookup, "MIN_WORD_LENGTH", DEFAULT_MIN_WORD_LENGTH)?;
    let max_word_length = parse_or(&lookup, "MAX_WORD_LENGTH", DEFAULT_MAX_WORD_LENGTH)?;

    let cors_str =
      lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string());
    let cors = CorsPolicy::from_str(&cors_str).map_err(ApiError::config)?;

    let word_list_path =
      lookup("WORD_LIST_PATH").filter(|path| !path.trim().is_empty()).map(PathBuf::from);

    let debug = match lookup("DEBUG") {
      Some(value) => parse_bool(&value)
        .ok_or_else(|| ApiError::config(format!("DEBUG must be a boolean, got: {value}")))?,
      None => false,
    };

    Ok(Self { host, port, min_word_length, max_word_length, cors, word_list_path, debug })
  }

  /// Bind address in `host:port` form (IPv6 hosts are bracketed)
  #[must_use]
  pub fn bind_addr(&self) -> String {
    if self.host.contains(':') && !self.host.starts_with('[') {
      format!("[{}]:{}", self.host, self.port)
    } else {
      format!("{}:{}", self.host, self.port)
    }
  }

  /// Default length bounds applied to `POST /word`
  ///
  /// `min > max` is not rejected; such a range selects from the whole corpus.
  #[must_use]
  pub fn word_length_range(&self) -> LengthRange {
    LengthRange::new(self.min_word_length, self.max_word_length)
  }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> crate::errors::Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(key) {
    Some(value) => value
      .trim()
      .parse()
      .map_err(|e| ApiError::config(format!("{key} の値が不正です: {value} ({e})"))),
    None => Ok(default),
  }
}

fn parse_bool(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "" | "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}
