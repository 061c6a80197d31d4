//! pictionary-api crate
//!
//! Web server handing out drawing prompts for the pictionary game as HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Health Check (`GET /health` is an alias)
//! - `GET /random-word` - Unconstrained random word
//! - `POST /word` - Random word within the length bounds, round time echoed
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/word \
//!   -H "Content-Type: application/json" \
//!   -d '{"round_time": 45}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HealthResponse, RandomWordResponse, WordRequest, WordResponse};
pub use service::WordApiServiceFull;
