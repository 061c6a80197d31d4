//! モデルモジュール

mod request;
mod response;

pub use request::WordRequest;
pub use response::{HealthResponse, RandomWordResponse, WordResponse};
