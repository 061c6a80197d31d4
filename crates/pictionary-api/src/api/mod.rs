//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_random_word, health_check, post_word};
pub use routes::{cors_layer, create_router, run_server};
pub use state::AppState;
