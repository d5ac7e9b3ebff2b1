//! Aura API crate - axum HTTP boundary around the agent engine.
//!
//! Exposes `POST /api/agent` for one customer message and `GET /health`,
//! with CORS, compression, tracing and a fixed-window rate limiter.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
