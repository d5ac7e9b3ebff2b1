//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use aura_agent::{AgentEngine, RequestDefaults};
use aura_core::AuraConfig;

/// Shared application state. Everything is read-only after startup, so
/// `Arc` is enough and no locks are needed.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AuraConfig>,
    /// Compiled response engine.
    pub engine: Arc<AgentEngine>,
    /// Fallbacks merged into every incoming payload.
    pub defaults: Arc<RequestDefaults>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AuraConfig) -> Self {
        let engine = AgentEngine::from_config(&config);
        let defaults = RequestDefaults::from_config(&config);
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            defaults: Arc::new(defaults),
            start_time: Instant::now(),
        }
    }
}
