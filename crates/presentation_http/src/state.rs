//! Application state shared across handlers

use std::sync::Arc;

use application::NarrationService;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Narration service handling speech requests
    pub narration: Arc<NarrationService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
