//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_dir = state.config.cache.audio_dir.clone();

    Router::new()
        // Speech API
        .route("/speech", post(handlers::speech::generate_speech))
        .route("/speech/health", get(handlers::health::speech_health))
        .route("/speech/voices", get(handlers::speech::list_voices))
        // Cached artifacts, served statically
        .nest_service("/audio", ServeDir::new(audio_dir))
        // Attach state
        .with_state(state)
}
