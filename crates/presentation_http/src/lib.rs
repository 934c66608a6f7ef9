//! HTTP presentation layer for the Taleforge speech service
//!
//! Exposes the narration API:
//! - `POST /speech` - synthesize (or reuse) audio for a session line
//! - `GET /speech/health` - active provider health
//! - `GET /speech/voices` - the static voice catalog
//! - `GET /audio/{hash}.wav` - cached artifacts, served statically
//!
//! plus the periodic cache sweep task and the server binary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod tasks;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
