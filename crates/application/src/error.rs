//! Application-level errors

use audio_cache::CacheError;
use speech::SpeechError;
use thiserror::Error;

/// Errors that can occur while handling a narration request
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request failed validation; never retried
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The selected provider failed to synthesize audio
    #[error("Speech generation failed: {0}")]
    Generation(#[from] SpeechError),

    /// The cache could not persist or serve an artifact
    #[error("Audio storage failed: {0}")]
    Storage(#[from] CacheError),
}
