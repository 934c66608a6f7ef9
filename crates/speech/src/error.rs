//! Speech synthesis errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to a speech backend
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to a speech backend failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Backend returned a response we could not use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during synthesis
    #[error("Speech synthesis timeout after {0}ms")]
    Timeout(u64),

    /// A job-based backend reported or never finished a job
    #[error("Synthesis job {job_id} failed: {reason}")]
    JobFailed {
        /// Identifier the backend assigned to the job
        job_id: String,
        /// Backend-reported failure reason, or a polling diagnosis
        reason: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider not available (not installed or configured)
    #[error("Provider not available: {0}")]
    NotAvailable(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
