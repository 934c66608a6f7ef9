//! Narration service - orchestrates cache, synthesis, and storage
//!
//! The request path is: validate, answer from cache, otherwise synthesize
//! through the selected provider and persist the result under its content
//! hash. Concurrent identical requests are deliberately not deduplicated;
//! both may generate, and the overwrite-idempotent store keeps the race
//! safe (see DESIGN.md).

use std::fmt;
use std::sync::Arc;

use audio_cache::{AudioCacheStore, estimate_duration_secs};
use speech::SpeechSynthesizer;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::ApplicationError;
use crate::request::SpeechRequest;

/// Result of a narration request
#[derive(Debug, Clone)]
pub struct NarrationOutcome {
    /// Public reference to the stored audio (`/audio/{hash}.wav`)
    pub audio_url: String,
    /// Identifier for the session message log
    pub message_id: String,
    /// Whether the audio was served from the cache
    pub cached: bool,
    /// Estimated spoken length in seconds
    pub duration_secs: u64,
}

/// Service handling narration requests end-to-end
pub struct NarrationService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    cache: Arc<AudioCacheStore>,
}

impl fmt::Debug for NarrationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationService")
            .field("provider", &self.synthesizer.name())
            .finish_non_exhaustive()
    }
}

impl NarrationService {
    /// Create a new narration service
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, cache: Arc<AudioCacheStore>) -> Self {
        Self { synthesizer, cache }
    }

    /// Handle one narration request
    ///
    /// # Errors
    ///
    /// `Validation` for bad input, `Generation` when the provider fails,
    /// `Storage` when the artifact cannot be persisted. No partial artifact
    /// is written on a generation failure.
    #[instrument(skip(self, request), fields(
        session = %request.session_id,
        voice = %request.voice_id,
        text_len = request.text.len()
    ))]
    pub async fn narrate(
        &self,
        request: &SpeechRequest,
    ) -> Result<NarrationOutcome, ApplicationError> {
        request.validate()?;

        let duration_secs = estimate_duration_secs(&request.text);

        if let Some(audio_url) = self.cache.lookup(&request.text, &request.voice_id).await {
            debug!("Serving narration from cache");
            return Ok(NarrationOutcome {
                audio_url,
                message_id: Uuid::new_v4().to_string(),
                cached: true,
                duration_secs,
            });
        }

        info!(provider = self.synthesizer.name(), "Generating narration audio");

        let audio = self
            .synthesizer
            .synthesize(&request.text, &request.voice_id, request.speed)
            .await
            .map_err(|e| {
                warn!(error = %e, "Speech generation failed");
                ApplicationError::Generation(e)
            })?;

        let audio_url = self
            .cache
            .store(&audio, &request.text, &request.voice_id)
            .await
            .map_err(|e| {
                // The generated bytes are lost here; say so instead of retrying.
                warn!(error = %e, "Discarding generated audio: cache write failed");
                ApplicationError::Storage(e)
            })?;

        info!(audio_url = %audio_url, "Narration audio stored");

        Ok(NarrationOutcome {
            audio_url,
            message_id: Uuid::new_v4().to_string(),
            cached: false,
            duration_secs,
        })
    }

    /// Whether the selected provider is reachable
    pub async fn is_healthy(&self) -> bool {
        self.synthesizer.is_available().await
    }

    /// Name of the selected provider, for logs and the health endpoint
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.synthesizer.name()
    }
}
