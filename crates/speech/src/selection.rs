//! Startup-time provider selection
//!
//! Picks exactly one synthesis backend from configuration, in fixed
//! priority order. Selection happens once per process; a failing provider
//! at call time surfaces its error instead of falling through to the next
//! one, so which backend serves a deployment is always predictable.
//!
//! Priority: local script, Play.ht, ElevenLabs, hosted inference, silence.
//! A flag only qualifies when its credential is present; with nothing
//! configured the silent fallback is wired in and a warning is logged.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::providers::elevenlabs::ElevenLabsProvider;
use crate::providers::hosted_inference::HostedInferenceProvider;
use crate::providers::local_process::LocalProcessProvider;
use crate::providers::playht::PlayHtProvider;
use crate::providers::silence::SilenceProvider;

/// Select the synthesis backend for this process
///
/// # Errors
///
/// Returns `SpeechError::Configuration` if the winning provider cannot be
/// constructed (e.g. its HTTP client fails to build).
pub fn select_provider(
    config: &SpeechConfig,
) -> Result<Arc<dyn SpeechSynthesizer>, SpeechError> {
    config
        .validate()
        .map_err(SpeechError::Configuration)?;

    // Local synthesis wins over every cloud flag.
    if config.use_local_tts {
        let provider = LocalProcessProvider::new(
            &config.python_bin,
            &config.local_script_path,
            config.timeout_ms,
        );
        info!(script = %config.local_script_path.display(), "Speech provider: local script");
        return Ok(Arc::new(provider));
    }

    if config.use_playht {
        if let (Some(api_key), Some(user_id)) = (&config.playht_api_key, &config.playht_user_id) {
            let provider = PlayHtProvider::new(api_key, user_id, config.timeout_ms)?;
            info!("Speech provider: Play.ht");
            return Ok(Arc::new(provider));
        }
        warn!("Play.ht enabled but credentials are incomplete; skipping");
    }

    if config.use_elevenlabs {
        if let Some(api_key) = &config.elevenlabs_api_key {
            let provider = ElevenLabsProvider::new(api_key, config.timeout_ms)?;
            info!("Speech provider: ElevenLabs");
            return Ok(Arc::new(provider));
        }
        warn!("ElevenLabs enabled but no API key is set; skipping");
    }

    if let Some(token) = &config.inference_token {
        let provider =
            HostedInferenceProvider::new(&config.inference_url, token, config.timeout_ms)?;
        info!(endpoint = %config.inference_url, "Speech provider: hosted inference");
        return Ok(Arc::new(provider));
    }

    warn!("No speech provider configured; sessions will receive silent placeholder audio");
    Ok(Arc::new(SilenceProvider::new(config.sample_rate)))
}
