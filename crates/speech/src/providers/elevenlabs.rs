//! ElevenLabs speech provider
//!
//! Low-latency cloud synthesis through the ElevenLabs turbo model. Voice
//! settings (stability/similarity) are fixed; per-character variation comes
//! from the voice itself.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::voices;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Turbo model tuned for latency over fidelity
const MODEL_ID: &str = "eleven_turbo_v2_5";

const STABILITY: f32 = 0.5;
const SIMILARITY_BOOST: f32 = 0.75;

/// Timeout for the availability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Speech provider backed by the ElevenLabs API
#[derive(Debug, Clone)]
pub struct ElevenLabsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

/// ElevenLabs TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

impl ElevenLabsProvider {
    /// Create a new ElevenLabs provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, timeout_ms: u64) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different API host (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn tts_url(&self, voice: &str) -> String {
        format!("{}/v1/text-to-speech/{voice}", self.base_url)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        let voice = voices::elevenlabs_voice(voice_id);

        let request = TtsRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
                speed: if (speed - 1.0).abs() < f32::EPSILON {
                    None
                } else {
                    Some(speed)
                },
            },
        };

        let response = self
            .client
            .post(self.tts_url(voice))
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let audio: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "ElevenLabs returned no audio".to_string(),
            ));
        }

        debug!(audio_size = audio.len(), "ElevenLabs synthesis complete");

        Ok(audio.to_vec())
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/v1/user", self.base_url);

        match self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("ElevenLabs availability check failed: {}", e);
                false
            },
        }
    }

    fn name(&self) -> &'static str {
        "elevenlabs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_provider() {
        let provider = ElevenLabsProvider::new("el-key", 30000);
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_name() {
        let provider = ElevenLabsProvider::new("el-key", 30000).unwrap();
        assert_eq!(provider.name(), "elevenlabs");
    }

    #[test]
    fn tts_url_includes_native_voice() {
        let provider = ElevenLabsProvider::new("el-key", 30000)
            .unwrap()
            .with_base_url("https://mock.test");
        assert_eq!(
            provider.tts_url("pNInz6obpgDQGcFmaJgB"),
            "https://mock.test/v1/text-to-speech/pNInz6obpgDQGcFmaJgB"
        );
    }

    #[test]
    fn default_speed_is_omitted_from_body() {
        let request = TtsRequest {
            text: "Hail and well met",
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
                speed: None,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["voice_settings"].get("speed").is_none());
        assert!((json["voice_settings"]["stability"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn custom_speed_is_serialized() {
        let request = TtsRequest {
            text: "Run!",
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
                speed: Some(1.5),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!((json["voice_settings"]["speed"].as_f64().unwrap() - 1.5).abs() < 1e-6);
    }
}
