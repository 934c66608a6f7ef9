//! Hosted inference speech provider
//!
//! POSTs text to a Hugging Face style inference endpoint that returns raw
//! audio bytes. Used as the cloud fallback when no dedicated TTS vendor is
//! configured.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::voices;

/// Timeout for the availability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Sampling temperature the model is queried with
const TEMPERATURE: f32 = 0.7;

/// Speech provider backed by a hosted inference endpoint
#[derive(Debug, Clone)]
pub struct HostedInferenceProvider {
    client: Client,
    endpoint: String,
    token: String,
}

/// Inference request body
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    speaker: &'a str,
    speed: f32,
    temperature: f32,
}

impl HostedInferenceProvider {
    /// Create a new hosted inference provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout_ms: u64,
    ) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HostedInferenceProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                speaker: voices::kokoro_speaker(voice_id),
                speed,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
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
                "Inference endpoint returned no audio".to_string(),
            ));
        }

        debug!(audio_size = audio.len(), "Inference synthesis complete");

        Ok(audio.to_vec())
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Inference endpoint availability check failed: {}", e);
                false
            },
        }
    }

    fn name(&self) -> &'static str {
        "hosted-inference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_provider() {
        let provider = HostedInferenceProvider::new("https://example.test/model", "tok", 30000);
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_name() {
        let provider =
            HostedInferenceProvider::new("https://example.test/model", "tok", 30000).unwrap();
        assert_eq!(provider.name(), "hosted-inference");
    }

    #[test]
    fn request_body_shape() {
        let request = InferenceRequest {
            inputs: "The torch gutters.",
            parameters: InferenceParameters {
                speaker: "am_michael",
                speed: 1.0,
                temperature: TEMPERATURE,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "The torch gutters.");
        assert_eq!(json["parameters"]["speaker"], "am_michael");
        assert!((json["parameters"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }
}
