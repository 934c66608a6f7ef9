//! Play.ht speech provider
//!
//! Job-based cloud synthesis: a job is submitted, polled once per second for
//! up to thirty attempts, and the finished audio is downloaded from the URL
//! the job reports. A job that fails or never completes surfaces a
//! descriptive error carrying whatever the backend reported.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::voices;

const DEFAULT_BASE_URL: &str = "https://api.play.ht";

/// One-second spacing between status polls
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll ceiling; combined with the interval this bounds a job at ~30s
const MAX_POLL_ATTEMPTS: u32 = 30;

/// Timeout for the availability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Speech provider backed by the Play.ht job API
#[derive(Debug, Clone)]
pub struct PlayHtProvider {
    client: Client,
    api_key: String,
    user_id: String,
    base_url: String,
    poll_interval: Duration,
}

/// Job submission body
#[derive(Debug, Serialize)]
struct JobRequest<'a> {
    text: &'a str,
    voice: &'a str,
    speed: f32,
    output_format: &'a str,
}

/// Job creation / status payload
#[derive(Debug, Deserialize)]
struct JobStatus {
    id: String,
    status: String,
    #[serde(default)]
    output: Option<JobOutput>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobOutput {
    url: String,
}

impl PlayHtProvider {
    /// Create a new Play.ht provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        user_id: impl Into<String>,
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
            api_key: api_key.into(),
            user_id: user_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Point the provider at a different API host (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the poll spacing; the thirty-attempt ceiling is unchanged
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn jobs_url(&self) -> String {
        format!("{}/api/v2/tts", self.base_url)
    }

    fn job_url(&self, id: &str) -> String {
        format!("{}/api/v2/tts/{id}", self.base_url)
    }

    /// Submit a synthesis job and return its initial status
    async fn submit_job(
        &self,
        text: &str,
        voice: &str,
        speed: f32,
    ) -> Result<JobStatus, SpeechError> {
        let request = JobRequest {
            text,
            voice,
            speed,
            output_format: "wav",
        };

        let response = self
            .client
            .post(self.jobs_url())
            .bearer_auth(&self.api_key)
            .header("X-User-Id", &self.user_id)
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

        response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse job: {e}")))
    }

    /// Fetch the current status of a job
    async fn poll_job(&self, id: &str) -> Result<JobStatus, SpeechError> {
        let response = self
            .client
            .get(self.job_url(id))
            .bearer_auth(&self.api_key)
            .header("X-User-Id", &self.user_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse job status: {e}")))
    }

    /// Download the finished audio
    async fn download(&self, url: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::RequestFailed(format!(
                "Audio download failed with HTTP {status}"
            )));
        }

        let audio: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Job output contained no audio".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for PlayHtProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        let voice = voices::playht_voice(voice_id);

        let mut job = self.submit_job(text, voice, speed).await?;
        debug!(job_id = %job.id, "Synthesis job submitted");

        let mut attempts = 0;
        loop {
            match job.status.as_str() {
                "completed" => {
                    let output = job.output.ok_or_else(|| {
                        SpeechError::InvalidResponse(
                            "Completed job carried no output URL".to_string(),
                        )
                    })?;
                    debug!(job_id = %job.id, attempts, "Synthesis job completed");
                    return self.download(&output.url).await;
                },
                "failed" | "error" => {
                    return Err(SpeechError::JobFailed {
                        job_id: job.id,
                        reason: job
                            .error_message
                            .unwrap_or_else(|| "backend reported no reason".to_string()),
                    });
                },
                // "created", "pending", "generating", ...
                other => {
                    debug!(job_id = %job.id, status = other, attempts, "Job still in flight");
                },
            }

            if attempts >= MAX_POLL_ATTEMPTS {
                break;
            }

            tokio::time::sleep(self.poll_interval).await;
            job = self.poll_job(&job.id).await?;
            attempts += 1;
        }

        Err(SpeechError::JobFailed {
            reason: format!(
                "job did not complete after {MAX_POLL_ATTEMPTS} polls (last status: {})",
                job.status
            ),
            job_id: job.id,
        })
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.jobs_url())
            .bearer_auth(&self.api_key)
            .header("X-User-Id", &self.user_id)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => !response.status().is_server_error(),
            Err(e) => {
                warn!("Play.ht availability check failed: {}", e);
                false
            },
        }
    }

    fn name(&self) -> &'static str {
        "playht"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_provider() {
        let provider = PlayHtProvider::new("ph-key", "user-1", 30000);
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_name() {
        let provider = PlayHtProvider::new("ph-key", "user-1", 30000).unwrap();
        assert_eq!(provider.name(), "playht");
    }

    #[test]
    fn job_urls_are_built_from_base() {
        let provider = PlayHtProvider::new("ph-key", "user-1", 30000)
            .unwrap()
            .with_base_url("https://mock.test");
        assert_eq!(provider.jobs_url(), "https://mock.test/api/v2/tts");
        assert_eq!(provider.job_url("abc"), "https://mock.test/api/v2/tts/abc");
    }

    #[test]
    fn job_status_parses_without_optional_fields() {
        let json = r#"{"id":"job-1","status":"pending"}"#;
        let job: JobStatus = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "job-1");
        assert_eq!(job.status, "pending");
        assert!(job.output.is_none());
        assert!(job.error_message.is_none());
    }

    #[test]
    fn job_status_parses_output_url() {
        let json = r#"{"id":"job-1","status":"completed","output":{"url":"https://cdn.test/a.wav"}}"#;
        let job: JobStatus = serde_json::from_str(json).unwrap();
        assert_eq!(job.output.unwrap().url, "https://cdn.test/a.wav");
    }
}
