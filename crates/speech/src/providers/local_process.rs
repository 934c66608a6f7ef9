//! Local subprocess speech provider
//!
//! Runs the bundled synthesis script (`scripts/kokoro_tts.py`) and collects
//! the WAV payload it writes to stdout. The script's stderr carries model
//! loading progress and diagnostics; it is captured for logging only.
//!
//! The script is invoked as:
//!
//! ```bash
//! python3 scripts/kokoro_tts.py <text> <speaker> <speed>
//! ```
//!
//! Any non-zero exit code, spawn failure, or empty stdout is a synthesis
//! failure. The child is killed if it outlives the adapter timeout.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::voices;

/// Speech provider that shells out to a local synthesis script
#[derive(Debug, Clone)]
pub struct LocalProcessProvider {
    interpreter: PathBuf,
    script: PathBuf,
    timeout: Duration,
}

impl LocalProcessProvider {
    /// Create a new local subprocess provider
    pub fn new(
        interpreter: impl Into<PathBuf>,
        script: impl Into<PathBuf>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Run the script and collect its stdout
    async fn run_script(
        &self,
        text: &str,
        speaker: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        let mut cmd = Command::new(self.interpreter());

        cmd.arg(&self.script)
            .arg(text)
            .arg(speaker)
            .arg(speed.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Reaps the child if the timeout below drops the wait future
            .kill_on_drop(true);

        debug!("Running synthesis script: {:?}", cmd);

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotAvailable(format!(
                    "Interpreter not found at '{}'",
                    self.interpreter().display()
                ))
            } else {
                SpeechError::SynthesisFailed(format!("Failed to spawn synthesis script: {e}"))
            }
        })?;

        #[allow(clippy::cast_possible_truncation)]
        let timeout_ms = self.timeout.as_millis() as u64;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| {
                SpeechError::SynthesisFailed(format!("Failed to wait for synthesis script: {e}"))
            })?,
            Err(_) => {
                error!(timeout_ms, "Synthesis script timed out and was killed");
                return Err(SpeechError::Timeout(timeout_ms));
            },
        };

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            error!("Synthesis script failed: {}", stderr.trim());
            return Err(SpeechError::SynthesisFailed(format!(
                "Synthesis script exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if !stderr.trim().is_empty() {
            debug!("Synthesis script diagnostics: {}", stderr.trim());
        }

        if output.stdout.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Synthesis script produced no audio".to_string(),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl SpeechSynthesizer for LocalProcessProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        let speaker = voices::kokoro_speaker(voice_id);
        self.run_script(text, speaker, speed).await
    }

    async fn is_available(&self) -> bool {
        let interpreter_ok = Command::new(self.interpreter())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false);

        let script_ok = self.script.exists();

        debug!(
            "Local synthesis availability: interpreter={}, script={}",
            interpreter_ok, script_ok
        );

        interpreter_ok && script_ok
    }

    fn name(&self) -> &'static str {
        "local-process"
    }
}
