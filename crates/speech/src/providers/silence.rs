//! Silent-audio fallback provider
//!
//! Emits a fixed-length silent WAV when no real backend is configured. The
//! rest of the pipeline (caching, URLs, playback) behaves exactly as it
//! would with real audio, so a session without credentials still works.

use async_trait::async_trait;
use tracing::debug;

use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;

/// Length of the placeholder clip in seconds
const SILENCE_DURATION_SECS: u32 = 2;

/// Mono, 16-bit PCM
const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Fallback provider producing silent WAV payloads
#[derive(Debug, Clone)]
pub struct SilenceProvider {
    sample_rate: u32,
}

impl SilenceProvider {
    /// Create a silence provider emitting WAVs at the given sample rate
    #[must_use]
    pub const fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Build the silent WAV payload: 44-byte PCM header plus zeroed samples
    fn silent_wav(&self) -> Vec<u8> {
        let bytes_per_sample = u32::from(BITS_PER_SAMPLE / 8);
        let sample_count = self.sample_rate * SILENCE_DURATION_SECS;
        let data_len = sample_count * bytes_per_sample * u32::from(CHANNELS);
        let byte_rate = self.sample_rate * bytes_per_sample * u32::from(CHANNELS);
        let block_align = BITS_PER_SAMPLE / 8 * CHANNELS;

        let mut wav = Vec::with_capacity(44 + data_len as usize);

        // RIFF chunk
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        // fmt subchunk (PCM)
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&CHANNELS.to_le_bytes());
        wav.extend_from_slice(&self.sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        // data subchunk
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(44 + data_len as usize, 0);

        wav
    }
}

#[async_trait]
impl SpeechSynthesizer for SilenceProvider {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        _speed: f32,
    ) -> Result<Vec<u8>, SpeechError> {
        debug!(
            text_len = text.len(),
            voice = voice_id,
            "Emitting silent placeholder audio"
        );
        Ok(self.silent_wav())
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "silence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(wav: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(wav[offset..offset + 4].try_into().unwrap())
    }

    fn u16_at(wav: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(wav[offset..offset + 2].try_into().unwrap())
    }

    #[tokio::test]
    async fn emits_riff_wave_header() {
        let provider = SilenceProvider::new(24000);
        let wav = provider.synthesize("anything", "af_sky", 1.0).await.unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
    }

    #[tokio::test]
    async fn header_fields_match_requested_sample_rate() {
        let sample_rate = 22050;
        let provider = SilenceProvider::new(sample_rate);
        let wav = provider.synthesize("anything", "af_sky", 1.0).await.unwrap();

        assert_eq!(u16_at(&wav, 20), 1, "PCM format tag");
        assert_eq!(u16_at(&wav, 22), 1, "mono");
        assert_eq!(u32_at(&wav, 24), sample_rate);
        assert_eq!(u32_at(&wav, 28), sample_rate * 2, "byte rate");
        assert_eq!(u16_at(&wav, 32), 2, "block align");
        assert_eq!(u16_at(&wav, 34), 16, "bits per sample");
    }

    #[tokio::test]
    async fn payload_holds_two_seconds_of_silence() {
        let sample_rate = 24000;
        let provider = SilenceProvider::new(sample_rate);
        let wav = provider.synthesize("anything", "af_sky", 1.0).await.unwrap();

        let expected_data_len = sample_rate * 2 * 2; // 2s of 16-bit mono
        assert_eq!(u32_at(&wav, 40), expected_data_len);
        assert_eq!(u32_at(&wav, 4), 36 + expected_data_len);
        assert_eq!(wav.len(), 44 + expected_data_len as usize);
        assert!(wav[44..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn always_available() {
        let provider = SilenceProvider::new(24000);
        assert!(provider.is_available().await);
        assert_eq!(provider.name(), "silence");
    }
}
