//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that synthesis adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;

/// Port for Text-to-Speech synthesis backends
///
/// Implementations turn a line of text plus an abstract voice id into raw
/// audio bytes. Translation from the abstract voice id to the backend's
/// native speaker identifier is each adapter's responsibility.
///
/// # Example
///
/// ```ignore
/// use speech::SpeechSynthesizer;
///
/// async fn narrate_line(
///     tts: &dyn SpeechSynthesizer,
///     line: &str,
/// ) -> Result<Vec<u8>, SpeechError> {
///     tts.synthesize(line, "am_michael", 1.0).await
/// }
/// ```
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice_id` - Abstract voice id (unknown ids map to a default)
    /// * `speed` - Speaking speed multiplier, 1.0 being normal
    ///
    /// # Returns
    ///
    /// Raw audio bytes, typically a WAV payload.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails or times out.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SpeechError>;

    /// Check if the backend is reachable and ready
    async fn is_available(&self) -> bool;

    /// Short identifier for logs and the health endpoint
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation for testing
    struct MockSynthesizer {
        available: bool,
    }

    #[async_trait]
    impl SpeechSynthesizer for MockSynthesizer {
        async fn synthesize(
            &self,
            _text: &str,
            _voice_id: &str,
            _speed: f32,
        ) -> Result<Vec<u8>, SpeechError> {
            Ok(vec![0, 1, 2, 3])
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn mock_synthesizer_returns_bytes() {
        let tts = MockSynthesizer { available: true };

        let result = tts.synthesize("Hello", "am_michael", 1.0).await;

        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mock_synthesizer_availability() {
        let up = MockSynthesizer { available: true };
        let down = MockSynthesizer { available: false };

        assert!(up.is_available().await);
        assert!(!down.is_available().await);
    }

    #[test]
    fn mock_synthesizer_name() {
        let tts = MockSynthesizer { available: true };
        assert_eq!(tts.name(), "mock");
    }

    #[tokio::test]
    async fn port_is_object_safe() {
        let tts: Box<dyn SpeechSynthesizer> = Box::new(MockSynthesizer { available: true });
        let result = tts.synthesize("Hello", "af_bella", 1.25).await;
        assert!(result.is_ok());
    }
}
