//! Narration request type and validation

use crate::error::ApplicationError;

/// Longest line a single request may carry, in characters
pub const MAX_TEXT_CHARS: usize = 500;

/// A single line of session text to narrate
///
/// Constructed per call and never mutated. `character_id` is carried for
/// the (external) message log; it does not influence synthesis.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// The line to speak
    pub text: String,
    /// Session the line belongs to
    pub session_id: String,
    /// Speaking character, absent for narration
    pub character_id: Option<String>,
    /// Abstract voice id from the catalog
    pub voice_id: String,
    /// Speaking speed multiplier
    pub speed: f32,
}

impl SpeechRequest {
    /// Check the request against the boundary rules
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.text.is_empty() {
            return Err(ApplicationError::Validation(
                "text must not be empty".to_string(),
            ));
        }

        let chars = self.text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(ApplicationError::Validation(format!(
                "text too long: {chars} characters exceeds the {MAX_TEXT_CHARS} limit"
            )));
        }

        if self.session_id.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "sessionId is required".to_string(),
            ));
        }

        if self.voice_id.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "voiceId is required".to_string(),
            ));
        }

        if self.speed <= 0.0 || !self.speed.is_finite() {
            return Err(ApplicationError::Validation(format!(
                "speed must be a positive number, got {}",
                self.speed
            )));
        }

        Ok(())
    }
}
