//! Speech generation handlers

use application::SpeechRequest;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use speech::voices::{self, VoicePreset};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Speech request body
///
/// Every field is defaulted so missing values reach validation and come
/// back as a 400 envelope rather than a bare deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequestBody {
    /// Line to narrate
    #[serde(default)]
    pub text: String,
    /// Session the line belongs to
    #[serde(default)]
    pub session_id: String,
    /// Speaking character, absent for narration
    #[serde(default)]
    pub character_id: Option<String>,
    /// Abstract voice id
    #[serde(default)]
    pub voice_id: String,
    /// Speaking speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f32,
}

const fn default_speed() -> f32 {
    1.0
}

/// Speech response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponseBody {
    /// Always true for success responses
    pub success: bool,
    /// Where the audio can be fetched (`/audio/{hash}.wav`)
    pub audio_url: String,
    /// Identifier for the session message log
    pub message_id: String,
    /// Whether the audio came from the cache
    pub cached: bool,
    /// Estimated spoken length in seconds
    pub duration_secs: u64,
}

/// Handle a speech generation request
#[instrument(skip(state, body), fields(text_len = body.text.len(), voice = %body.voice_id))]
pub async fn generate_speech(
    State(state): State<AppState>,
    Json(body): Json<SpeechRequestBody>,
) -> Result<Json<SpeechResponseBody>, ApiError> {
    let request = SpeechRequest {
        text: body.text,
        session_id: body.session_id,
        character_id: body.character_id,
        voice_id: body.voice_id,
        speed: body.speed,
    };

    let outcome = state.narration.narrate(&request).await?;

    Ok(Json(SpeechResponseBody {
        success: true,
        audio_url: outcome.audio_url,
        message_id: outcome.message_id,
        cached: outcome.cached,
        duration_secs: outcome.duration_secs,
    }))
}

/// List the static voice catalog
pub async fn list_voices() -> Json<&'static [VoicePreset]> {
    Json(voices::all_voices())
}
