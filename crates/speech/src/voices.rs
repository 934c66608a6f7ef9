//! Voice catalog for tabletop characters
//!
//! Maps abstract voice ids to each backend's native speaker identifier.
//! Unknown voices resolve to the narrator default instead of erroring, so a
//! stale character sheet never blocks a session.

use serde::Serialize;

/// Default abstract voice: the session narrator
pub const DEFAULT_VOICE: &str = "am_michael";

/// Voice gender classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Male voice
    Male,
    /// Female voice
    Female,
    /// Neutral/androgynous voice
    Neutral,
}

/// Rough age of the speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeRange {
    /// Young adult
    Young,
    /// Adult
    Adult,
    /// Elderly
    Old,
}

/// A preset voice a character can be assigned
#[derive(Debug, Clone, Serialize)]
pub struct VoicePreset {
    /// Abstract voice id referenced by speech requests
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// What kind of character this voice suits
    pub description: &'static str,
    /// Voice gender
    pub gender: VoiceGender,
    /// Rough speaker age
    pub age_range: AgeRange,
}

/// The full static voice catalog
const PRESETS: &[VoicePreset] = &[
    VoicePreset {
        id: "af_bella",
        name: "Deep Warrior",
        description: "Low, commanding voice for fighters and paladins",
        gender: VoiceGender::Male,
        age_range: AgeRange::Adult,
    },
    VoicePreset {
        id: "af_nicole",
        name: "Elder Wizard",
        description: "Measured, weathered voice for experienced spellcasters",
        gender: VoiceGender::Male,
        age_range: AgeRange::Old,
    },
    VoicePreset {
        id: "af_sarah",
        name: "Sly Rogue",
        description: "Raspy, quick voice for rogues and assassins",
        gender: VoiceGender::Male,
        age_range: AgeRange::Adult,
    },
    VoicePreset {
        id: "am_adam",
        name: "Charming Bard",
        description: "Melodic, persuasive voice for performers",
        gender: VoiceGender::Male,
        age_range: AgeRange::Young,
    },
    VoicePreset {
        id: "af_sky",
        name: "Gentle Cleric",
        description: "Soft, reassuring voice for healers",
        gender: VoiceGender::Female,
        age_range: AgeRange::Adult,
    },
    VoicePreset {
        id: "bf_emma",
        name: "Steady Ranger",
        description: "Firm, confident voice for scouts and hunters",
        gender: VoiceGender::Female,
        age_range: AgeRange::Adult,
    },
    VoicePreset {
        id: "bf_isabella",
        name: "Mystic Sorceress",
        description: "Ethereal voice for enchanters and seers",
        gender: VoiceGender::Female,
        age_range: AgeRange::Adult,
    },
    VoicePreset {
        id: "am_michael",
        name: "Narrator",
        description: "Clear, neutral voice for scene narration",
        gender: VoiceGender::Neutral,
        age_range: AgeRange::Adult,
    },
];

/// All preset voices, narrator included
#[must_use]
pub fn all_voices() -> &'static [VoicePreset] {
    PRESETS
}

/// Look up a preset by its abstract voice id
#[must_use]
pub fn find_voice(id: &str) -> Option<&'static VoicePreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// Presets matching a gender, for the character-creation picker
#[must_use]
pub fn voices_by_gender(gender: VoiceGender) -> Vec<&'static VoicePreset> {
    PRESETS
        .iter()
        .filter(|preset| preset.gender == gender)
        .collect()
}

/// Resolve an abstract voice id to a Kokoro speaker id
///
/// Kokoro speaker names are the abstract ids themselves; anything outside
/// the catalog falls back to the narrator.
#[must_use]
pub fn kokoro_speaker(voice_id: &str) -> &str {
    if find_voice(voice_id).is_some() {
        voice_id
    } else {
        DEFAULT_VOICE
    }
}

/// Resolve an abstract voice id to an ElevenLabs voice id
#[must_use]
pub fn elevenlabs_voice(voice_id: &str) -> &'static str {
    match voice_id {
        "af_bella" => "pNInz6obpgDQGcFmaJgB",
        "af_nicole" => "VR6AewLTigWG4xSOukaG",
        "af_sarah" => "yoZ06aMxZJJ28mfd3POQ",
        "am_adam" => "TxGEqnHWrfWFTfGW9XjX",
        "af_sky" => "EXAVITQu4vr4xnSDxMaL",
        "bf_emma" => "ThT5KcBeYPX3keUQqHPh",
        "bf_isabella" => "XB0fDUnXU5powFXDhCwa",
        // Narrator and anything unknown
        _ => "21m00Tcm4TlvDq8ikWAM",
    }
}

/// Resolve an abstract voice id to a Play.ht voice name
#[must_use]
pub fn playht_voice(voice_id: &str) -> &'static str {
    match voice_id {
        "af_bella" => "larry",
        "af_nicole" => "arthur",
        "af_sarah" => "hook",
        "am_adam" => "miles",
        "af_sky" => "jennifer",
        "bf_emma" => "ruby",
        "bf_isabella" => "aurora",
        _ => "matt",
    }
}
