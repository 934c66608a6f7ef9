//! Spoken-duration estimation
//!
//! The player UI shows an estimated clip length before the audio loads.
//! The estimate assumes a 150 words-per-minute narration pace.

/// Assumed narration pace
const WORDS_PER_MINUTE: f64 = 150.0;

/// Estimate how many seconds a line takes to speak
///
/// Rounds up so a one-word line still shows a nonzero duration.
#[must_use]
pub fn estimate_duration_secs(text: &str) -> u64 {
    let word_count = text.split_whitespace().count();
    let words_per_second = WORDS_PER_MINUTE / 60.0;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    let secs = (word_count as f64 / words_per_second).ceil() as u64;
    secs
}

/// Format a duration in seconds as `m:ss`
#[must_use]
pub fn format_duration(secs: u64) -> String {
    let mins = secs / 60;
    let rest = secs % 60;
    format!("{mins}:{rest:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_estimates_zero() {
        assert_eq!(estimate_duration_secs(""), 0);
        assert_eq!(estimate_duration_secs("   "), 0);
    }

    #[test]
    fn single_word_rounds_up_to_one_second() {
        assert_eq!(estimate_duration_secs("Hail"), 1);
    }

    #[test]
    fn five_words_take_two_seconds() {
        // 5 words at 2.5 words/sec = 2s exactly
        assert_eq!(estimate_duration_secs("the party enters the crypt"), 2);
    }

    #[test]
    fn pace_is_150_words_per_minute() {
        let minute_of_text = vec!["word"; 150].join(" ");
        assert_eq!(estimate_duration_secs(&minute_of_text), 60);
    }

    #[test]
    fn whitespace_runs_count_as_single_breaks() {
        assert_eq!(
            estimate_duration_secs("slow   down\n\ttraveller"),
            estimate_duration_secs("slow down traveller")
        );
    }

    #[test]
    fn format_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(7), "0:07");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }
}
