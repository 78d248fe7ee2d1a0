//! The content briefing that drives one generation request.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Tone-of-voice suggestions offered alongside the free-text tone input.
pub const TONE_SUGGESTIONS: &[&str] = &[
    "Professionell",
    "Witzig",
    "Dringend",
    "Emotional",
    "Lehrend",
    "Sarkastisch",
    "Minimalistisch",
    "Begeisternd",
];

/// User-supplied input driving one generation request.
///
/// `target_audience` carries the chosen persona's description copied by
/// value at submission time; there is no live persona reference after
/// selection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BriefingData {
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
    /// Optional source URL for additional context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Tone-of-voice tags. At least one is required.
    #[validate(length(min = 1, message = "at least one tone is required"))]
    pub tone: Vec<String>,
    /// Audience description, copied from the selected persona.
    pub target_audience: String,
}

impl BriefingData {
    /// Validate the briefing, mapping validator output to a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("Invalid briefing: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn briefing() -> BriefingData {
        BriefingData {
            topic: "Launch".to_string(),
            url: None,
            tone: vec!["Witzig".to_string()],
            target_audience: "Gen Z".to_string(),
        }
    }

    #[test]
    fn valid_briefing_passes() {
        assert!(briefing().check().is_ok());
    }

    #[test]
    fn empty_topic_is_rejected() {
        let mut b = briefing();
        b.topic.clear();
        assert!(b.check().is_err());
    }

    #[test]
    fn empty_tone_list_is_rejected() {
        let mut b = briefing();
        b.tone.clear();
        assert!(b.check().is_err());
    }

    #[test]
    fn tone_suggestions_are_distinct() {
        let mut tones = TONE_SUGGESTIONS.to_vec();
        tones.sort_unstable();
        tones.dedup();
        assert_eq!(tones.len(), TONE_SUGGESTIONS.len());
    }
}
