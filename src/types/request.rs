//! The parameters a user submits for one generation run.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Default number of drafts per run.
pub const DEFAULT_POST_COUNT: usize = 4;

/// Writing tone for the drafts.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    ThoughtLeadership,
    Storytelling,
    Educational,
}

/// Who the drafts are written for.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Audience {
    #[default]
    General,
    Entrepreneurs,
    Developers,
    Executives,
    Marketers,
}

/// Target length of each draft.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PostLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl PostLength {
    /// Inclusive word range the model is asked to hit.
    pub fn word_range(&self) -> (u32, u32) {
        match self {
            Self::Short => (50, 100),
            Self::Medium => (100, 200),
            Self::Long => (200, 300),
        }
    }
}

/// One submitted generation request. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[builder(into)]
    pub topic: String,
    #[builder(default)]
    #[serde(default)]
    pub tone: Tone,
    #[builder(default)]
    #[serde(default)]
    pub audience: Audience,
    #[builder(default)]
    #[serde(default)]
    pub length: PostLength,
    #[builder(default = DEFAULT_POST_COUNT)]
    #[serde(default = "default_post_count")]
    pub post_count: usize,
}

fn default_post_count() -> usize {
    DEFAULT_POST_COUNT
}

impl GenerationRequest {
    /// Request for `topic` with every other field at its default.
    pub fn new(topic: impl Into<String>) -> Self {
        Self::builder().topic(topic).build()
    }

    /// Check the request before any call is made.
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic must not be empty".to_string());
        }
        if self.post_count == 0 {
            return Err("post count must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tone_parses_kebab_case() {
        assert_eq!(
            Tone::from_str("thought-leadership").unwrap(),
            Tone::ThoughtLeadership
        );
        assert_eq!(Tone::ThoughtLeadership.to_string(), "thought-leadership");
        assert!(Tone::from_str("sarcastic").is_err());
    }

    #[test]
    fn request_defaults_match_form_defaults() {
        let request = GenerationRequest::new("Remote work tips");
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.audience, Audience::General);
        assert_eq!(request.length, PostLength::Medium);
        assert_eq!(request.post_count, 4);
    }

    #[test]
    fn request_deserializes_with_missing_optionals() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"topic":"Hiring","tone":"casual","postCount":3}"#).unwrap();
        assert_eq!(request.tone, Tone::Casual);
        assert_eq!(request.audience, Audience::General);
        assert_eq!(request.post_count, 3);
    }

    #[test]
    fn validate_rejects_blank_topic_and_zero_count() {
        assert!(GenerationRequest::new("   ").validate().is_err());
        let zero = GenerationRequest::builder().topic("x").post_count(0).build();
        assert!(zero.validate().is_err());
        assert!(GenerationRequest::new("x").validate().is_ok());
    }
}
