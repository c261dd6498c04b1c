//! Request collector: the editable form behind a generation run.

use std::str::FromStr;

use thiserror::Error;

use crate::types::{Audience, GenerationRequest, PostLength, Tone, DEFAULT_POST_COUNT};

/// Post counts the form offers.
pub const POST_COUNT_CHOICES: [usize; 3] = [3, 4, 5];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("post count must be one of 3, 4 or 5 (got {0})")]
    PostCountOutOfRange(usize),

    #[error("unknown {field}: {value}")]
    UnknownChoice { field: &'static str, value: String },
}

/// Current contents of the topic form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicForm {
    topic: String,
    tone: Tone,
    audience: Audience,
    length: PostLength,
    post_count: usize,
}

impl Default for TopicForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            tone: Tone::default(),
            audience: Audience::default(),
            length: PostLength::default(),
            post_count: DEFAULT_POST_COUNT,
        }
    }
}

impl TopicForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn set_audience(&mut self, audience: Audience) {
        self.audience = audience;
    }

    pub fn set_length(&mut self, length: PostLength) {
        self.length = length;
    }

    pub fn set_post_count(&mut self, count: usize) -> Result<(), FormError> {
        if !POST_COUNT_CHOICES.contains(&count) {
            return Err(FormError::PostCountOutOfRange(count));
        }
        self.post_count = count;
        Ok(())
    }

    /// Set a field from its textual form value (`"thought-leadership"`, `"5"`).
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let unknown = |field: &'static str| FormError::UnknownChoice {
            field,
            value: value.to_string(),
        };
        match field {
            "topic" => self.set_topic(value),
            "tone" => self.set_tone(Tone::from_str(value).map_err(|_| unknown("tone"))?),
            "audience" => {
                self.set_audience(Audience::from_str(value).map_err(|_| unknown("audience"))?)
            }
            "length" => self.set_length(PostLength::from_str(value).map_err(|_| unknown("length"))?),
            "postCount" | "post_count" => {
                let count = value.trim().parse().map_err(|_| unknown("post count"))?;
                self.set_post_count(count)?;
            }
            _ => return Err(unknown("field")),
        }
        Ok(())
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    /// Snapshot the form into a request; `None` while the topic is blank.
    pub fn submit(&self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        Some(
            GenerationRequest::builder()
                .topic(self.topic.clone())
                .tone(self.tone)
                .audience(self.audience)
                .length(self.length)
                .post_count(self.post_count)
                .build(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topic_disables_submission() {
        let mut form = TopicForm::new();
        assert!(form.submit().is_none());
        form.set_topic("   \n\t");
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn submission_snapshots_current_fields() {
        let mut form = TopicForm::new();
        form.set_topic("Remote work tips");
        form.set_tone(Tone::Casual);
        form.set_post_count(3).unwrap();

        let request = form.submit().unwrap();
        assert_eq!(request.topic, "Remote work tips");
        assert_eq!(request.tone, Tone::Casual);
        assert_eq!(request.audience, Audience::General);
        assert_eq!(request.length, PostLength::Medium);
        assert_eq!(request.post_count, 3);

        form.set_topic("Something else");
        assert_eq!(request.topic, "Remote work tips");
    }

    #[test]
    fn post_count_outside_choices_is_rejected() {
        let mut form = TopicForm::new();
        assert_eq!(form.set_post_count(6), Err(FormError::PostCountOutOfRange(6)));
        form.set_topic("x");
        assert_eq!(form.submit().unwrap().post_count, 4);
    }

    #[test]
    fn set_field_parses_form_values() {
        let mut form = TopicForm::new();
        form.set_field("topic", "Hiring").unwrap();
        form.set_field("tone", "thought-leadership").unwrap();
        form.set_field("audience", "executives").unwrap();
        form.set_field("length", "long").unwrap();
        form.set_field("postCount", "5").unwrap();

        let request = form.submit().unwrap();
        assert_eq!(request.tone, Tone::ThoughtLeadership);
        assert_eq!(request.audience, Audience::Executives);
        assert_eq!(request.length, PostLength::Long);
        assert_eq!(request.post_count, 5);

        assert!(matches!(
            form.set_field("tone", "snarky"),
            Err(FormError::UnknownChoice { field: "tone", .. })
        ));
    }
}
