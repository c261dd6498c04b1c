//! Plans, drafts and run statistics.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum hashtags kept per post.
pub const MAX_HASHTAGS: usize = 8;

/// Content strategy for one post, decoded from the plan response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPlan {
    pub approach: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hook: String,
}

/// `null` decodes as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PostPlan {
    pub fn new(approach: impl Into<String>, key_points: Vec<String>, hook: impl Into<String>) -> Self {
        Self {
            approach: approach.into(),
            key_points,
            hook: hook.into(),
        }
    }
}

/// A finished draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub id: String,
    pub content: String,
    /// Tags without the leading `#`.
    pub hashtags: Vec<String>,
    pub cta: String,
    pub approach: String,
    pub word_count: usize,
}

impl GeneratedPost {
    /// Assemble the draft at position `index` (zero-based).
    pub fn new(index: usize, content: String, hashtags: Vec<String>, cta: String, approach: String) -> Self {
        let word_count = word_count(&content);
        Self {
            id: format!("post-{}", index + 1),
            content,
            hashtags,
            cta,
            approach,
            word_count,
        }
    }
}

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Usage and timing for one orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub tokens_used: u64,
    /// Wall-clock seconds from the plan call to the last draft.
    pub generation_time: f64,
    /// Estimated USD cost.
    pub cost: f64,
}

impl GenerationStats {
    pub fn new(tokens_used: u64, generation_time: f64, cost_per_token: f64) -> Self {
        Self {
            tokens_used,
            generation_time,
            cost: tokens_used as f64 * cost_per_token,
        }
    }
}

/// Everything a successful run hands back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub posts: Vec<GeneratedPost>,
    pub stats: GenerationStats,
    /// The plan response could not be decoded and the generic plans were used.
    #[serde(default)]
    pub used_fallback_plan: bool,
}
