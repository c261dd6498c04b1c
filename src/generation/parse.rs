//! Best-effort decoding of model replies.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{PostPlan, MAX_HASHTAGS};

/// Greedy: first `[` through last `]`, across newlines.
static JSON_ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[.*\]").expect("json array regex must compile")
});

/// Decode the plan list embedded in a planning reply.
///
/// Returns `None` when no bracketed array is present, when it does not
/// decode as plans, or when it decodes to an empty list.
pub fn extract_plans(text: &str) -> Option<Vec<PostPlan>> {
    let candidate = JSON_ARRAY_RE.find(text)?.as_str();
    let plans: Vec<PostPlan> = serde_json::from_str(candidate).ok()?;
    if plans.is_empty() {
        return None;
    }
    Some(plans)
}

/// The generic strategies used when the planning reply is unusable.
pub fn fallback_plans(topic: &str) -> Vec<PostPlan> {
    [
        ("Professional insight", "Industry insight"),
        ("Question-based", "Thought-provoking question"),
        ("Story-driven", "Personal experience"),
        ("Educational", "Key learning"),
    ]
    .into_iter()
    .map(|(approach, hook)| PostPlan::new(approach, vec![topic.to_string()], hook))
    .collect()
}

/// Split a comma-separated hashtag reply into bare tags.
pub fn parse_hashtags(text: &str) -> Vec<String> {
    text.split(',')
        .map(|tag| tag.trim().trim_start_matches('#').trim())
        .filter(|tag| !tag.is_empty())
        .take(MAX_HASHTAGS)
        .map(str::to_string)
        .collect()
}
