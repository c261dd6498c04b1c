//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use postcraft::error::TransportError;
use postcraft::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use postcraft::types::Usage;

/// A mock provider that replays scripted replies in order.
pub struct MockProvider {
    model_id: String,
    responses: Mutex<VecDeque<Result<ProviderResponse, TransportError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a text reply that reports `tokens` total tokens.
    pub fn queue_response(&self, text: &str, tokens: u32) {
        self.responses.lock().unwrap().push_back(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: tokens / 2,
                output_tokens: tokens - tokens / 2,
                total_tokens: tokens,
            },
        }));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Queue content, hashtag and CTA replies for `count` posts.
    pub fn queue_posts(&self, count: usize, tokens_per_call: u32) {
        for i in 1..=count {
            self.queue_response(
                &format!("  Draft number {i} about remote work.\n\nStay focused.  "),
                tokens_per_call,
            );
            self.queue_response(
                "#RemoteWork, WorkFromHome, #Productivity, Focus",
                tokens_per_call,
            );
            self.queue_response(
                &format!(" Share your best tip #{i} in the comments! "),
                tokens_per_call,
            );
        }
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// A JSON plan array with `count` distinct approaches.
pub fn plan_json(count: usize) -> String {
    let entries: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "approach": format!("Approach {i}"),
                "keyPoints": [format!("point {i}a"), format!("point {i}b")],
                "hook": format!("Hook {i}"),
            })
        })
        .collect();
    format!(
        "Here is the plan:\n```json\n{}\n```",
        serde_json::to_string_pretty(&entries).unwrap()
    )
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ProviderResponse {
                    text: "Mock response".to_string(),
                    usage: Usage::default(),
                })
            })
    }
}
