//! Model provider trait and the Gemini transport.

pub mod google;
pub mod http;

pub use google::GoogleProvider;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{GenerationSettings, Usage};

/// A single prompt sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub prompt: String,
    pub settings: GenerationSettings,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>, settings: GenerationSettings) -> Self {
        Self {
            prompt: prompt.into(),
            settings,
        }
    }
}

/// Response from a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
}

/// Core trait implemented by text-completion backends.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Send one prompt and wait for the full reply.
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, TransportError>;
}
