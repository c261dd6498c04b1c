//! Google Gemini API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::TransportError;
use crate::models::GoogleModel;
use crate::types::Usage;

use super::http::{build_client, status_to_error, DEFAULT_TIMEOUT};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    model: GoogleModel,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(model: GoogleModel, api_key: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(model, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        model: GoogleModel,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            model,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            client: build_client(timeout)?,
        })
    }

    /// Build a provider from resolved configuration.
    ///
    /// A missing API key is not an error here; the endpoint rejects the
    /// call and the run fails like any other transport failure.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, TransportError> {
        let provider = Self::with_timeout(
            config.model.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.request_timeout,
        )?;
        Ok(provider.with_base_url(config.base_url.clone()))
    }

    /// Point the provider at a different endpoint root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        )
    }

    fn build_request_body(&self, request: &ProviderRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "parts": [{"text": request.prompt}]
            }]
        });

        let mut gen_config = serde_json::Map::new();
        if let Some(temp) = request.settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(top_k) = request.settings.top_k {
            gen_config.insert("topK".into(), top_k.into());
        }
        if let Some(top_p) = request.settings.top_p {
            gen_config.insert("topP".into(), top_p.into());
        }
        if let Some(max) = request.settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if !gen_config.is_empty() {
            if let Some(obj) = body.as_object_mut() {
                obj.insert("generationConfig".into(), serde_json::Value::Object(gen_config));
            }
        }

        body
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, TransportError> {
        let body = self.build_request_body(request);

        debug!(
            model = self.model.as_str(),
            prompt_chars = request.prompt.len(),
            "Google generate_text"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await?;
        if !status.is_success() {
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let data: GeminiResponse = serde_json::from_str(&body_text)?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::api(status.as_u16(), "No candidates in Gemini response"))?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let usage = data
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(ProviderResponse { text, usage })
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenerationSettings;

    #[test]
    fn request_body_carries_prompt_and_sampling() {
        let provider = GoogleProvider::new(GoogleModel::default(), "k").unwrap();
        let request = ProviderRequest::new("Write a post", GenerationSettings::post_defaults());
        let body = provider.build_request_body(&request);

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Write a post");
        assert_eq!(body["generationConfig"]["temperature"], 0.8);
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn empty_settings_omit_generation_config() {
        let provider = GoogleProvider::new(GoogleModel::default(), "k").unwrap();
        let request = ProviderRequest::new("x", GenerationSettings::default());
        let body = provider.build_request_body(&request);
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = GoogleProvider::new(GoogleModel::Gemini25Flash, "k")
            .unwrap()
            .with_base_url("http://localhost:9000/v1beta/");
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
