//! The plan → draft → hashtags → CTA pipeline.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::config::{GeneratorConfig, DEFAULT_COST_PER_TOKEN};
use crate::error::{GenerationError, TransportError};
use crate::provider::{GoogleProvider, ModelProvider, ProviderRequest, ProviderResponse};
use crate::types::*;

use super::parse::{extract_plans, fallback_plans, parse_hashtags};
use super::progress::{GenerationPhase, ProgressSink};
use super::prompts;

/// Knobs the generator applies to every run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub sampling: GenerationSettings,
    pub cost_per_token: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sampling: GenerationSettings::post_defaults(),
            cost_per_token: DEFAULT_COST_PER_TOKEN,
        }
    }
}

/// Drives one orchestration run per [`PostGenerator::generate`] call.
///
/// Holds no per-run state, so one instance can serve any number of runs.
#[derive(Clone)]
pub struct PostGenerator {
    provider: Arc<dyn ModelProvider>,
    settings: GeneratorSettings,
}

impl PostGenerator {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self::with_settings(provider, GeneratorSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn ModelProvider>, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    /// Build a generator backed by Gemini from resolved configuration.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, TransportError> {
        let provider = GoogleProvider::from_config(config)?;
        Ok(Self::with_settings(
            Arc::new(provider),
            GeneratorSettings {
                sampling: GenerationSettings::post_defaults(),
                cost_per_token: config.cost_per_token,
            },
        ))
    }

    /// Run the full pipeline for `request`.
    ///
    /// All-or-nothing: the first failed call aborts the run and no posts
    /// are returned.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        progress: Option<&ProgressSink>,
    ) -> Result<GenerationOutput, GenerationError> {
        if let Err(reason) = request.validate() {
            warn!(%reason, "Rejected generation request");
            return Err(GenerationError::invalid_request(reason));
        }

        info!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            post_count = request.post_count,
            tone = %request.tone,
            "Starting post generation"
        );

        match self.run(request, progress).await {
            Ok(output) => {
                info!(
                    posts = output.posts.len(),
                    tokens = output.stats.tokens_used,
                    seconds = output.stats.generation_time,
                    fallback = output.used_fallback_plan,
                    "Post generation finished"
                );
                Ok(output)
            }
            Err(e) => {
                error!(error = %e, category = %e.category(), "Post generation failed");
                Err(GenerationError::from(e))
            }
        }
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        progress: Option<&ProgressSink>,
    ) -> Result<GenerationOutput, TransportError> {
        let notify = |phase: GenerationPhase| {
            if let Some(sink) = progress {
                sink(phase);
            }
        };

        let started = Instant::now();
        let mut total_usage = Usage::default();

        notify(GenerationPhase::Analyzing);
        let planning = self
            .call(prompts::planning_prompt(request), GenerationPhase::Analyzing)
            .await?;
        total_usage.merge(&planning.usage);

        let (plans, used_fallback_plan) = match extract_plans(&planning.text) {
            Some(plans) => (plans, false),
            None => {
                warn!("Plan response could not be decoded; using fallback plans");
                (fallback_plans(&request.topic), true)
            }
        };

        notify(GenerationPhase::Generating);
        let count = plans.len().min(request.post_count);
        let mut posts = Vec::with_capacity(count);

        for (index, plan) in plans.into_iter().take(count).enumerate() {
            debug!(index, approach = %plan.approach, "Drafting post");

            let content = self
                .call(prompts::post_prompt(request, &plan), GenerationPhase::Generating)
                .await?;
            total_usage.merge(&content.usage);

            notify(GenerationPhase::Hashtags);
            let hashtags = self
                .call(prompts::hashtag_prompt(request), GenerationPhase::Hashtags)
                .await?;
            total_usage.merge(&hashtags.usage);

            notify(GenerationPhase::CallToAction);
            let cta = self
                .call(prompts::cta_prompt(request), GenerationPhase::CallToAction)
                .await?;
            total_usage.merge(&cta.usage);

            posts.push(GeneratedPost::new(
                index,
                content.text.trim().to_string(),
                parse_hashtags(&hashtags.text),
                cta.text.trim().to_string(),
                plan.approach,
            ));
        }

        notify(GenerationPhase::Finalizing);
        let stats = GenerationStats::new(
            u64::from(total_usage.total_tokens),
            started.elapsed().as_secs_f64(),
            self.settings.cost_per_token,
        );

        Ok(GenerationOutput {
            posts,
            stats,
            used_fallback_plan,
        })
    }

    async fn call(
        &self,
        prompt: String,
        phase: GenerationPhase,
    ) -> Result<ProviderResponse, TransportError> {
        debug!(phase = %phase, "generate: calling provider");
        let request = ProviderRequest::new(prompt, self.settings.sampling.clone());
        let response = self.provider.generate_text(&request).await?;
        debug!(
            phase = %phase,
            tokens = response.usage.total_tokens,
            "generate: provider responded"
        );
        Ok(response)
    }
}
