//! Convenience re-exports for common use.

pub use crate::app::{AppState, StepProgress, TopicForm};
pub use crate::config::GeneratorConfig;
pub use crate::error::{GenerationError, Result, TransportError};
pub use crate::generation::{GenerationPhase, GeneratorSettings, PostGenerator, ProgressSink};
pub use crate::models::GoogleModel;
pub use crate::provider::{GoogleProvider, ModelProvider, ProviderRequest, ProviderResponse};
pub use crate::types::{
    Audience, GeneratedPost, GenerationOutput, GenerationRequest, GenerationSettings,
    GenerationStats, PostLength, PostPlan, Tone, Usage,
};
