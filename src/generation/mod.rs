//! Post generation pipeline.

pub mod orchestrator;
pub mod parse;
pub mod progress;
pub mod prompts;

pub use orchestrator::{GeneratorSettings, PostGenerator};
pub use progress::{GenerationPhase, ProgressSink};
