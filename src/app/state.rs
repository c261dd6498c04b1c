//! form → loading → results | error.

use crate::error::GenerationError;
use crate::generation::GenerationPhase;
use crate::types::GenerationOutput;

use super::progress::StepProgress;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    #[default]
    Form,
    Loading {
        progress: StepProgress,
    },
    Results {
        output: GenerationOutput,
    },
    Error {
        message: String,
    },
}

impl AppState {
    /// A request was submitted. Only valid from the form.
    pub fn start(&mut self) -> bool {
        if !matches!(self, Self::Form) {
            return false;
        }
        *self = Self::Loading {
            progress: StepProgress::new(),
        };
        true
    }

    /// Phase notifications outside of loading are dropped.
    pub fn on_phase(&mut self, phase: GenerationPhase) {
        if let Self::Loading { progress } = self {
            progress.apply(phase);
        }
    }

    /// The outstanding run finished.
    pub fn complete(&mut self, result: Result<GenerationOutput, GenerationError>) {
        if !matches!(self, Self::Loading { .. }) {
            return;
        }
        *self = match result {
            Ok(output) => Self::Results { output },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        };
    }

    /// Discard the drafts and return to an empty run.
    pub fn generate_new(&mut self) {
        if matches!(self, Self::Results { .. }) {
            *self = Self::Form;
        }
    }

    /// Leave the error view. There is no resume; the run starts over.
    pub fn retry(&mut self) {
        if matches!(self, Self::Error { .. }) {
            *self = Self::Form;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
