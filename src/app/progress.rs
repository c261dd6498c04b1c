//! Step-completion flags derived from pipeline phases.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::generation::GenerationPhase;

/// One row of the loading view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentStep {
    pub step: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

/// Progress of the run currently loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    steps: Vec<AgentStep>,
    current: Option<GenerationPhase>,
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StepProgress {
    /// All steps pending.
    pub fn new() -> Self {
        Self {
            steps: GenerationPhase::iter()
                .map(|phase| AgentStep {
                    step: phase.step_id(),
                    description: phase.description(),
                    completed: false,
                })
                .collect(),
            current: None,
        }
    }

    /// Record a phase transition.
    ///
    /// Reaching a phase completes its step and every earlier one; steps
    /// never go back to pending.
    pub fn apply(&mut self, phase: GenerationPhase) {
        for (step, candidate) in self.steps.iter_mut().zip(GenerationPhase::iter()) {
            if candidate <= phase {
                step.completed = true;
            }
        }
        self.current = Some(self.current.map_or(phase, |current| current.max(phase)));
    }

    pub fn steps(&self) -> &[AgentStep] {
        &self.steps
    }

    /// Furthest phase seen so far.
    pub fn current(&self) -> Option<GenerationPhase> {
        self.current
    }

    pub fn is_complete(&self, step_id: &str) -> bool {
        self.steps
            .iter()
            .any(|step| step.step == step_id && step.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}
