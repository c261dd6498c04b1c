//! Pipeline phases reported while a run is in flight.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Discrete phase transitions of one orchestration run, in pipeline order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationPhase {
    Analyzing,
    Generating,
    Hashtags,
    CallToAction,
    Finalizing,
}

impl GenerationPhase {
    /// Stable identifier of the progress step this phase drives.
    pub fn step_id(&self) -> &'static str {
        match self {
            Self::Analyzing => "analyze",
            Self::Generating => "generate",
            Self::Hashtags => "hashtags",
            Self::CallToAction => "cta",
            Self::Finalizing => "quality",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Analyzing => "Analyzing topic and planning post strategies",
            Self::Generating => "Generating LinkedIn post variations",
            Self::Hashtags => "Extracting relevant hashtags",
            Self::CallToAction => "Creating compelling calls-to-action",
            Self::Finalizing => "Applying quality filters and finalizing",
        }
    }
}

/// Callback invoked on every phase transition.
pub type ProgressSink = dyn Fn(GenerationPhase) + Send + Sync;
