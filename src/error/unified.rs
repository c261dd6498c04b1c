//! Error classification and recovery hints.

use strum::Display;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CheckCredentials,
    CheckConfiguration,
    IncreaseTimeout,
    TryAgainLater,
    StartOver,
}

impl RecoverySuggestion {
    /// Short hint printed under a failed run.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::CheckCredentials => "Check that GEMINI_API_KEY is set to a valid key.",
            Self::CheckConfiguration => "Check the request parameters and postcraft configuration.",
            Self::IncreaseTimeout => "Raise POSTCRAFT_TIMEOUT_SECS and try again.",
            Self::TryAgainLater => "The service is busy or unreachable; try again shortly.",
            Self::StartOver => "Start a new generation.",
        }
    }
}
