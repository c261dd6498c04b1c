//! Error types for postcraft.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Message shown to the user whenever an orchestration run fails.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate posts. Please try again.";

/// Failure talking to the generative-language endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TransportError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::InvalidArgument(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
        }
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::RateLimit | ErrorCategory::Server | ErrorCategory::Network => {
                RecoverySuggestion::TryAgainLater
            }
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            _ => RecoverySuggestion::StartOver,
        }
    }
}

/// The single error an orchestration run can end with.
///
/// Whatever went wrong underneath, the user only ever sees
/// [`GENERATION_FAILED_MESSAGE`]; the cause stays reachable through
/// [`std::error::Error::source`] for logging.
#[derive(Error, Debug)]
#[error("{}", GENERATION_FAILED_MESSAGE)]
pub struct GenerationError {
    #[source]
    source: TransportError,
}

impl GenerationError {
    /// The request never reached the endpoint because it failed validation.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            source: TransportError::InvalidArgument(reason.into()),
        }
    }

    /// The underlying transport failure.
    pub fn cause(&self) -> &TransportError {
        &self.source
    }
}

impl From<TransportError> for GenerationError {
    fn from(source: TransportError) -> Self {
        Self { source }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TransportError>;
