//! Google Gemini model definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Google Gemini models.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString)]
pub enum GoogleModel {
    #[default]
    #[strum(serialize = "gemini-1.5-flash-latest")]
    Gemini15FlashLatest,
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    #[strum(serialize = "gemini-2.5-pro")]
    Gemini25Pro,
    /// Custom/unknown Google model.
    #[strum(default)]
    Custom(String),
}

impl GoogleModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini15FlashLatest => "gemini-1.5-flash-latest",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for GoogleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
