//! Sampling settings sent with every prompt.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Settings controlling text generation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
}

impl GenerationSettings {
    /// Fixed sampling used for every drafting call.
    pub fn post_defaults() -> Self {
        Self::builder()
            .temperature(0.8)
            .top_k(40)
            .top_p(0.95)
            .max_tokens(2048)
            .build()
    }
}
