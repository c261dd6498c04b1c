//! HTTP client construction and status mapping.

use std::time::Duration;

use crate::error::TransportError;

/// Default request timeout for provider calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the reqwest client a provider owns for its lifetime.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, TransportError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(TransportError::Network)
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> TransportError {
    match status {
        401 | 403 => TransportError::Authentication(error_message(body)),
        429 => TransportError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => TransportError::api(status, error_message(body)),
    }
}

/// Prefer the `error.message` field of a Google-style error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Google reports RetryInfo as e.g. {"retryDelay": "17s"} inside error.details
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let details = value.get("error")?.get("details")?.as_array()?;
    details.iter().find_map(|detail| {
        let delay = detail.get("retryDelay")?.as_str()?;
        let secs: f64 = delay.strip_suffix('s')?.parse().ok()?;
        Some((secs * 1000.0) as u64)
    })
}
