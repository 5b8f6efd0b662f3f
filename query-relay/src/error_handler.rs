//! Unified error handling for `query-relay`.
//!
//! One top-level [`RelayError`] for the whole crate, with domain-specific
//! enums nested under it. Small helpers for reading/validating environment
//! variables return the unified [`Result<T>`] alias.
//!
//! All messages carry the suffix `[Query Relay]` to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Top-level error for the `query-relay` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration/validation errors (per-request, since config is read
    /// from the environment at request time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream completion-service errors (protocol, decoding).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[Query Relay] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for environment-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Query Relay] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Query Relay] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_API_BASE`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/// Error returned by or about the completion service.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Upstream returned a non-successful HTTP status.
    #[error("[Query Relay] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[Query Relay] decode error: {0}")]
    Decode(String),
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] otherwise.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims a response body down to a log-friendly snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 300;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_string();
    }
    let mut end = MAX;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_validation_accepts_http_schemes() {
        assert!(validate_http_endpoint("OPENAI_API_BASE", "https://api.openai.com").is_ok());
        assert!(validate_http_endpoint("OPENAI_API_BASE", "http://localhost:8081").is_ok());
        assert!(validate_http_endpoint("OPENAI_API_BASE", "ftp://api.openai.com").is_err());
        assert!(validate_http_endpoint("OPENAI_API_BASE", "").is_err());
    }

    #[test]
    fn snippet_is_bounded() {
        let long = "x".repeat(2_000);
        assert!(make_snippet(&long).len() <= 310);
        assert_eq!(make_snippet("  short body  "), "short body");
    }
}
