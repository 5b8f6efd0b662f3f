//! Relay configuration, read strictly from environment variables.
//!
//! The sampling parameters are fixed constants tuned for short, mostly
//! deterministic answers; only the credentials and the endpoint come from
//! the environment.
//!
//! # Environment variables
//! - `OPENAI_API_KEY`  = API key (mandatory)
//! - `OPENAI_API_BASE` = alternative endpoint, e.g. a local proxy (optional)

use crate::error_handler::{RelayError, must_env, validate_http_endpoint};

/// Model used for every completion.
pub const MODEL: &str = "gpt-4o-mini";

/// Low temperature, favoring deterministic answers about tabular data.
pub const TEMPERATURE: f32 = 0.5;

/// Small output bound; answers are expected to be one short paragraph.
pub const MAX_TOKENS: u32 = 100;

/// Per-request timeout for the upstream call.
pub const TIMEOUT_SECS: u64 = 60;

const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Configuration for one relay invocation.
///
/// Loaded per request, not cached at startup, so a key added to the
/// environment after boot is picked up without a restart.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Model identifier sent with every request.
    pub model: String,

    /// API base, without the `/v1/...` path.
    pub endpoint: String,

    /// Bearer token for the completion service.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Builds the config from the environment.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`](crate::error_handler::ConfigError::MissingVar)
    ///   if `OPENAI_API_KEY` is absent or empty
    /// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
    ///   if `OPENAI_API_BASE` is set but not an http(s) URL
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key = must_env("OPENAI_API_KEY")?;

        let endpoint = std::env::var("OPENAI_API_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        validate_http_endpoint("OPENAI_API_BASE", &endpoint)?;

        Ok(Self {
            model: MODEL.to_string(),
            endpoint,
            api_key,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            timeout_secs: TIMEOUT_SECS,
        })
    }
}
