//! Stateless query relay: one question plus the full drone dataset in, one
//! answer out, via the OpenAI chat-completions API.
//!
//! Public API: [`answer`]. It reads [`RelayConfig`] from the environment at
//! request time, builds the two-message prompt (system instruction with the
//! serialized dataset, then the user question), performs exactly one
//! outbound call, and returns the first choice's content — the empty string
//! when the service returns no content.

pub mod config;
pub mod error_handler;
pub mod prompt;
pub mod services;

pub use config::relay_config::RelayConfig;
pub use error_handler::{ConfigError, ProviderError, RelayError};
pub use services::open_ai_service::OpenAiService;

use drone_data::ImageRecord;

/// Answers one question about `records` with a freshly configured client.
///
/// Convenience wrapper over [`RelayConfig::from_env`] and
/// [`OpenAiService::answer`]; each call is an independent outbound request
/// with no shared state.
///
/// # Errors
/// Returns [`RelayError`] when configuration is incomplete or the upstream
/// call fails. No retry is attempted.
pub async fn answer(question: &str, records: &[ImageRecord]) -> Result<String, RelayError> {
    let cfg = RelayConfig::from_env()?;
    let svc = OpenAiService::new(cfg)?;
    svc.answer(question, records).await
}
