//! OpenAI chat-completions client for the query relay.
//!
//! Minimal, non-streaming client around the REST API. The only endpoint
//! used is `POST {endpoint}/v1/chat/completions`.
//!
//! Constructor validation:
//! - `cfg.api_key` must be non-empty
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via the unified types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use drone_data::ImageRecord;

use crate::{
    config::relay_config::RelayConfig,
    error_handler::{ConfigError, ProviderError, RelayError, make_snippet, validate_http_endpoint},
    prompt::{PromptMessage, build_messages},
};

/// Thin client for the completion service.
///
/// Constructed per request from a [`RelayConfig`]; keeps a preconfigured
/// `reqwest::Client` with timeout and default headers. Exactly one outbound
/// call per [`OpenAiService::answer`] invocation, no retry, no caching.
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: RelayConfig,
    url_chat: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`RelayError::Config`] if the API key is empty or the endpoint is invalid
    /// - [`RelayError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: RelayConfig) -> Result<Self, RelayError> {
        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("OPENAI_API_KEY").into());
        }
        let endpoint = cfg.endpoint.trim();
        validate_http_endpoint("OPENAI_API_BASE", endpoint)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|e| {
                ProviderError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let url_chat = format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'));

        debug!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Answers one question about the given record collection.
    ///
    /// Performs a single **non-streaming** chat completion with the fixed
    /// model/temperature/max_tokens from config and the two-message prompt
    /// built by [`build_messages`]. An upstream answer with no content is
    /// success with the empty string; it is not an error.
    ///
    /// # Errors
    /// - [`RelayError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`RelayError::HttpTransport`] for client/network failures
    /// - [`RelayError::Provider`] with `Decode` if the JSON cannot be parsed
    ///   or `choices` is empty
    pub async fn answer(
        &self,
        question: &str,
        records: &[ImageRecord],
    ) -> Result<String, RelayError> {
        let started = Instant::now();
        let messages = build_messages(question, records);
        let body = ChatCompletionRequest {
            model: &self.cfg.model,
            messages,
            temperature: self.cfg.temperature,
            max_tokens: self.cfg.max_tokens,
        };

        debug!(
            model = %self.cfg.model,
            question_len = question.len(),
            records = records.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(ProviderError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(ProviderError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                ))
                .into());
            }
        };

        let content = first_choice_content(out)?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            answer_len = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/// Extracts the first choice's content.
///
/// A present choice whose `content` is `null`/absent maps to `Ok("")`; a
/// response without any choice at all is a decode failure.
fn first_choice_content(out: ChatCompletionResponse) -> Result<String, RelayError> {
    let first = out
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Decode("empty `choices` in completion response".into()))?;
    Ok(first.message.content.unwrap_or_default())
}

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<PromptMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RelayConfig {
        RelayConfig {
            model: "gpt-4o-mini".into(),
            endpoint: "https://api.openai.com".into(),
            api_key: "sk-test".into(),
            max_tokens: 100,
            temperature: 0.5,
            timeout_secs: 60,
        }
    }

    #[test]
    fn rejects_empty_api_key() {
        let mut c = cfg();
        c.api_key = "  ".into();
        assert!(matches!(
            OpenAiService::new(c),
            Err(RelayError::Config(ConfigError::MissingVar("OPENAI_API_KEY")))
        ));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut c = cfg();
        c.endpoint = "api.openai.com".into();
        assert!(matches!(OpenAiService::new(c), Err(RelayError::Config(_))));
    }

    #[test]
    fn chat_url_strips_trailing_slash() {
        let mut c = cfg();
        c.endpoint = "http://localhost:8081/".into();
        let svc = OpenAiService::new(c).unwrap();
        assert_eq!(svc.url_chat, "http://localhost:8081/v1/chat/completions");
    }

    #[test]
    fn present_content_is_returned_as_is() {
        let out: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"img-02 is highest."}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_content(out).unwrap(), "img-02 is highest.");
    }

    #[test]
    fn null_content_is_success_with_empty_string() {
        let out: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_content(out).unwrap(), "");
    }

    #[test]
    fn missing_choices_is_a_decode_error() {
        let out: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_choice_content(out),
            Err(RelayError::Provider(ProviderError::Decode(_)))
        ));
    }

    // Reserves a local port, then frees it so connecting gets refused.
    fn refused_addr() -> std::net::SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_with_transport_error() {
        let mut c = cfg();
        c.endpoint = format!("http://{}", refused_addr());
        c.timeout_secs = 5;

        let svc = OpenAiService::new(c).unwrap();
        let err = svc.answer("which image is highest?", &[]).await.unwrap_err();
        assert!(matches!(err, RelayError::HttpTransport(_)));
    }

    #[tokio::test]
    async fn upstream_error_status_surfaces_as_provider_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // One-shot upstream that answers every request with a quota error.
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;

            let body = r#"{"error":{"message":"insufficient_quota"}}"#;
            let resp = format!(
                "HTTP/1.1 429 Too Many Requests\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(resp.as_bytes()).await;
        });

        let mut c = cfg();
        c.endpoint = format!("http://{addr}");
        c.timeout_secs = 5;

        let svc = OpenAiService::new(c).unwrap();
        let err = svc.answer("which image is highest?", &[]).await.unwrap_err();
        match err {
            RelayError::Provider(ProviderError::HttpStatus {
                status, snippet, ..
            }) => {
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
                assert!(snippet.contains("insufficient_quota"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn request_body_carries_fixed_sampling_parameters() {
        let body = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: build_messages("q", &[]),
            temperature: 0.5,
            max_tokens: 100,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
