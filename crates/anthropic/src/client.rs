use crate::messages::{Message, MessagesRequest, MessagesResponse};
use crate::{ProviderError, ProviderResult};
use std::time::Duration;

/// Public endpoint used when no base URL override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

const API_VERSION: &str = "2023-06-01";

/// Settings resolved once at startup and used to build an [`AnthropicClient`].
#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Per-request timeout. `None` keeps the HTTP library default.
    pub timeout: Option<Duration>,
}

/// Non-streaming Messages API client.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(options: ClientOptions) -> ProviderResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ProviderError::Build)?;

        Ok(Self {
            http,
            api_key: options.api_key,
            endpoint: format!("{}/v1/messages", options.base_url.trim_end_matches('/')),
            model: options.model,
            max_tokens: options.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Sends `prompt` as a single user turn and returns the decoded response.
    ///
    /// # Errors
    /// Returns `ProviderError` if:
    /// - the request cannot be sent,
    /// - the provider answers with a non-success status, or
    /// - the body is not a valid Messages API response.
    pub async fn complete(&self, prompt: &str) -> ProviderResult<MessagesResponse> {
        let body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user(prompt)],
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = resp.status();
        tracing::debug!("provider responded with {}", status);

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        resp.json::<MessagesResponse>()
            .await
            .map_err(ProviderError::Decode)
    }
}
