//! The seam between the roast service and whatever produces text.
//!
//! Production wires in [`AnthropicClient`]; tests substitute scripted providers.

use async_trait::async_trait;
use roaster_anthropic::{AnthropicClient, ProviderError};

/// A text-completion backend.
#[async_trait]
pub trait RoastProvider: Send + Sync {
    /// Completes `prompt` and returns the first textual block of the answer, if any.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}

#[async_trait]
impl RoastProvider for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let res = AnthropicClient::complete(self, prompt).await?;
        Ok(res.first_text().map(str::to_owned))
    }
}
