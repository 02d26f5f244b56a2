//! # Roaster Anthropic
//!
//! A small, non-streaming client for the Messages API.
//!
//! Only the pieces the roast service needs are modelled: a single user turn in, a list of content
//! blocks out. Anything the client does not understand in the response is tolerated and skipped.

#![warn(rust_2018_idioms)]

mod client;
mod messages;

pub use client::{AnthropicClient, ClientOptions, DEFAULT_BASE_URL};
pub use messages::{ContentBlock, Message, MessagesRequest, MessagesResponse, Role};
pub use reqwest::StatusCode;

/// Errors raised while talking to the Messages API.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to send request to provider: {0}")]
    Transport(reqwest::Error),
    #[error("provider returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode provider response: {0}")]
    Decode(reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Build(reqwest::Error),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
