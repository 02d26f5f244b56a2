//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read process-wide environment variables;
//! binaries call [`CoreConfig::from_env`] once, which feeds the raw values through the parsers
//! below.

use crate::constants::{DEFAULT_CONCURRENCY, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::{RoastError, RoastResult};
use roaster_anthropic::{ClientOptions, DEFAULT_BASE_URL};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone)]
pub struct CoreConfig {
    api_key: String,
    provider_base_url: String,
    model: String,
    max_tokens: u32,
    concurrency: usize,
    provider_timeout: Option<Duration>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `RoastError::Config` if:
    /// - the API key or model is blank,
    /// - `max_tokens` is zero, or
    /// - `concurrency` is zero.
    pub fn new(
        api_key: String,
        provider_base_url: Option<String>,
        model: Option<String>,
        max_tokens: u32,
        concurrency: usize,
        provider_timeout: Option<Duration>,
    ) -> RoastResult<Self> {
        if api_key.trim().is_empty() {
            return Err(RoastError::Config("ANTHROPIC_API_KEY cannot be empty".into()));
        }
        let model = non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if max_tokens == 0 {
            return Err(RoastError::Config("max_tokens must be greater than zero".into()));
        }
        if concurrency == 0 {
            return Err(RoastError::Config("concurrency must be greater than zero".into()));
        }

        Ok(Self {
            api_key,
            provider_base_url: non_blank(provider_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            max_tokens,
            concurrency,
            provider_timeout,
        })
    }

    pub fn provider_base_url(&self) -> &str {
        &self.provider_base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn provider_timeout(&self) -> Option<Duration> {
        self.provider_timeout
    }

    /// Resolves the configuration from process environment variables.
    ///
    /// Intended to be called once by binaries at startup, after `.env` has been loaded.
    pub fn from_env() -> RoastResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        Self::new(
            api_key,
            std::env::var("ANTHROPIC_BASE_URL").ok(),
            std::env::var("ROASTER_MODEL").ok(),
            max_tokens_from_env_value(std::env::var("ROASTER_MAX_TOKENS").ok())?,
            concurrency_from_env_value(std::env::var("ROASTER_CONCURRENCY").ok())?,
            provider_timeout_from_env_value(std::env::var("ROASTER_PROVIDER_TIMEOUT_SECS").ok())?,
        )
    }

    /// Options for building the provider client from this configuration.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            api_key: self.api_key.clone(),
            base_url: self.provider_base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            timeout: self.provider_timeout,
        }
    }
}

impl fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreConfig")
            .field("api_key", &"<redacted>")
            .field("provider_base_url", &self.provider_base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("concurrency", &self.concurrency)
            .field("provider_timeout", &self.provider_timeout)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive<T>(name: &str, value: Option<String>, default: T) -> RoastResult<T>
where
    T: FromStr + PartialEq + Default,
{
    let Some(raw) = non_blank(value) else {
        return Ok(default);
    };
    let parsed = raw.parse::<T>().map_err(|_| {
        RoastError::Config(format!("{name} must be a positive integer, got {raw:?}"))
    })?;
    if parsed == T::default() {
        return Err(RoastError::Config(format!("{name} must be greater than zero")));
    }
    Ok(parsed)
}

/// Parse `ROASTER_MAX_TOKENS`. Missing or blank falls back to the default.
pub fn max_tokens_from_env_value(value: Option<String>) -> RoastResult<u32> {
    parse_positive("ROASTER_MAX_TOKENS", value, DEFAULT_MAX_TOKENS)
}

/// Parse `ROASTER_CONCURRENCY`. Missing or blank means sequential processing.
pub fn concurrency_from_env_value(value: Option<String>) -> RoastResult<usize> {
    parse_positive("ROASTER_CONCURRENCY", value, DEFAULT_CONCURRENCY)
}

/// Parse `ROASTER_PROVIDER_TIMEOUT_SECS`. Missing or blank means no explicit timeout.
pub fn provider_timeout_from_env_value(value: Option<String>) -> RoastResult<Option<Duration>> {
    if non_blank(value.clone()).is_none() {
        return Ok(None);
    }
    let secs: u64 = parse_positive("ROASTER_PROVIDER_TIMEOUT_SECS", value, 0)?;
    Ok(Some(Duration::from_secs(secs)))
}
