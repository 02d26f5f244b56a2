//! HTTP client for a running roaster server.

use api_shared::{HealthRes, RoastReq, RoastRes};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to roaster server failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("roaster server returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

pub struct RoastClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoastClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends the whole list in one request and returns the roasts in the same order.
    pub async fn roast(&self, todos: Vec<String>) -> Result<Vec<String>, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/roast", self.base_url))
            .json(&RoastReq { todos })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(resp.json::<RoastRes>().await?.roasts)
    }

    pub async fn health(&self) -> Result<HealthRes, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(resp.json::<HealthRes>().await?)
    }
}
