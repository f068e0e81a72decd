//! HTTP Session Client
//!
//! `SessionClient` backed by `reqwest`; works natively and in WASM.

use async_trait::async_trait;

use crate::checkout::{CheckoutRequest, CheckoutSession, SessionClient};
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// Posts checkout requests to the site's session endpoint
#[derive(Clone, Debug)]
pub struct HttpSessionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionClient {
    /// Create a client for an absolute endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client for the endpoint configured relative to `origin`
    pub fn from_config(config: &SiteConfig, origin: &str) -> Self {
        Self::new(config.checkout_endpoint(origin))
    }
}

#[async_trait(?Send)]
impl SessionClient for HttpSessionClient {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SiteError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let data: serde_json::Value = response.json().await.unwrap_or_default();
            let message = data["error"]
                .as_str()
                .or_else(|| status.canonical_reason())
                .unwrap_or("Request failed")
                .to_string();

            tracing::debug!(status = status.as_u16(), message = %message, "Session endpoint rejected request");
            return Err(SiteError::UpstreamRejected {
                status: status.as_u16(),
                message,
            });
        }

        let session: CheckoutSession = response
            .json()
            .await
            .map_err(|e| SiteError::InvalidResponse(e.to_string()))?;

        session.redirect_url()
    }
}
