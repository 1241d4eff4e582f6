// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fetch primitive behind the shim
//!
//! The original shim leans on an ambient, process-wide fetch capability. Here
//! that capability is an explicit collaborator: the [`Fetch`] trait, with
//! [`FetchClient`] as the reqwest-backed default. Tests and embedders can
//! substitute their own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use url::Url;

use crate::error::Result;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("fetchback/", env!("CARGO_PKG_VERSION"));

/// Asynchronous HTTP fetch capability
///
/// One method, mirroring the platform fetch primitive: issue a request,
/// resolve with the raw response once headers arrive. Only transport
/// failures error; completed exchanges of any status are `Ok`.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issue a request and resolve with the raw response
    async fn fetch(&self, method: Method, url: &str) -> Result<reqwest::Response>;
}

/// Fetch client configuration
#[derive(Debug, Clone)]
pub struct FetchClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: HeaderMap,
}

impl Default for FetchClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers,
        }
    }
}

/// Reqwest-backed fetch primitive
#[derive(Clone)]
pub struct FetchClient {
    client: Client,
    config: FetchClientConfig,
}

impl FetchClient {
    /// Create a new fetch client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(FetchClientConfig::default())
    }

    /// Create a new fetch client with custom configuration
    pub fn with_config(config: FetchClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(config.default_headers.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &FetchClientConfig {
        &self.config
    }
}

#[async_trait]
impl Fetch for FetchClient {
    async fn fetch(&self, method: Method, url: &str) -> Result<reqwest::Response> {
        let url = Url::parse(url)?;
        tracing::debug!(%method, %url, "dispatching fetch");

        let response = self.client.request(method, url).send().await?;
        tracing::debug!(status = response.status().as_u16(), "fetch resolved");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FetchClient::new().unwrap();
        assert_eq!(client.config().user_agent, DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_network() {
        let client = FetchClient::new().unwrap();
        let err = client.fetch(Method::GET, "not a url").await.unwrap_err();
        assert!(err.is_invalid_url());
    }
}
