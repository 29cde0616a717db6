use crate::{error::FetchError, Result, ToolError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Capability to issue a GET request and read a JSON body.
///
/// Injected into the weather pipeline so tests can answer without a network.
#[async_trait]
pub trait JsonFetcher: Send + Sync + std::fmt::Debug {
    /// GET `url` with the given query parameters.
    ///
    /// Returns `Ok(None)` when the response has an empty body or a JSON `null`.
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Option<Value>, FetchError>;
}

/// [`JsonFetcher`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Build a client applying `timeout` to every request
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| ToolError::Config(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for ReqwestFetcher {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Option<Value>, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(&body)?;
        Ok((!value.is_null()).then_some(value))
    }
}
