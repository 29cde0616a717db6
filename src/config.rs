//! Settings for the built-in tools.
//!
//! The library never reads the environment itself; the CLI layer maps
//! environment variables and flags onto [`ToolConfig`].

use std::time::Duration;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by the built-in tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    http_timeout: Option<Duration>,
    geocoding_url: String,
    forecast_url: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            http_timeout: Some(DEFAULT_HTTP_TIMEOUT),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl ToolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-request timeout for outbound HTTP calls; `None` waits indefinitely
    pub fn with_http_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_geocoding_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_url = url.into();
        self
    }

    pub fn with_forecast_url(mut self, url: impl Into<String>) -> Self {
        self.forecast_url = url.into();
        self
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout
    }

    pub fn geocoding_url(&self) -> &str {
        &self.geocoding_url
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }
}
