use super::{dutch_date::parse_iso_date, Tool, ToolFuture};
use crate::{
    config::ToolConfig,
    error::WeatherError,
    schemas::{parameters_schema, parse_arguments},
    services::{JsonFetcher, OpenMeteoClient, ReqwestFetcher},
    types::WeatherReport,
    Result,
};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Parameters for `getWeather`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WeatherParams {
    /// City name, in any language the geocoder understands
    pub city: String,
    /// ISO date (YYYY-MM-DD) to forecast
    pub date: String,
}

/// Geocode a city, fetch its daily temperature range for one date and narrate it.
///
/// The public surface never fails: every problem becomes a sentence the
/// caller can hand straight back to the conversation.
#[derive(Debug, Clone)]
pub struct WeatherLookupPipeline {
    open_meteo: OpenMeteoClient,
}

impl WeatherLookupPipeline {
    /// Pipeline talking to Open-Meteo over HTTP
    pub fn new(config: &ToolConfig) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(config.http_timeout())?;
        Ok(Self::with_fetcher(Arc::new(fetcher), config))
    }

    /// Pipeline using a caller-supplied transport
    pub fn with_fetcher(fetcher: Arc<dyn JsonFetcher>, config: &ToolConfig) -> Self {
        Self {
            open_meteo: OpenMeteoClient::new(fetcher, config),
        }
    }

    /// Weather summary for `city` on `date`, or a description of what went wrong.
    pub async fn lookup(&self, city: &str, date: NaiveDate) -> String {
        info!(city, %date, "getting weather forecast");

        match self.try_lookup(city, date).await {
            Ok(report) => {
                info!(
                    location = %report.location.name,
                    %date,
                    min = report.forecast.min_temperature,
                    max = report.forecast.max_temperature,
                    unit = %report.forecast.unit,
                    "retrieved weather data"
                );
                report.to_string()
            }
            Err(err) => {
                warn!(city, %date, error = %err, "weather lookup failed");
                err.to_string()
            }
        }
    }

    /// Same as [`lookup`](Self::lookup), keeping the failure shape.
    pub async fn try_lookup(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> std::result::Result<WeatherReport, WeatherError> {
        let location = self
            .open_meteo
            .geocode(city)
            .await?
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        info!(
            city,
            location = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "found location"
        );

        let forecast = self.open_meteo.daily_temperatures(&location, date).await?;

        Ok(WeatherReport { location, forecast })
    }

    /// Like [`lookup`](Self::lookup) but takes the date as text, narrating a malformed one.
    pub async fn lookup_str(&self, city: &str, date: &str) -> String {
        match parse_iso_date(date) {
            Some(date) => self.lookup(city, date).await,
            None => {
                warn!(city, date, "weather lookup called with a malformed date");
                WeatherError::InvalidDate(date.to_string()).to_string()
            }
        }
    }
}

/// `getWeather` tool wrapping a [`WeatherLookupPipeline`]
#[derive(Debug, Clone)]
pub struct WeatherTool {
    pipeline: WeatherLookupPipeline,
}

impl WeatherTool {
    pub fn new(config: &ToolConfig) -> Result<Self> {
        Ok(Self::with_pipeline(WeatherLookupPipeline::new(config)?))
    }

    pub fn with_pipeline(pipeline: WeatherLookupPipeline) -> Self {
        Self { pipeline }
    }
}

impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "getWeather"
    }

    fn description(&self) -> &'static str {
        "Get the weather forecast (minimum and maximum temperature) for a city on a date.\n\
         IMPORTANT: the date must be an ISO date (YYYY-MM-DD). If the user gives a relative date \
         (e.g. 'zaterdag' or 'saturday', 'morgen' or 'tomorrow'), FIRST call parseDutchDateToIso \
         or getCurrentDateTime('Europe/Amsterdam') to determine it. NEVER invent a date yourself."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        parameters_schema::<WeatherParams>()
    }

    fn execute(&self, parameters: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: WeatherParams = parse_arguments(self.name(), parameters)?;
            Ok(self.pipeline.lookup_str(&params.city, &params.date).await)
        })
    }
}
