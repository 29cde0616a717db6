//! Open-Meteo geocoding and daily forecast lookups.

use crate::{
    config::ToolConfig,
    error::{FetchError, WeatherError},
    services::http::JsonFetcher,
    types::{ForecastSample, GeoLocation},
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

const MAX_SERIES: &str = "temperature_2m_max";
const MIN_SERIES: &str = "temperature_2m_min";

type WeatherResult<T> = std::result::Result<T, WeatherError>;

/// Two-endpoint Open-Meteo client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    fetcher: Arc<dyn JsonFetcher>,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: &ToolConfig) -> Self {
        Self {
            fetcher,
            geocoding_url: config.geocoding_url().to_string(),
            forecast_url: config.forecast_url().to_string(),
        }
    }

    /// Best match for `city`, or `None` when the geocoder knows no such place
    pub async fn geocode(&self, city: &str) -> WeatherResult<Option<GeoLocation>> {
        let query = [("name", city.to_string()), ("count", "1".to_string())];
        debug!(url = %self.geocoding_url, city, "calling geocoding API");

        let Some(body) = self.fetcher.get_json(&self.geocoding_url, &query).await? else {
            return Ok(None);
        };

        let response: schema::GeocodingResponse =
            serde_json::from_value(body).map_err(FetchError::from)?;

        Ok(response.results.unwrap_or_default().into_iter().next())
    }

    /// Daily temperature extremes at `location` on `date`, in the location's own time zone
    pub async fn daily_temperatures(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> WeatherResult<ForecastSample> {
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("daily", format!("{},{}", MAX_SERIES, MIN_SERIES)),
            ("timezone", "auto".to_string()),
            ("start_date", date.to_string()),
            ("end_date", date.to_string()),
        ];
        debug!(
            url = %self.forecast_url,
            latitude = location.latitude,
            longitude = location.longitude,
            %date,
            "calling forecast API"
        );

        let body = self
            .fetcher
            .get_json(&self.forecast_url, &query)
            .await?
            .ok_or(WeatherError::EmptyForecast)?;

        let response: schema::ForecastResponse =
            serde_json::from_value(body).map_err(|_| WeatherError::InvalidFormat)?;

        let (Some(daily), Some(units)) = (response.daily, response.daily_units) else {
            return Err(WeatherError::InvalidFormat);
        };

        let max_temperature = first_value(daily.temperature_2m_max)?;
        let min_temperature = first_value(daily.temperature_2m_min)?;

        let unit = units
            .get(MAX_SERIES)
            .or_else(|| units.get(MIN_SERIES))
            .cloned()
            .ok_or(WeatherError::InvalidFormat)?;

        Ok(ForecastSample {
            date,
            min_temperature,
            max_temperature,
            unit,
        })
    }
}

fn first_value(series: Option<Vec<Option<f64>>>) -> WeatherResult<f64> {
    series
        .and_then(|values| values.into_iter().next().flatten())
        .ok_or(WeatherError::NoTemperatureData)
}

/// Response shapes of the Open-Meteo APIs, limited to the fields we read
mod schema {
    use crate::types::GeoLocation;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeoLocation>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailySeries>,
        pub daily_units: Option<HashMap<String, String>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailySeries {
        #[serde(default)]
        pub temperature_2m_max: Option<Vec<Option<f64>>>,
        #[serde(default)]
        pub temperature_2m_min: Option<Vec<Option<f64>>>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_takes_the_single_requested_day() {
        assert_eq!(first_value(Some(vec![Some(18.4)])).unwrap(), 18.4);
    }

    #[test]
    fn missing_or_null_series_means_no_data() {
        for series in [None, Some(vec![]), Some(vec![None])] {
            assert!(matches!(
                first_value(series),
                Err(WeatherError::NoTemperatureData)
            ));
        }
    }
}
