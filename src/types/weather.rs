use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best geocoding match for a free-text place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Canonical place name as reported by the geocoder
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Daily temperature extremes for one location on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub date: NaiveDate,
    pub min_temperature: f64,
    pub max_temperature: f64,
    /// Unit string exactly as reported by the forecast provider, e.g. `°C`
    pub unit: String,
}

/// A successful weather lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: GeoLocation,
    pub forecast: ForecastSample,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forecast = &self.forecast;
        writeln!(f, "Weather for {} on {}:", self.location.name, forecast.date)?;
        writeln!(
            f,
            "Min: {:.1}{unit}, Max: {:.1}{unit}",
            forecast.min_temperature,
            forecast.max_temperature,
            unit = forecast.unit
        )
    }
}
