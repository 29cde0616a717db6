pub mod weather;

pub use weather::{ForecastSample, GeoLocation, WeatherReport};
