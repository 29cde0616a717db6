pub mod http;
pub mod open_meteo;

pub use http::{JsonFetcher, ReqwestFetcher};
pub use open_meteo::OpenMeteoClient;
