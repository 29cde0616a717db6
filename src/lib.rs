//! chat-tools: date and weather tools for LLM tool calling
//!
//! Three tools are provided, each invoked by name with string arguments and
//! answering with a single string:
//!
//! - `getCurrentDateTime`: the wall-clock time in an IANA time zone
//! - `parseDutchDateToIso`: Dutch day expressions (`morgen`, `zaterdag`,
//!   `volgende week maandag`, ...) to ISO dates
//! - `getWeather`: geocode a city and narrate its min/max temperature for a date
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chat_tools::{ToolConfig, ToolDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = ToolDispatcher::with_default_tools(&ToolConfig::default())?;
//!
//!     let date = dispatcher
//!         .invoke_with_strings("parseDutchDateToIso", [("naturalLanguageDate", "zaterdag")])
//!         .await?;
//!     let weather = dispatcher
//!         .invoke_with_strings("getWeather", [("city", "Utrecht"), ("date", date.as_str())])
//!         .await?;
//!     println!("{}", weather);
//!     Ok(())
//! }
//! ```

extern crate self as chat_tools;

pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub mod services;
pub mod tools;
pub mod types;

pub use chat_tools_macros::tool;
pub use config::ToolConfig;
pub use core::{ToolCall, ToolDispatcher, ToolExecution, ToolOutput};
pub use error::{FetchError, Result, ToolError, WeatherError};
pub use schemas::Validator;
pub use tools::{DutchDateResolver, Tool, ToolRegistry, WeatherLookupPipeline};
pub use types::{ForecastSample, GeoLocation, WeatherReport};

#[cfg(feature = "cli")]
pub mod cli;
