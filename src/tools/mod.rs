//! Tool abstractions and the built-in date and weather tools

pub mod date_time;
pub mod dutch_date;
pub mod tool;
pub mod weather;

pub use date_time::{current_date_time, today_in, GetCurrentDateTime};
pub use dutch_date::{DutchDateResolver, ParseDutchDateToIso};
pub use tool::{Tool, ToolFuture, ToolRegistry};
pub use weather::{WeatherLookupPipeline, WeatherTool};
