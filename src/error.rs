use thiserror::Error;

/// Main error type for tool registration and invocation
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Unknown date format: {0}")]
    UnrecognizedDateExpression(String),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid function call: {0}")]
    InvalidFunctionCall(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::Config(_) => "CONFIG_ERROR",
            ToolError::Validation(_) => "VALIDATION_ERROR",
            ToolError::InvalidTimeZone(_) => "INVALID_TIME_ZONE",
            ToolError::UnrecognizedDateExpression(_) => "UNRECOGNIZED_DATE_EXPRESSION",
            ToolError::ToolExecution(_) => "TOOL_EXECUTION_ERROR",
            ToolError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            ToolError::InvalidFunctionCall(_) => "INVALID_FUNCTION_CALL",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}

/// Failure of a single outbound JSON request
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure shapes of a weather lookup.
///
/// The `Display` text of each variant is the narrated message handed back to
/// the caller, so the wording is part of the tool contract.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Failed to retrieve weather data")]
    EmptyForecast,

    #[error("Weather data format is invalid")]
    InvalidFormat,

    #[error("Temperature data not available for the specified date")]
    NoTemperatureData,

    #[error("Invalid date '{0}': expected an ISO date (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Error fetching weather data: {0}")]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_code_and_message() {
        let error = ToolError::UnrecognizedDateExpression("  gisteren ".to_string());
        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "UNRECOGNIZED_DATE_EXPRESSION");
        assert_eq!(payload["error"]["message"], "Unknown date format:   gisteren ");
    }

    #[test]
    fn weather_messages_are_distinct() {
        let messages = [
            WeatherError::EmptyForecast.to_string(),
            WeatherError::InvalidFormat.to_string(),
            WeatherError::NoTemperatureData.to_string(),
        ];
        assert_eq!(messages[0], "Failed to retrieve weather data");
        assert_eq!(messages[1], "Weather data format is invalid");
        assert_eq!(
            messages[2],
            "Temperature data not available for the specified date"
        );
    }

    #[test]
    fn decode_failures_do_not_claim_invalid_json() {
        let shape_error = serde_json::from_value::<f64>(serde_json::Value::Null).unwrap_err();
        let error = WeatherError::from(FetchError::from(shape_error));
        let message = error.to_string();
        assert!(message.starts_with("Error fetching weather data: unexpected response body: "));
        assert!(!message.contains("not valid JSON"));
    }

    #[test]
    fn city_not_found_names_the_input() {
        let error = WeatherError::CityNotFound("Nowhere12345xyz".to_string());
        assert_eq!(error.to_string(), "City not found: Nowhere12345xyz");
    }
}
