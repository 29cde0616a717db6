use crate::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

/// A request from the orchestrator to run one tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier echoed back in the matching [`ToolOutput`]
    pub id: String,
    /// Name of the tool to execute
    pub name: String,
    /// Arguments to pass to the tool
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Parse a tool call from the OpenAI response format.
    ///
    /// The `arguments` field there is a JSON document encoded as a string.
    pub fn from_openai_format(tool_call: &Value) -> Result<Self, ToolError> {
        let invalid = |what: &str| ToolError::InvalidFunctionCall(format!("tool call missing {}", what));

        let id = tool_call
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("id"))?;
        let function = tool_call.get("function").ok_or_else(|| invalid("function"))?;
        let name = function
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| invalid("function name"))?;

        let arguments_str = function
            .get("arguments")
            .and_then(Value::as_str)
            .unwrap_or("{}");
        let arguments: Value = serde_json::from_str(arguments_str).map_err(|err| {
            ToolError::InvalidFunctionCall(format!(
                "Failed to parse arguments for tool '{}': {}",
                name, err
            ))
        })?;

        Ok(Self::new(id, name, arguments))
    }

    /// Get a human-readable description
    pub fn describe(&self) -> String {
        format!("{}({})", self.name, self.arguments)
    }
}

/// The string result of one tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The tool call ID this output corresponds to
    pub tool_call_id: String,
    /// The tool name that was executed
    pub tool_name: String,
    /// Tool result, or the JSON error payload when `is_error` is set
    pub output: String,
    pub is_error: bool,
    /// Execution duration in milliseconds
    pub duration_ms: Option<u128>,
}

impl ToolOutput {
    /// Create a successful tool output
    pub fn success(tool_call_id: String, tool_name: String, output: String) -> Self {
        Self {
            tool_call_id,
            tool_name,
            output,
            is_error: false,
            duration_ms: None,
        }
    }

    /// Create an error tool output carrying the error payload
    pub fn error(tool_call_id: String, tool_name: String, error: &ToolError) -> Self {
        Self {
            tool_call_id,
            tool_name,
            output: error.to_error_payload().to_string(),
            is_error: true,
            duration_ms: None,
        }
    }

    /// Set the execution duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = Some(duration.as_millis());
        self
    }

    /// Convert to OpenAI tool message format
    pub fn to_openai_message(&self) -> Value {
        serde_json::json!({
            "role": "tool",
            "tool_call_id": self.tool_call_id,
            "content": self.output
        })
    }
}

/// Tracks the execution of a tool call with timing information
#[derive(Debug)]
pub struct ToolExecution {
    pub tool_call: ToolCall,
    start_time: Instant,
}

impl ToolExecution {
    /// Start tracking a tool execution
    pub fn start(tool_call: ToolCall) -> Self {
        Self {
            tool_call,
            start_time: Instant::now(),
        }
    }

    /// Complete the execution with the tool's result
    pub fn complete(self, result: Result<String, ToolError>) -> ToolOutput {
        let duration = self.start_time.elapsed();
        let ToolCall { id, name, .. } = self.tool_call;

        let output = match result {
            Ok(output) => ToolOutput::success(id, name, output),
            Err(err) => ToolOutput::error(id, name, &err),
        };
        output.with_duration(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_from_openai() {
        let openai_format = serde_json::json!({
            "id": "call_456",
            "type": "function",
            "function": {
                "name": "getWeather",
                "arguments": "{\"city\": \"Utrecht\", \"date\": \"2024-06-01\"}"
            }
        });

        let call = ToolCall::from_openai_format(&openai_format).unwrap();
        assert_eq!(call.id, "call_456");
        assert_eq!(call.name, "getWeather");
        assert_eq!(call.arguments["city"], "Utrecht");
    }

    #[test]
    fn test_tool_call_with_bad_arguments() {
        let openai_format = serde_json::json!({
            "id": "call_1",
            "function": { "name": "getWeather", "arguments": "{city:" }
        });

        let err = ToolCall::from_openai_format(&openai_format).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
    }

    #[test]
    fn test_tool_call_without_function_name() {
        let openai_format = serde_json::json!({
            "id": "call_2",
            "function": { "arguments": "{}" }
        });

        assert!(ToolCall::from_openai_format(&openai_format).is_err());
    }

    #[test]
    fn test_tool_output_error() {
        let output = ToolOutput::error(
            "call_999".to_string(),
            "getCurrentDateTime".to_string(),
            &ToolError::InvalidTimeZone("Mars/Base".to_string()),
        );
        assert!(output.is_error);
        let payload: Value = serde_json::from_str(&output.output).unwrap();
        assert_eq!(payload["error"]["code"], "INVALID_TIME_ZONE");
    }

    #[test]
    fn test_tool_execution_timing() {
        let call = ToolCall::new("call_123", "parseDutchDateToIso", Value::Null);
        let execution = ToolExecution::start(call);
        let output = execution.complete(Ok("2024-06-01".to_string()));
        assert!(output.duration_ms.is_some());
        assert!(!output.is_error);
        assert_eq!(output.to_openai_message()["content"], "2024-06-01");
    }
}
