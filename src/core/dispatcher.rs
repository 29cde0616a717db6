use super::tool_call::{ToolCall, ToolExecution, ToolOutput};
use crate::{
    config::ToolConfig,
    schemas::Validator,
    tools::{GetCurrentDateTime, ParseDutchDateToIso, Tool, ToolRegistry, WeatherTool},
    Result, ToolError,
};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Looks tools up by name and runs them
#[derive(Debug, Default)]
pub struct ToolDispatcher {
    registry: ToolRegistry,
    validator: Validator,
}

impl ToolDispatcher {
    /// Create a dispatcher with no tools
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with `getCurrentDateTime`, `parseDutchDateToIso` and `getWeather`
    pub fn with_default_tools(config: &ToolConfig) -> Result<Self> {
        let mut dispatcher = Self::new();
        dispatcher.register_tool(GetCurrentDateTime);
        dispatcher.register_tool(ParseDutchDateToIso);
        dispatcher.register_tool(WeatherTool::new(config)?);
        Ok(dispatcher)
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Register a tool with the dispatcher
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Run the named tool with JSON arguments
    pub async fn invoke(&self, tool_name: &str, arguments: Value) -> Result<String> {
        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| ToolError::ToolNotFound(tool_name.to_string()))?;

        self.validator
            .check(tool_name, &tool.parameters_schema(), &arguments)?;

        debug!(tool = tool_name, %arguments, "invoking tool");
        tool.execute(arguments).await
    }

    /// Run the named tool with string arguments given as name/value pairs
    pub async fn invoke_with_strings<I, K, V>(&self, tool_name: &str, arguments: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let arguments: Map<String, Value> = arguments
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();

        self.invoke(tool_name, Value::Object(arguments)).await
    }

    /// Run a tool call, turning every failure into an error output
    pub async fn dispatch(&self, call: ToolCall) -> ToolOutput {
        info!(call = %call.describe(), id = %call.id, "dispatching tool call");

        let execution = ToolExecution::start(call);
        let result = self
            .invoke(&execution.tool_call.name, execution.tool_call.arguments.clone())
            .await;

        let output = execution.complete(result);
        info!(
            tool = %output.tool_name,
            is_error = output.is_error,
            duration_ms = ?output.duration_ms,
            "tool call finished"
        );
        output
    }

    /// Definitions of all tools in the OpenAI function-calling format
    pub fn tool_definitions(&self) -> Vec<Value> {
        self.registry.to_openai_tools()
    }

    /// Names of all registered tools
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.list().iter().map(|tool| tool.name()).collect()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}
