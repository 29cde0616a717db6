use crate::{Result, ToolError};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validation strategies for tool arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validator {
    /// Leave validation to serde when the tool deserializes its arguments
    #[default]
    SerdeFirst,
    /// Check arguments against the tool's JSON Schema before it runs
    Strict,
}

impl Validator {
    /// Check `arguments` for `tool_name` against `schema`.
    pub fn check(&self, tool_name: &str, schema: &Value, arguments: &Value) -> Result<()> {
        match self {
            Validator::SerdeFirst => Ok(()),
            Validator::Strict => strict_validate(tool_name, schema, arguments),
        }
    }
}

/// Deserialize tool arguments, reporting the failing path on error.
pub fn parse_arguments<T: DeserializeOwned>(tool_name: &str, arguments: Value) -> Result<T> {
    serde_path_to_error::deserialize(arguments).map_err(|e| {
        ToolError::Validation(format!(
            "Invalid arguments for {} at {}: {}",
            tool_name,
            e.path(),
            e.inner()
        ))
    })
}

fn strict_validate(tool_name: &str, schema: &Value, arguments: &Value) -> Result<()> {
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            ToolError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                tool_name, err
            ))
        })?;

    if let Err(errors) = compiled.validate(arguments) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = details.join("; ");
        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(ToolError::Validation(format!(
            "Arguments do not match `{}` schema: {}",
            tool_name, detail_str
        )));
    }

    Ok(())
}
