pub mod validator;

pub use validator::{parse_arguments, Validator};

use schemars::JsonSchema;
use serde_json::Value;

/// JSON Schema describing a tool's parameter struct.
///
/// Only the root schema object is returned (no `$schema` / `definitions`
/// wrapper), which is the shape function-calling APIs expect.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema.schema).unwrap_or_else(|_| {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    /// Arguments of a probe tool
    #[derive(Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct ProbeParams {
        /// IANA zone name
        time_zone: String,
        note: Option<String>,
    }

    #[test]
    fn schema_uses_serde_field_names() {
        let schema = parameters_schema::<ProbeParams>();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].get("timeZone").is_some());
        assert_eq!(schema["properties"]["timeZone"]["description"], "IANA zone name");
        assert_eq!(schema["required"], serde_json::json!(["timeZone"]));
        assert!(schema.get("$schema").is_none());
    }
}
