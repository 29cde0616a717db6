use chat_tools::{
    tools::{GetCurrentDateTime, ParseDutchDateToIso},
    Tool, ToolCall, ToolConfig, ToolDispatcher, ToolError, Validator,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde_json::json;

fn dispatcher() -> ToolDispatcher {
    ToolDispatcher::with_default_tools(&ToolConfig::default()).unwrap()
}

fn amsterdam_today() -> NaiveDate {
    Utc::now()
        .with_timezone(&chrono_tz::Europe::Amsterdam)
        .date_naive()
}

#[test]
fn test_default_tools_are_registered() {
    let dispatcher = dispatcher();

    assert!(dispatcher.has_tool("getCurrentDateTime"));
    assert!(dispatcher.has_tool("parseDutchDateToIso"));
    assert!(dispatcher.has_tool("getWeather"));
    assert!(!dispatcher.has_tool("calculator"));

    assert_eq!(
        dispatcher.tool_names(),
        vec!["getCurrentDateTime", "getWeather", "parseDutchDateToIso"]
    );
}

#[test]
fn test_tool_definitions() {
    let definitions = dispatcher().tool_definitions();
    assert_eq!(definitions.len(), 3);

    let weather = definitions
        .iter()
        .find(|definition| definition["function"]["name"] == "getWeather")
        .unwrap();
    assert_eq!(weather["type"], "function");
    assert!(weather["function"]["description"]
        .as_str()
        .unwrap()
        .contains("YYYY-MM-DD"));
    assert_eq!(
        weather["function"]["parameters"]["required"],
        json!(["city", "date"])
    );

    let dates = definitions
        .iter()
        .find(|definition| definition["function"]["name"] == "parseDutchDateToIso")
        .unwrap();
    assert!(dates["function"]["parameters"]["properties"]
        .get("naturalLanguageDate")
        .is_some());
}

#[tokio::test]
async fn test_resolve_morgen_through_dispatcher() {
    let before = amsterdam_today();
    let output = dispatcher()
        .invoke_with_strings("parseDutchDateToIso", [("naturalLanguageDate", "  MORGEN  ")])
        .await
        .unwrap();
    let after = amsterdam_today();

    let resolved: NaiveDate = output.parse().unwrap();
    assert!(resolved == before.succ_opt().unwrap() || resolved == after.succ_opt().unwrap());
}

#[tokio::test]
async fn test_weekday_resolves_to_future_date() {
    let before = amsterdam_today();
    let output = dispatcher()
        .invoke_with_strings("parseDutchDateToIso", [("naturalLanguageDate", "vrijdag")])
        .await
        .unwrap();

    let resolved: NaiveDate = output.parse().unwrap();
    assert_eq!(resolved.weekday(), chrono::Weekday::Fri);
    assert!(resolved > before);
}

#[test]
fn test_unknown_date_fails_loudly() {
    let dispatcher = dispatcher();
    let result = tokio_test::block_on(
        dispatcher.invoke_with_strings("parseDutchDateToIso", [("naturalLanguageDate", "not-a-date")]),
    );

    match result {
        Err(ToolError::UnrecognizedDateExpression(input)) => assert_eq!(input, "not-a-date"),
        other => panic!("expected UnrecognizedDateExpression, got {:?}", other),
    }
}

#[tokio::test]
async fn test_current_date_time_invalid_zone() {
    let err = dispatcher()
        .invoke_with_strings("getCurrentDateTime", [("timeZone", "Europe/Nowhere")])
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidTimeZone(_)));
}

#[tokio::test]
async fn test_unknown_tool() {
    let err = dispatcher().invoke("calculator", json!({})).await.unwrap_err();
    assert_eq!(err.error_code(), "TOOL_NOT_FOUND");
}

#[tokio::test]
async fn test_strict_validation_runs_before_tool() {
    let dispatcher = dispatcher().with_validator(Validator::Strict);

    let err = dispatcher
        .invoke("getWeather", json!({"city": "Utrecht"}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("getWeather"));

    let err = dispatcher
        .invoke("parseDutchDateToIso", json!({"naturalLanguageDate": 7}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dispatch_turns_errors_into_outputs() {
    let dispatcher = dispatcher();

    let output = dispatcher
        .dispatch(ToolCall::new(
            "call_1",
            "parseDutchDateToIso",
            json!({"naturalLanguageDate": "gisteren"}),
        ))
        .await;
    assert!(output.is_error);
    assert_eq!(output.tool_call_id, "call_1");
    let payload: serde_json::Value = serde_json::from_str(&output.output).unwrap();
    assert_eq!(payload["error"]["code"], "UNRECOGNIZED_DATE_EXPRESSION");

    let output = dispatcher
        .dispatch(ToolCall::new(
            "call_2",
            "parseDutchDateToIso",
            json!({"naturalLanguageDate": "2024-06-01"}),
        ))
        .await;
    assert!(!output.is_error);
    assert_eq!(output.output, "2024-06-01");
    assert!(output.duration_ms.is_some());
}

#[tokio::test]
async fn test_dispatch_openai_tool_call() {
    let call = ToolCall::from_openai_format(&json!({
        "id": "call_abc",
        "type": "function",
        "function": {
            "name": "getCurrentDateTime",
            "arguments": "{\"timeZone\": \"Europe/Amsterdam\"}"
        }
    }))
    .unwrap();

    let output = dispatcher().dispatch(call).await;
    assert!(!output.is_error);
    assert_eq!(&output.output[10..11], "T");
}

#[test]
fn test_tool_schemas() {
    let schemas = [
        GetCurrentDateTime.parameters_schema(),
        ParseDutchDateToIso.parameters_schema(),
    ];

    for schema in schemas {
        assert!(schema.is_object());
        assert!(schema.get("properties").is_some());
    }
}

#[test]
fn test_error_handling() {
    let error = ToolError::ToolExecution("Test error".to_string());
    assert_eq!(error.error_code(), "TOOL_EXECUTION_ERROR");
    assert!(error.to_string().contains("Test error"));

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "TOOL_EXECUTION_ERROR");
}
