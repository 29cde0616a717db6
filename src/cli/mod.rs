use crate::{ToolConfig, ToolDispatcher, Validator};
use anyhow::{anyhow, bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::{Map, Value};
use std::{env, time::Duration};
use tracing::{error, info};

const TIMEOUT_ENV: &str = "CHAT_TOOLS_HTTP_TIMEOUT_SECS";
const GEOCODING_URL_ENV: &str = "OPEN_METEO_GEOCODING_URL";
const FORECAST_URL_ENV: &str = "OPEN_METEO_FORECAST_URL";

/// CLI entry point for the chat-tools binary
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    // Logs go to stderr so stdout carries only tool output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();

    let config = tool_config(&matches)?;
    let validator = if matches.get_flag("strict") {
        Validator::Strict
    } else {
        Validator::SerdeFirst
    };
    let dispatcher = ToolDispatcher::with_default_tools(&config)?.with_validator(validator);

    match matches.subcommand() {
        Some(("list", _)) => {
            let definitions = dispatcher.tool_definitions();
            println!("{}", serde_json::to_string_pretty(&definitions)?);
            Ok(())
        }
        Some(("call", call_matches)) => call_tool(&dispatcher, call_matches).await,
        _ => Err(anyhow!("a subcommand is required, see --help")),
    }
}

fn command() -> Command {
    Command::new("chat-tools")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Invoke the date and weather tools by name, as an orchestrator would")
        .subcommand_required(true)
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .global(true)
                .help("HTTP request timeout in seconds, 0 disables it (or set CHAT_TOOLS_HTTP_TIMEOUT_SECS)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Validate arguments against the tool's JSON Schema before running it"),
        )
        .subcommand(Command::new("list").about("Print tool definitions as JSON"))
        .subcommand(
            Command::new("call")
                .about("Run one tool and print its result")
                .arg(
                    Arg::new("tool")
                        .help("Tool name, e.g. getWeather")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("args")
                        .help("Arguments as key=value pairs, e.g. city=Utrecht date=2024-06-01")
                        .num_args(0..)
                        .index(2),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .value_name("OBJECT")
                        .help("Arguments as a JSON object")
                        .conflicts_with("args"),
                ),
        )
}

fn tool_config(matches: &ArgMatches) -> anyhow::Result<ToolConfig> {
    let mut config = ToolConfig::default();

    let timeout = matches
        .get_one::<String>("timeout")
        .cloned()
        .or_else(|| env::var(TIMEOUT_ENV).ok());
    if let Some(raw) = timeout {
        config = config.with_http_timeout(parse_timeout(&raw)?);
    }

    if let Ok(url) = env::var(GEOCODING_URL_ENV) {
        config = config.with_geocoding_url(url);
    }
    if let Ok(url) = env::var(FORECAST_URL_ENV) {
        config = config.with_forecast_url(url);
    }

    Ok(config)
}

fn parse_timeout(raw: &str) -> anyhow::Result<Option<Duration>> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid timeout '{}', expected whole seconds", raw))?;
    Ok((seconds > 0).then(|| Duration::from_secs(seconds)))
}

fn key_value_arguments<'a>(pairs: impl IntoIterator<Item = &'a String>) -> anyhow::Result<Value> {
    let mut arguments = Map::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("argument '{}' is not of the form key=value", pair);
        };
        arguments.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(Value::Object(arguments))
}

async fn call_tool(dispatcher: &ToolDispatcher, matches: &ArgMatches) -> anyhow::Result<()> {
    let tool = matches
        .get_one::<String>("tool")
        .context("tool name is required")?;

    let arguments = match matches.get_one::<String>("json") {
        Some(raw) => serde_json::from_str(raw).context("--json must be a JSON object")?,
        None => key_value_arguments(matches.get_many::<String>("args").into_iter().flatten())?,
    };

    info!(tool = tool.as_str(), %arguments, "calling tool");

    match dispatcher.invoke(tool, arguments).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            error!(tool = tool.as_str(), error = %err, "tool call failed");
            println!("{}", err.to_error_payload());
            Err(err.into())
        }
    }
}
