//! Current wall-clock time in an IANA time zone.
//!
//! This module is the single source of "now" for the date tools: the Dutch
//! date resolver anchors its "today" through [`today_in`].

use crate::{Result, ToolError};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

/// Zone used when the caller does not name one
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Amsterdam;

/// ISO-8601 local date-time, fractional seconds only when non-zero
const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parameters for `getCurrentDateTime`
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDateTimeParams {
    /// IANA time zone identifier, e.g. `Europe/Amsterdam`
    pub time_zone: String,
}

crate::tool!(
    name = "getCurrentDateTime",
    description = "Get the current date and time in the given IANA time zone (for example Europe/Amsterdam). Returns an ISO local date-time without offset.",
    params = CurrentDateTimeParams,
    |params: CurrentDateTimeParams| async move { current_date_time(&params.time_zone) }
);

/// Look up an IANA zone identifier.
pub fn parse_time_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| ToolError::InvalidTimeZone(zone.to_string()))
}

/// Wall-clock date-time in `zone` right now.
pub fn now_in(zone: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&zone).naive_local()
}

/// Calendar date in `zone` right now.
pub fn today_in(zone: Tz) -> NaiveDate {
    now_in(zone).date()
}

/// Current date-time in the named zone, formatted as an ISO local date-time.
pub fn current_date_time(zone: &str) -> Result<String> {
    let tz = parse_time_zone(zone)?;
    let formatted = format_local(now_in(tz));
    debug!(zone = %tz, now = %formatted, "resolved current date-time");
    Ok(formatted)
}

fn format_local(moment: NaiveDateTime) -> String {
    moment.format(LOCAL_DATE_TIME_FORMAT).to_string()
}
