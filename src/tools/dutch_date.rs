//! Dutch natural-language day expressions to ISO calendar dates.
//!
//! Recognised, in precedence order:
//!
//! 1. `vandaag`, `morgen`, `overmorgen`
//! 2. a bare weekday (`maandag` .. `zondag`): the next occurrence strictly after today
//! 3. `volgende week <weekday>`: the bare-weekday date plus seven days
//! 4. a literal `YYYY-MM-DD` date
//!
//! Input is matched case-insensitively with surrounding whitespace
//! ignored. Anything else is an
//! [`UnrecognizedDateExpression`](crate::ToolError::UnrecognizedDateExpression).

use super::date_time::{parse_time_zone, today_in, DEFAULT_TIME_ZONE};
use crate::{Result, ToolError};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, warn};

const NEXT_WEEK_PREFIX: &str = "volgende week ";
const DAYS_PER_WEEK: u64 = 7;

/// Parameters for `parseDutchDateToIso`
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DutchDateParams {
    /// Dutch day expression, e.g. `morgen`, `zaterdag` or `volgende week maandag`
    pub natural_language_date: String,
}

crate::tool!(
    name = "parseDutchDateToIso",
    description = "Converts a Dutch natural language date to an ISO date (YYYY-MM-DD), relative to today in Europe/Amsterdam. Supports: vandaag, morgen, overmorgen, a weekday name (maandag..zondag, meaning its next occurrence), 'volgende week <weekday>', and dates already in YYYY-MM-DD form.",
    params = DutchDateParams,
    |params: DutchDateParams| async move {
        DutchDateResolver::default()
            .resolve(&params.natural_language_date)
            .map(|date| date.to_string())
    }
);

/// Resolves Dutch day expressions relative to "today" in a reference zone
#[derive(Debug, Clone, Copy)]
pub struct DutchDateResolver {
    zone: Tz,
}

impl Default for DutchDateResolver {
    fn default() -> Self {
        Self {
            zone: DEFAULT_TIME_ZONE,
        }
    }
}

impl DutchDateResolver {
    /// Create a resolver anchored to the named IANA zone
    pub fn new(zone: &str) -> Result<Self> {
        Ok(Self {
            zone: parse_time_zone(zone)?,
        })
    }

    /// The zone whose calendar date counts as "today"
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Resolve `expression` against today's date in the reference zone.
    pub fn resolve(&self, expression: &str) -> Result<NaiveDate> {
        self.resolve_on(expression, today_in(self.zone))
    }

    /// Resolve `expression` as if `today` were the current date.
    pub fn resolve_on(&self, expression: &str, today: NaiveDate) -> Result<NaiveDate> {
        info!(input = expression, %today, "parsing Dutch date expression");

        match parse_expression(&normalize(expression), today) {
            Some(date) => {
                debug!(%date, "parsed Dutch date expression");
                Ok(date)
            }
            None => {
                warn!(input = expression, "unknown date format");
                Err(ToolError::UnrecognizedDateExpression(expression.to_string()))
            }
        }
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn parse_expression(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(offset) = relative_day_offset(input) {
        return Some(today + Days::new(offset));
    }

    if let Some(weekday) = dutch_weekday(input) {
        return Some(today + Days::new(days_ahead(today.weekday(), weekday)));
    }

    if let Some(rest) = input.strip_prefix(NEXT_WEEK_PREFIX) {
        let weekday = dutch_weekday(rest)?;
        return Some(today + Days::new(days_ahead(today.weekday(), weekday) + DAYS_PER_WEEK));
    }

    parse_iso_date(input)
}

fn relative_day_offset(input: &str) -> Option<u64> {
    match input {
        "vandaag" => Some(0),
        "morgen" => Some(1),
        "overmorgen" => Some(2),
        _ => None,
    }
}

fn dutch_weekday(name: &str) -> Option<Weekday> {
    match name {
        "maandag" => Some(Weekday::Mon),
        "dinsdag" => Some(Weekday::Tue),
        "woensdag" => Some(Weekday::Wed),
        "donderdag" => Some(Weekday::Thu),
        "vrijdag" => Some(Weekday::Fri),
        "zaterdag" => Some(Weekday::Sat),
        "zondag" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days until the next `target`, in `1..=7`; the same weekday rolls over to next week.
fn days_ahead(current: Weekday, target: Weekday) -> u64 {
    let diff = (i64::from(target.num_days_from_monday())
        - i64::from(current.num_days_from_monday()))
    .rem_euclid(DAYS_PER_WEEK as i64) as u64;

    if diff == 0 {
        DAYS_PER_WEEK
    } else {
        diff
    }
}

pub(crate) fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());

    if !shaped {
        return None;
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
