//! Date revival for GraphQL responses.
//!
//! The server sends timestamps as strings. Any string value that begins with a
//! `YYYY-MM-DD` prefix is treated as a date and revived into a
//! `DateTime<Utc>`; everything else is left alone.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer};

/// Pattern a string must start with to be considered a date.
const DATE_PREFIX_PATTERN: &str = r"^\d\d\d\d-\d\d-\d\d";

fn date_prefix() -> &'static Regex {
    static DATE_PREFIX: OnceLock<Regex> = OnceLock::new();
    DATE_PREFIX.get_or_init(|| {
        Regex::new(DATE_PREFIX_PATTERN).expect("date prefix pattern is a valid regex")
    })
}

/// Check whether a string looks like a date.
pub fn is_date_string(value: &str) -> bool {
    date_prefix().is_match(value)
}

/// Revive a date string into a UTC timestamp.
///
/// Full RFC 3339 timestamps keep their time component. Anything else that
/// starts with a date is read as midnight UTC of that date. Returns `None`
/// for strings that do not start with a date or whose date is invalid.
pub fn revive(value: &str) -> Option<DateTime<Utc>> {
    if !is_date_string(value) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(&value[..10], "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp the way the server expects dates in variables.
pub fn to_wire(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for required timestamp fields.
pub mod revived {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        revive(&raw).ok_or_else(|| serde::de::Error::custom(format!("not a date: {raw:?}")))
    }

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_wire(dt))
    }
}

/// Serde adapter for optional timestamp fields.
///
/// `null` and absent values become `None`. A string that is not a date is
/// also treated as `None`, since it was never revived.
pub mod revived_option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(revive))
    }

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&to_wire(dt)),
            None => serializer.serialize_none(),
        }
    }
}
