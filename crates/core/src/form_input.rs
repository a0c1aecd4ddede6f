//! Lenient deserializers and parsers for browser form input.
//!
//! Save endpoints accept both `application/x-www-form-urlencoded` bodies
//! (where every value is a string and unset inputs arrive as `""`) and JSON
//! bodies (where numbers may be numbers and ids may be strings). The helpers
//! here let one DTO accept both shapes. Use them with
//! `#[serde(default, deserialize_with = "...")]`.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::{Date, Timestamp};

/// Display format for scheduled dates in request projections.
pub const SCHEDULE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Naive formats accepted for scheduled dates, tried in order after RFC 3339.
const SCHEDULE_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Optional text where `""` (or whitespace) means absent. Numbers are
/// accepted and rendered as text so JSON clients can send numeric ids.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(Scalar::Text(s)) if s.trim().is_empty() => None,
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(n)) => Some(n.to_string()),
        Some(Scalar::Bool(b)) => Some(b.to_string()),
    })
}

/// Required text with surrounding whitespace removed, so a length check
/// afterwards rejects whitespace-only input.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Optional floating-point number given as a number or numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n as f64)),
        Some(Scalar::Float(n)) => Ok(Some(n)),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a number"))),
        Some(Scalar::Bool(_)) => Err(serde::de::Error::custom("expected a number")),
    }
}

/// Optional small integer given as a number or numeric string.
pub fn lenient_i16<'de, D>(deserializer: D) -> Result<Option<i16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(Scalar::Int(n)) => i16::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("{n} is out of range"))),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse::<i16>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a whole number"))),
        Some(_) => Err(serde::de::Error::custom("expected a whole number")),
    }
}

/// A list of names given either as a JSON array or a comma-separated string.
/// Blank entries are dropped and names are trimmed.
pub fn name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Names {
        List(Vec<String>),
        Csv(String),
    }

    let names = match Option::<Names>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Names::List(list)) => list,
        Some(Names::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
    };
    Ok(names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect())
}

/// Optional calendar date (`YYYY-MM-DD`); blank means absent.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    parse_date(raw.as_deref().unwrap_or_default()).map_err(serde::de::Error::custom)
}

/// Parse a calendar date from form input. Blank input means "no date".
pub fn parse_date(raw: &str) -> Result<Option<Date>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("Invalid date: '{raw}'")))
}

/// Parse a scheduled date from form input. Blank input means "unscheduled".
///
/// Accepts RFC 3339, HTML `datetime-local` values, `YYYY-MM-DD HH:MM` and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_schedule(raw: &str) -> Result<Option<Timestamp>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in SCHEDULE_INPUT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(Utc.from_utc_datetime(&naive)));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(Utc.from_utc_datetime(&naive)));
        }
    }
    Err(CoreError::Validation(format!(
        "Invalid scheduled_date: '{raw}'"
    )))
}

/// Format a scheduled date for display.
pub fn format_schedule(ts: &Timestamp) -> String {
    ts.format(SCHEDULE_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "trimmed")]
        name: String,
        #[serde(default, deserialize_with = "blank_as_none")]
        text: Option<String>,
        #[serde(default, deserialize_with = "lenient_f64")]
        cost: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i16")]
        health: Option<i16>,
        #[serde(default, deserialize_with = "name_list")]
        members: Vec<String>,
        #[serde(default, deserialize_with = "lenient_date")]
        scrap_date: Option<Date>,
    }

    #[test]
    fn blank_strings_become_none() {
        let s: Sample = serde_json::from_value(json!({ "text": "  ", "cost": "" })).unwrap();
        assert_eq!(s.text, None);
        assert_eq!(s.cost, None);
    }

    #[test]
    fn names_are_trimmed() {
        let s: Sample = serde_json::from_value(json!({ "name": "  Pump 3 " })).unwrap();
        assert_eq!(s.name, "Pump 3");
        let s: Sample = serde_json::from_value(json!({ "name": "   " })).unwrap();
        assert_eq!(s.name, "");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let s: Sample = serde_json::from_value(json!({})).unwrap();
        assert_eq!(s.text, None);
        assert_eq!(s.health, None);
        assert!(s.members.is_empty());
    }

    #[test]
    fn numbers_accept_numeric_strings() {
        let s: Sample =
            serde_json::from_value(json!({ "cost": "12.5", "health": "30", "text": 7 })).unwrap();
        assert_eq!(s.cost, Some(12.5));
        assert_eq!(s.health, Some(30));
        assert_eq!(s.text.as_deref(), Some("7"));
    }

    #[test]
    fn bad_numbers_are_errors() {
        let result: Result<Sample, _> = serde_json::from_value(json!({ "health": "lots" }));
        assert!(result.is_err());
        let result: Result<Sample, _> = serde_json::from_value(json!({ "health": 70000 }));
        assert!(result.is_err());
    }

    #[test]
    fn members_accept_csv_or_list() {
        let s: Sample =
            serde_json::from_value(json!({ "members": "Aka Foster, Marc Demo,, " })).unwrap();
        assert_eq!(s.members, vec!["Aka Foster", "Marc Demo"]);
        let s: Sample = serde_json::from_value(json!({ "members": ["A", " B "] })).unwrap();
        assert_eq!(s.members, vec!["A", "B"]);
    }

    #[test]
    fn dates_parse_or_stay_empty() {
        let s: Sample = serde_json::from_value(json!({ "scrap_date": "2025-11-30" })).unwrap();
        assert_eq!(s.scrap_date, NaiveDate::from_ymd_opt(2025, 11, 30));
        let s: Sample = serde_json::from_value(json!({ "scrap_date": "" })).unwrap();
        assert_eq!(s.scrap_date, None);
        assert_matches!(parse_date("30/11/2025"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn schedule_accepts_common_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(parse_schedule("2026-03-14T09:30").unwrap(), Some(expected));
        assert_eq!(parse_schedule("2026-03-14 09:30").unwrap(), Some(expected));
        assert_eq!(parse_schedule("2026-03-14T09:30:00Z").unwrap(), Some(expected));
        assert_eq!(
            parse_schedule("2026-03-14").unwrap(),
            Some(Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_schedule("").unwrap(), None);
    }

    #[test]
    fn schedule_rejects_garbage() {
        assert_matches!(parse_schedule("next tuesday"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn schedule_display_format() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 14, 0, 0).unwrap();
        assert_eq!(format_schedule(&ts), "2026-01-05 14:00");
    }
}
