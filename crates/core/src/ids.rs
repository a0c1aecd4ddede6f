//! Parsing of client-supplied identifiers.
//!
//! Ids travel to clients as strings (the frontend treats them as opaque
//! tokens) and come back either as path segments, form fields, or JSON
//! values that may be strings or numbers.

use serde::Serializer;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Parse an id from its string form. Rejects anything that is not a
/// positive integer.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    match trimmed.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::MalformedId(format!(
            "'{raw}' is not a valid id"
        ))),
    }
}

/// Parse an id carried in a JSON body, accepting both `"12"` and `12`.
pub fn parse_id_value(value: &Value) -> Result<DbId, CoreError> {
    match value {
        Value::String(s) => parse_id(s),
        Value::Number(n) => match n.as_i64() {
            Some(id) if id > 0 => Ok(id),
            _ => Err(CoreError::MalformedId(format!("'{n}' is not a valid id"))),
        },
        other => Err(CoreError::MalformedId(format!(
            "'{other}' is not a valid id"
        ))),
    }
}

/// Parse an optional reference to another entity.
///
/// References on a maintenance request never fail the write: a blank or
/// malformed reference simply resolves to nothing.
pub fn parse_reference(raw: Option<&str>) -> Option<DbId> {
    raw.filter(|s| !s.trim().is_empty())
        .and_then(|s| parse_id(s).ok())
}

/// Serialize an id as a string. Use with `#[serde(serialize_with = "...")]`.
pub fn id_as_string<S>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

/// Serialize an optional id as a string, `None` becoming `""`.
pub fn opt_id_as_string<S>(id: &Option<DbId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.collect_str(id),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_matches!(parse_id("W1"), Err(CoreError::MalformedId(msg)) if msg.contains("W1"));
        assert_matches!(parse_id(""), Err(CoreError::MalformedId(_)));
        assert_matches!(parse_id("0"), Err(CoreError::MalformedId(_)));
        assert_matches!(parse_id("-3"), Err(CoreError::MalformedId(_)));
    }

    #[test]
    fn json_ids_may_be_strings_or_numbers() {
        assert_eq!(parse_id_value(&json!("15")).unwrap(), 15);
        assert_eq!(parse_id_value(&json!(15)).unwrap(), 15);
        assert_matches!(parse_id_value(&json!(1.5)), Err(CoreError::MalformedId(_)));
        assert_matches!(parse_id_value(&json!(null)), Err(CoreError::MalformedId(_)));
        assert_matches!(parse_id_value(&json!(["1"])), Err(CoreError::MalformedId(_)));
    }

    #[test]
    fn references_resolve_leniently() {
        assert_eq!(parse_reference(Some("9")), Some(9));
        assert_eq!(parse_reference(Some("W1")), None);
        assert_eq!(parse_reference(Some("  ")), None);
        assert_eq!(parse_reference(None), None);
    }

    #[test]
    fn ids_serialize_as_strings() {
        #[derive(serde::Serialize)]
        struct Row {
            #[serde(serialize_with = "id_as_string")]
            id: DbId,
            #[serde(serialize_with = "opt_id_as_string")]
            team_id: Option<DbId>,
        }

        let json = serde_json::to_value(Row { id: 12, team_id: None }).unwrap();
        assert_eq!(json, json!({ "id": "12", "team_id": "" }));
    }
}
