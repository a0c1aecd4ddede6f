//! Single-field patches for request auto-save.
//!
//! The edit form auto-saves each input as it changes, sending the input's
//! name and its new value. Only the fields listed in [`PATCHABLE_FIELDS`]
//! may be patched; each has its own value validator. The target reference,
//! creator and id can only change through a full save.

use serde_json::Value;

use crate::error::CoreError;
use crate::form_input::parse_schedule;
use crate::request::{MaintenanceType, Priority, StatusColor, StatusState};
use crate::stage::canonicalize_stage;
use crate::types::Timestamp;

/// Field names accepted by [`RequestFieldPatch::parse`].
pub const PATCHABLE_FIELDS: &[&str] = &[
    "subject",
    "category",
    "technician",
    "team",
    "duration",
    "company",
    "notes",
    "instructions",
    "priority",
    "status_state",
    "status_color",
    "type",
    "stage",
    "scheduled_date",
    "is_overdue",
];

/// A validated write of one request column.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestFieldPatch {
    Subject(String),
    Category(String),
    Technician(String),
    Team(String),
    Duration(String),
    Company(String),
    Notes(String),
    Instructions(String),
    Priority(Priority),
    StatusState(StatusState),
    StatusColor(StatusColor),
    MaintenanceType(MaintenanceType),
    Stage(String),
    ScheduledDate(Option<Timestamp>),
    IsOverdue(bool),
}

impl RequestFieldPatch {
    /// Validate `value` for `field` and build the patch.
    ///
    /// `m_type` is accepted as the legacy form name of `type`.
    pub fn parse(field: &str, value: &Value) -> Result<Self, CoreError> {
        let patch = match field {
            "subject" => Self::Subject(text(field, value)?),
            "category" => Self::Category(text(field, value)?),
            "technician" => Self::Technician(text(field, value)?),
            "team" => Self::Team(text(field, value)?),
            "duration" => Self::Duration(text(field, value)?),
            "company" => Self::Company(text(field, value)?),
            "notes" => Self::Notes(text(field, value)?),
            "instructions" => Self::Instructions(text(field, value)?),
            "priority" => Self::Priority(text(field, value)?.parse()?),
            "status_state" => Self::StatusState(text(field, value)?.parse()?),
            "status_color" => Self::StatusColor(text(field, value)?.parse()?),
            "type" | "m_type" => Self::MaintenanceType(text(field, value)?.parse()?),
            "stage" => Self::Stage(canonicalize_stage(&text(field, value)?)?),
            "scheduled_date" => Self::ScheduledDate(parse_schedule(&text(field, value)?)?),
            "is_overdue" => Self::IsOverdue(boolean(field, value)?),
            other => {
                return Err(CoreError::Validation(format!(
                    "Field '{other}' cannot be updated. Allowed fields: {}",
                    PATCHABLE_FIELDS.join(", ")
                )))
            }
        };
        Ok(patch)
    }

    /// Column written by this patch.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Subject(_) => "subject",
            Self::Category(_) => "category",
            Self::Technician(_) => "technician",
            Self::Team(_) => "team",
            Self::Duration(_) => "duration",
            Self::Company(_) => "company",
            Self::Notes(_) => "notes",
            Self::Instructions(_) => "instructions",
            Self::Priority(_) => "priority",
            Self::StatusState(_) => "status_state",
            Self::StatusColor(_) => "status_color",
            Self::MaintenanceType(_) => "maintenance_type",
            Self::Stage(_) => "stage",
            Self::ScheduledDate(_) => "scheduled_date",
            Self::IsOverdue(_) => "is_overdue",
        }
    }
}

/// Text fields take strings; `null` clears them to empty.
fn text(field: &str, value: &Value) -> Result<String, CoreError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(CoreError::Validation(format!(
            "Field '{field}' expects a string, got {other}"
        ))),
    }
}

fn boolean(field: &str, value: &Value) -> Result<bool, CoreError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(CoreError::Validation(format!(
            "Field '{field}' expects a boolean, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn notes_patch_writes_notes_column() {
        let patch = RequestFieldPatch::parse("notes", &json!("Belt misaligned")).unwrap();
        assert_eq!(patch, RequestFieldPatch::Notes("Belt misaligned".to_string()));
        assert_eq!(patch.column(), "notes");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        for field in ["equipment_id", "employee", "_id", "target_type", "password"] {
            assert_matches!(
                RequestFieldPatch::parse(field, &json!("x")),
                Err(CoreError::Validation(msg)) if msg.contains(field),
                "field {field} must be rejected"
            );
        }
    }

    #[test]
    fn enum_fields_validate_their_values() {
        assert_eq!(
            RequestFieldPatch::parse("priority", &json!("high")).unwrap(),
            RequestFieldPatch::Priority(Priority::High)
        );
        assert_matches!(
            RequestFieldPatch::parse("priority", &json!("urgent")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            RequestFieldPatch::parse("status_color", &json!(3)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn legacy_type_name_maps_to_maintenance_type() {
        let patch = RequestFieldPatch::parse("m_type", &json!("Preventive")).unwrap();
        assert_eq!(patch, RequestFieldPatch::MaintenanceType(MaintenanceType::Preventive));
        assert_eq!(patch.column(), "maintenance_type");
    }

    #[test]
    fn stage_patch_is_canonicalized() {
        assert_eq!(
            RequestFieldPatch::parse("stage", &json!("Done")).unwrap(),
            RequestFieldPatch::Stage("Repaired".to_string())
        );
    }

    #[test]
    fn scheduled_date_can_be_cleared() {
        assert_eq!(
            RequestFieldPatch::parse("scheduled_date", &json!("")).unwrap(),
            RequestFieldPatch::ScheduledDate(None)
        );
        assert_matches!(
            RequestFieldPatch::parse("scheduled_date", &json!("2026-02-01T08:00")),
            Ok(RequestFieldPatch::ScheduledDate(Some(_)))
        );
    }

    #[test]
    fn null_clears_text_fields() {
        assert_eq!(
            RequestFieldPatch::parse("instructions", &json!(null)).unwrap(),
            RequestFieldPatch::Instructions(String::new())
        );
    }

    #[test]
    fn overdue_flag_takes_booleans() {
        assert_eq!(
            RequestFieldPatch::parse("is_overdue", &json!(true)).unwrap(),
            RequestFieldPatch::IsOverdue(true)
        );
        assert_matches!(
            RequestFieldPatch::parse("is_overdue", &json!("yes")),
            Err(CoreError::Validation(_))
        );
    }
}
