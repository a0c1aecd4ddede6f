//! Maintenance team model and DTOs.

use maintrack_core::form_input::{blank_as_none, name_list, trimmed};
use maintrack_core::ids::id_as_string;
use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub company: String,
    /// Member display names.
    pub members: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert-or-update payload. `members` may be a list or a comma-separated
/// string.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveTeam {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "name_list")]
    pub members: Vec<String>,
}
