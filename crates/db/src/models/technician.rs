//! Technician model and DTOs.

use maintrack_core::form_input::{blank_as_none, lenient_i16, trimmed};
use maintrack_core::ids::id_as_string;
use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `technicians` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technician {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    /// Current workload in percent. Feeds the dashboard average.
    pub current_load: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert-or-update payload.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveTechnician {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Technician name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_i16")]
    #[validate(range(min = 0, max = 100, message = "Load must be between 0 and 100"))]
    pub current_load: Option<i16>,
}
