//! Work center model and DTOs.

use maintrack_core::form_input::{blank_as_none, lenient_f64, trimmed};
use maintrack_core::ids::id_as_string;
use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `work_centers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkCenter {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub tag: String,
    pub cost_per_hour: Option<f64>,
    pub capacity: Option<f64>,
    /// Percent.
    pub time_efficiency: Option<f64>,
    /// Percent.
    pub oee_target: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert-or-update payload.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveWorkCenter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Work center name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0, message = "Cost per hour cannot be negative"))]
    pub cost_per_hour: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0, message = "Capacity cannot be negative"))]
    pub capacity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0, max = 100.0, message = "Time efficiency must be a percentage"))]
    pub time_efficiency: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0, max = 100.0, message = "OEE target must be a percentage"))]
    pub oee_target: Option<f64>,
}
