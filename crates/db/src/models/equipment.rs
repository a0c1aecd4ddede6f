//! Equipment entity model and DTOs.

use maintrack_core::equipment::EquipmentStatus;
use maintrack_core::form_input::{blank_as_none, lenient_date, lenient_i16, trimmed};
use maintrack_core::ids::id_as_string;
use maintrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: String,
    pub company: String,
    pub health: i16,
    pub scrap_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Equipment {
    pub fn status(&self) -> EquipmentStatus {
        EquipmentStatus::from_scrap_date(self.scrap_date)
    }
}

/// Equipment as returned to clients, with its derived status.
#[derive(Debug, Serialize)]
pub struct EquipmentResponse {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub status: EquipmentStatus,
}

impl From<Equipment> for EquipmentResponse {
    fn from(equipment: Equipment) -> Self {
        let status = equipment.status();
        Self { equipment, status }
    }
}

/// Insert-or-update payload. `id` selects the update branch.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveEquipment {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_i16")]
    #[validate(range(min = 0, max = 100, message = "Health must be between 0 and 100"))]
    pub health: Option<i16>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub scrap_date: Option<Date>,
}
