//! Maintenance request model, write DTOs and client projection.

use maintrack_core::error::CoreError;
use maintrack_core::form_input::format_schedule;
use maintrack_core::request::{
    MaintenanceType, Priority, RequestTarget, StatusColor, StatusState,
};
use maintrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `maintenance_requests` table.
///
/// Enum-valued columns are read as text; the table constraints restrict them
/// to the labels the core enums parse.
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceRequest {
    pub id: DbId,
    pub subject: String,
    /// Display name of the user who raised the request.
    pub employee: String,
    pub category: String,
    pub maintenance_type: String,
    pub stage: String,
    pub target_type: String,
    pub equipment_id: Option<DbId>,
    pub equipment_name: Option<String>,
    pub work_center_id: Option<DbId>,
    pub work_center_name: Option<String>,
    pub technician: String,
    pub team: String,
    pub priority: String,
    pub scheduled_date: Option<Timestamp>,
    pub duration: String,
    pub company: String,
    pub notes: String,
    pub instructions: String,
    pub status_state: String,
    pub is_overdue: bool,
    pub status_color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MaintenanceRequest {
    pub fn target(&self) -> Result<RequestTarget, CoreError> {
        RequestTarget::from_columns(
            &self.target_type,
            self.equipment_id,
            self.equipment_name.clone(),
            self.work_center_id,
            self.work_center_name.clone(),
        )
    }

    /// Stored status colour, or `None` if the column holds an unknown label.
    pub fn status_color(&self) -> Option<StatusColor> {
        self.status_color.parse().ok()
    }

    pub fn maintenance_type(&self) -> Option<MaintenanceType> {
        self.maintenance_type.parse().ok()
    }
}

/// Form fields shared by create and full update.
#[derive(Debug, Clone)]
pub struct RequestFields {
    pub subject: String,
    pub category: String,
    pub maintenance_type: MaintenanceType,
    pub target: RequestTarget,
    pub technician: String,
    pub team: String,
    pub scheduled_date: Option<Timestamp>,
    pub duration: String,
    pub company: String,
    /// Auto-saved fields. `None` leaves the stored value untouched on update
    /// and takes the column default on create.
    pub priority: Option<Priority>,
    pub status_state: Option<StatusState>,
    pub notes: Option<String>,
    pub instructions: Option<String>,
}

/// DTO for inserting a request. Stage, status colour and the overdue flag
/// always start at their initial values.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub fields: RequestFields,
    pub employee: String,
}

/// DTO for a full save of an existing request. The creator and the overdue
/// flag are never touched; stage and status colour only when present.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub fields: RequestFields,
    pub stage: Option<String>,
    pub status_color: Option<StatusColor>,
}

/// Client projection of a request: ids as strings, optional values as empty
/// strings, the target flattened into both column pairs.
#[derive(Debug, Clone, Serialize)]
pub struct RequestResponse {
    pub id: String,
    pub subject: String,
    pub employee: String,
    pub category: String,
    #[serde(rename = "type")]
    pub maintenance_type: String,
    pub stage: String,
    pub target_type: String,
    pub equipment_id: String,
    pub equipment_name: String,
    pub work_center_id: String,
    pub work_center_name: String,
    pub technician: String,
    pub team: String,
    pub priority: String,
    /// `YYYY-MM-DD HH:MM`, or empty when unscheduled.
    pub scheduled_date: String,
    pub duration: String,
    pub company: String,
    pub notes: String,
    pub instructions: String,
    pub status_state: String,
    pub is_overdue: bool,
    pub status_color: String,
    pub created_at: Timestamp,
}

impl TryFrom<MaintenanceRequest> for RequestResponse {
    type Error = CoreError;

    fn try_from(row: MaintenanceRequest) -> Result<Self, Self::Error> {
        let target = row.target()?;
        let id_text = |id: Option<DbId>| id.map(|v| v.to_string()).unwrap_or_default();

        Ok(Self {
            id: row.id.to_string(),
            subject: row.subject,
            employee: row.employee,
            category: row.category,
            maintenance_type: row.maintenance_type,
            stage: row.stage,
            target_type: target.kind().to_string(),
            equipment_id: id_text(target.equipment_id()),
            equipment_name: target.equipment_name().unwrap_or_default().to_string(),
            work_center_id: id_text(target.work_center_id()),
            work_center_name: target.work_center_name().unwrap_or_default().to_string(),
            technician: row.technician,
            team: row.team,
            priority: row.priority,
            scheduled_date: row
                .scheduled_date
                .as_ref()
                .map(format_schedule)
                .unwrap_or_default(),
            duration: row.duration,
            company: row.company,
            notes: row.notes,
            instructions: row.instructions,
            status_state: row.status_state,
            is_overdue: row.is_overdue,
            status_color: row.status_color,
            created_at: row.created_at,
        })
    }
}
