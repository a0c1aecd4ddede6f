//! Repository for the `maintenance_requests` table.
//!
//! Every method is a single statement. Field patches write one column, so
//! concurrent patches to different fields of the same request do not
//! overwrite each other; full saves are last-writer-wins.

use maintrack_core::field_patch::RequestFieldPatch;
use maintrack_core::request::MaintenanceType;
use maintrack_core::stage::STAGE_NEW_REQUEST;
use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::request::{CreateRequest, MaintenanceRequest, UpdateRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, employee, category, maintenance_type, stage, target_type, \
                       equipment_id, equipment_name, work_center_id, work_center_name, \
                       technician, team, priority, scheduled_date, duration, company, notes, \
                       instructions, status_state, is_overdue, status_color, \
                       created_at, updated_at";

/// Provides lifecycle operations for maintenance requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request in the `New Request` stage with a grey status
    /// and the overdue flag cleared.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRequest,
    ) -> Result<MaintenanceRequest, sqlx::Error> {
        let f = &input.fields;
        let query = format!(
            "INSERT INTO maintenance_requests
                (subject, employee, category, maintenance_type, stage, target_type,
                 equipment_id, equipment_name, work_center_id, work_center_name,
                 technician, team, scheduled_date, duration, company,
                 priority, status_state, notes, instructions,
                 status_color, is_overdue)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                     COALESCE($16, 'low'), COALESCE($17, 'in_progress'),
                     COALESCE($18, ''), COALESCE($19, ''),
                     'grey', false)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(&f.subject)
            .bind(&input.employee)
            .bind(&f.category)
            .bind(f.maintenance_type.as_str())
            .bind(STAGE_NEW_REQUEST)
            .bind(f.target.kind().as_str())
            .bind(f.target.equipment_id())
            .bind(f.target.equipment_name())
            .bind(f.target.work_center_id())
            .bind(f.target.work_center_name())
            .bind(&f.technician)
            .bind(&f.team)
            .bind(f.scheduled_date)
            .bind(&f.duration)
            .bind(&f.company)
            .bind(f.priority.map(|p| p.as_str()))
            .bind(f.status_state.map(|s| s.as_str()))
            .bind(f.notes.as_deref())
            .bind(f.instructions.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Overwrite a request from a full form save.
    ///
    /// The target pair of the other variant is cleared so the row always
    /// matches its `target_type`. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let f = &input.fields;
        let query = format!(
            "UPDATE maintenance_requests SET
                subject = $2,
                category = $3,
                maintenance_type = $4,
                target_type = $5,
                equipment_id = $6,
                equipment_name = $7,
                work_center_id = $8,
                work_center_name = $9,
                technician = $10,
                team = $11,
                scheduled_date = $12,
                duration = $13,
                company = $14,
                priority = COALESCE($15, priority),
                status_state = COALESCE($16, status_state),
                notes = COALESCE($17, notes),
                instructions = COALESCE($18, instructions),
                stage = COALESCE($19, stage),
                status_color = COALESCE($20, status_color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .bind(&f.subject)
            .bind(&f.category)
            .bind(f.maintenance_type.as_str())
            .bind(f.target.kind().as_str())
            .bind(f.target.equipment_id())
            .bind(f.target.equipment_name())
            .bind(f.target.work_center_id())
            .bind(f.target.work_center_name())
            .bind(&f.technician)
            .bind(&f.team)
            .bind(f.scheduled_date)
            .bind(&f.duration)
            .bind(&f.company)
            .bind(f.priority.map(|p| p.as_str()))
            .bind(f.status_state.map(|s| s.as_str()))
            .bind(f.notes.as_deref())
            .bind(f.instructions.as_deref())
            .bind(input.stage.as_deref())
            .bind(input.status_color.map(|c| c.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Write a single validated field. Returns `true` if the request exists.
    pub async fn apply_patch(
        pool: &PgPool,
        id: DbId,
        patch: &RequestFieldPatch,
    ) -> Result<bool, sqlx::Error> {
        // The column name comes from a closed set, never from client input.
        let query = format!(
            "UPDATE maintenance_requests SET {} = $2 WHERE id = $1",
            patch.column()
        );
        let statement = sqlx::query(&query).bind(id);
        let statement = match patch {
            RequestFieldPatch::Subject(v)
            | RequestFieldPatch::Category(v)
            | RequestFieldPatch::Technician(v)
            | RequestFieldPatch::Team(v)
            | RequestFieldPatch::Duration(v)
            | RequestFieldPatch::Company(v)
            | RequestFieldPatch::Notes(v)
            | RequestFieldPatch::Instructions(v)
            | RequestFieldPatch::Stage(v) => statement.bind(v.as_str()),
            RequestFieldPatch::Priority(p) => statement.bind(p.as_str()),
            RequestFieldPatch::StatusState(s) => statement.bind(s.as_str()),
            RequestFieldPatch::StatusColor(c) => statement.bind(c.as_str()),
            RequestFieldPatch::MaintenanceType(t) => statement.bind(t.as_str()),
            RequestFieldPatch::ScheduledDate(d) => statement.bind(*d),
            RequestFieldPatch::IsOverdue(b) => statement.bind(*b),
        };
        let result = statement.execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the stage. No transition rules apply.
    ///
    /// Returns `true` if the request exists.
    pub async fn set_stage(pool: &PgPool, id: DbId, stage: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE maintenance_requests SET stage = $2 WHERE id = $1")
            .bind(id)
            .bind(stage)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_requests WHERE id = $1");
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MaintenanceRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_requests ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Requests with a scheduled date, in schedule order.
    pub async fn list_scheduled(pool: &PgPool) -> Result<Vec<MaintenanceRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_requests
             WHERE scheduled_date IS NOT NULL
             ORDER BY scheduled_date, id"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Requests of one maintenance type, most recently created first.
    pub async fn list_by_type(
        pool: &PgPool,
        maintenance_type: MaintenanceType,
    ) -> Result<Vec<MaintenanceRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_requests
             WHERE maintenance_type = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(maintenance_type.as_str())
            .fetch_all(pool)
            .await
    }

    /// Delete a request. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
