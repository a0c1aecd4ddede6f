//! Repository for the `work_centers` table.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_center::{SaveWorkCenter, WorkCenter};

const COLUMNS: &str = "id, name, code, tag, cost_per_hour, capacity, time_efficiency, \
                       oee_target, created_at, updated_at";

/// Provides CRUD operations for work centers.
pub struct WorkCenterRepo;

impl WorkCenterRepo {
    pub async fn create(pool: &PgPool, input: &SaveWorkCenter) -> Result<WorkCenter, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_centers
                (name, code, tag, cost_per_hour, capacity, time_efficiency, oee_target)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkCenter>(&query)
            .bind(&input.name)
            .bind(input.code.as_deref().unwrap_or_default())
            .bind(input.tag.as_deref().unwrap_or_default())
            .bind(input.cost_per_hour)
            .bind(input.capacity)
            .bind(input.time_efficiency)
            .bind(input.oee_target)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveWorkCenter,
    ) -> Result<Option<WorkCenter>, sqlx::Error> {
        let query = format!(
            "UPDATE work_centers SET
                name = $2,
                code = $3,
                tag = $4,
                cost_per_hour = $5,
                capacity = $6,
                time_efficiency = $7,
                oee_target = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkCenter>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.code.as_deref().unwrap_or_default())
            .bind(input.tag.as_deref().unwrap_or_default())
            .bind(input.cost_per_hour)
            .bind(input.capacity)
            .bind(input.time_efficiency)
            .bind(input.oee_target)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkCenter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_centers WHERE id = $1");
        sqlx::query_as::<_, WorkCenter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Display name of a work center, if it exists.
    pub async fn find_name(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM work_centers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<WorkCenter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_centers ORDER BY name, id");
        sqlx::query_as::<_, WorkCenter>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_centers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
