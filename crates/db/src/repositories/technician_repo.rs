//! Repository for the `technicians` table.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::technician::{SaveTechnician, Technician};

const COLUMNS: &str = "id, name, current_load, created_at, updated_at";

/// Provides CRUD operations for technicians.
pub struct TechnicianRepo;

impl TechnicianRepo {
    pub async fn create(pool: &PgPool, input: &SaveTechnician) -> Result<Technician, sqlx::Error> {
        let query = format!(
            "INSERT INTO technicians (name, current_load)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technician>(&query)
            .bind(&input.name)
            .bind(input.current_load.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Update a technician. Load keeps its stored value when omitted.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveTechnician,
    ) -> Result<Option<Technician>, sqlx::Error> {
        let query = format!(
            "UPDATE technicians SET name = $2, current_load = COALESCE($3, current_load)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technician>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.current_load)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Technician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technicians WHERE id = $1");
        sqlx::query_as::<_, Technician>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Technician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technicians ORDER BY name, id");
        sqlx::query_as::<_, Technician>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM technicians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
