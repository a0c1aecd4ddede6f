//! Repository for the `equipment` table.

use maintrack_core::equipment::DEFAULT_HEALTH;
use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{Equipment, SaveEquipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, serial_number, category, department, company, \
                       health, scrap_date, created_at, updated_at";

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert new equipment. Health defaults to 100 when not given.
    pub async fn create(pool: &PgPool, input: &SaveEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment
                (name, serial_number, category, department, company, health, scrap_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .bind(input.serial_number.as_deref().unwrap_or_default())
            .bind(input.category.as_deref().unwrap_or_default())
            .bind(input.department.as_deref().unwrap_or_default())
            .bind(input.company.as_deref().unwrap_or_default())
            .bind(input.health.unwrap_or(DEFAULT_HEALTH))
            .bind(input.scrap_date)
            .fetch_one(pool)
            .await
    }

    /// Overwrite an equipment row from a full form. Health keeps its stored
    /// value when the form omits it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET
                name = $2,
                serial_number = $3,
                category = $4,
                department = $5,
                company = $6,
                health = COALESCE($7, health),
                scrap_date = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.serial_number.as_deref().unwrap_or_default())
            .bind(input.category.as_deref().unwrap_or_default())
            .bind(input.department.as_deref().unwrap_or_default())
            .bind(input.company.as_deref().unwrap_or_default())
            .bind(input.health)
            .bind(input.scrap_date)
            .fetch_optional(pool)
            .await
    }

    /// Find equipment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Display name of a piece of equipment, if it exists.
    pub async fn find_name(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment ORDER BY name, id");
        sqlx::query_as::<_, Equipment>(&query).fetch_all(pool).await
    }

    /// Delete equipment. Requests that reference it keep their copy of the
    /// name. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
