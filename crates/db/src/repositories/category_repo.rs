//! Repository for the `categories` table.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, SaveCategory};

const COLUMNS: &str = "id, name, responsible, company, created_at, updated_at";

/// Provides CRUD operations for equipment categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category. A duplicate name violates `uq_categories_name`.
    pub async fn create(pool: &PgPool, input: &SaveCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, responsible, company)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.responsible.as_deref().unwrap_or_default())
            .bind(input.company.as_deref().unwrap_or_default())
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, responsible = $3, company = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.responsible.as_deref().unwrap_or_default())
            .bind(input.company.as_deref().unwrap_or_default())
            .fetch_optional(pool)
            .await
    }

    /// Create a category by name or return the existing one.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on
    /// conflict.
    pub async fn quick_add(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name)
             VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
