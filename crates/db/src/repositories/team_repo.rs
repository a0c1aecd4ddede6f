//! Repository for the `teams` table.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::{SaveTeam, Team};

const COLUMNS: &str = "id, name, company, members, created_at, updated_at";

/// Provides CRUD operations for maintenance teams.
pub struct TeamRepo;

impl TeamRepo {
    pub async fn create(pool: &PgPool, input: &SaveTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (name, company, members)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .bind(input.company.as_deref().unwrap_or_default())
            .bind(&input.members)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a team, including its member list.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveTeam,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "UPDATE teams SET name = $2, company = $3, members = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.company.as_deref().unwrap_or_default())
            .bind(&input.members)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY name, id");
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
