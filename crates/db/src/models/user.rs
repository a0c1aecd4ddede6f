//! User entity model and DTOs.

use maintrack_core::ids::{id_as_string, opt_id_as_string};
use maintrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserOption`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub team_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User entry for assignment drop-downs (no email, no hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserOption {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub role: String,
    #[serde(serialize_with = "opt_id_as_string")]
    pub team_id: Option<DbId>,
}

impl From<User> for UserOption {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            team_id: user.team_id,
        }
    }
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
