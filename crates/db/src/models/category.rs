//! Equipment category model and DTOs.

use maintrack_core::form_input::{blank_as_none, trimmed};
use maintrack_core::ids::id_as_string;
use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table. Names are unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub responsible: String,
    pub company: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert-or-update payload.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveCategory {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub responsible: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company: Option<String>,
}

/// Payload for creating a category inline from another form.
#[derive(Debug, Deserialize, Validate)]
pub struct QuickAddCategory {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
}
