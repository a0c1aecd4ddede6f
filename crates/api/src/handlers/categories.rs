//! Handlers for equipment categories.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::ids::parse_id;
use maintrack_core::types::DbId;
use maintrack_db::models::category::{Category, QuickAddCategory, SaveCategory};
use maintrack_db::repositories::CategoryRepo;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categories
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(CategoryRepo::list(&state.pool).await?))
}

/// GET /api/category/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&raw_id)?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// POST /api/category/save
///
/// A name already used by another category answers 409.
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SaveCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;

    let category = match input.id.as_deref() {
        None => CategoryRepo::create(&state.pool, &input).await?,
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            CategoryRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(|| not_found(id))?
        }
    };

    tracing::info!(category_id = category.id, name = %category.name, user_id = user.user_id, "Category saved");
    Ok(Json(category))
}

/// POST /api/category/quick-add
///
/// Returns the existing category when the name is taken.
pub async fn quick_add(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<QuickAddCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;
    let category = CategoryRepo::quick_add(&state.pool, &input.name).await?;
    tracing::info!(category_id = category.id, user_id = user.user_id, "Category quick-added");
    Ok(Json(category))
}

/// POST /api/category/delete/{id}
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(category_id = id, user_id = user.user_id, "Category deleted");
    Ok(Json(json!({ "success": true })))
}
