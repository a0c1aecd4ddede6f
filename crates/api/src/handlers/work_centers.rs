//! Handlers for work centers, the non-equipment request target.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::ids::parse_id;
use maintrack_core::types::DbId;
use maintrack_db::models::work_center::{SaveWorkCenter, WorkCenter};
use maintrack_db::repositories::WorkCenterRepo;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkCenter",
        id,
    })
}

/// GET /api/work-centers
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WorkCenter>>> {
    Ok(Json(WorkCenterRepo::list(&state.pool).await?))
}

/// GET /api/work-center/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<WorkCenter>> {
    let id = parse_id(&raw_id)?;
    let work_center = WorkCenterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(work_center))
}

/// POST /api/work-center/save
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SaveWorkCenter>,
) -> AppResult<Json<WorkCenter>> {
    input.validate()?;

    let work_center = match input.id.as_deref() {
        None => WorkCenterRepo::create(&state.pool, &input).await?,
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            WorkCenterRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(|| not_found(id))?
        }
    };

    tracing::info!(work_center_id = work_center.id, user_id = user.user_id, "Work center saved");
    Ok(Json(work_center))
}

/// POST /api/work-center/delete/{id}
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !WorkCenterRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(work_center_id = id, user_id = user.user_id, "Work center deleted");
    Ok(Json(json!({ "success": true })))
}
