//! Handlers for technicians. Their `current_load` feeds the tech-load KPI.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::ids::parse_id;
use maintrack_core::types::DbId;
use maintrack_db::models::technician::{SaveTechnician, Technician};
use maintrack_db::repositories::TechnicianRepo;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Technician",
        id,
    })
}

/// GET /api/technicians
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Technician>>> {
    Ok(Json(TechnicianRepo::list(&state.pool).await?))
}

/// GET /api/technician/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Technician>> {
    let id = parse_id(&raw_id)?;
    let technician = TechnicianRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(technician))
}

/// POST /api/technician/save
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SaveTechnician>,
) -> AppResult<Json<Technician>> {
    input.validate()?;

    let technician = match input.id.as_deref() {
        None => TechnicianRepo::create(&state.pool, &input).await?,
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            TechnicianRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(|| not_found(id))?
        }
    };

    tracing::info!(
        technician_id = technician.id,
        current_load = technician.current_load,
        user_id = user.user_id,
        "Technician saved",
    );
    Ok(Json(technician))
}

/// POST /api/technician/delete/{id}
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !TechnicianRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(technician_id = id, user_id = user.user_id, "Technician deleted");
    Ok(Json(json!({ "success": true })))
}
