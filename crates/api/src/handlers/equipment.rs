//! Handlers for the equipment registry.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::ids::parse_id;
use maintrack_core::types::DbId;
use maintrack_db::models::equipment::{EquipmentResponse, SaveEquipment};
use maintrack_db::repositories::EquipmentRepo;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Equipment",
        id,
    })
}

/// GET /api/equipment
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EquipmentResponse>>> {
    let items = EquipmentRepo::list(&state.pool).await?;
    Ok(Json(items.into_iter().map(EquipmentResponse::from).collect()))
}

/// GET /api/equipment/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<EquipmentResponse>> {
    let id = parse_id(&raw_id)?;
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(equipment.into()))
}

/// POST /api/equipment/save
///
/// Inserts when the form has no id, otherwise updates that row. Health
/// outside 0..=100 is rejected.
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SaveEquipment>,
) -> AppResult<Json<EquipmentResponse>> {
    input.validate()?;

    let equipment = match input.id.as_deref() {
        None => EquipmentRepo::create(&state.pool, &input).await?,
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            EquipmentRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(|| not_found(id))?
        }
    };

    tracing::info!(
        equipment_id = equipment.id,
        health = equipment.health,
        user_id = user.user_id,
        "Equipment saved",
    );

    Ok(Json(equipment.into()))
}

/// POST /api/equipment/delete/{id}
///
/// Requests that reference the equipment keep their denormalized name.
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !EquipmentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(equipment_id = id, user_id = user.user_id, "Equipment deleted");
    Ok(Json(json!({ "success": true })))
}
