//! Handlers for the maintenance request lifecycle.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::field_patch::RequestFieldPatch;
use maintrack_core::form_input::{blank_as_none, parse_schedule};
use maintrack_core::ids::{parse_id, parse_id_value, parse_reference};
use maintrack_core::request::{MaintenanceType, RequestTarget, TargetKind};
use maintrack_core::stage::canonicalize_stage;
use maintrack_core::types::DbId;
use maintrack_db::models::request::{
    CreateRequest, MaintenanceRequest, RequestFields, RequestResponse, UpdateRequest,
};
use maintrack_db::repositories::{EquipmentRepo, RequestRepo, WorkCenterRepo};
use maintrack_db::DbPool;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /api/request/save`.
///
/// Every value is optional text so the same struct accepts browser forms
/// (blank inputs arrive as `""`) and JSON.
#[derive(Debug, Default, Deserialize)]
pub struct SaveRequestForm {
    #[serde(default, alias = "request_id", deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default, rename = "type", alias = "m_type", deserialize_with = "blank_as_none")]
    pub maintenance_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub target_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub equipment_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub work_center_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub technician: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status_state: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status_color: Option<String>,
}

/// Body of `POST /api/request/update` (auto-save of one field).
#[derive(Debug, Deserialize)]
pub struct UpdateFieldBody {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// Body of `POST /api/request/update-stage` and `POST /api/kanban/move`.
#[derive(Debug, Deserialize)]
pub struct StageChangeBody {
    #[serde(default, alias = "request_id", deserialize_with = "blank_as_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub new_stage: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MaintenanceRequest",
        id,
    })
}

fn missing_data() -> AppError {
    AppError::BadRequest("Missing data".to_string())
}

/// Resolve the request target from the form, looking up the display name
/// of the referenced row. Unusable references fall back to the "unknown"
/// name instead of failing the save.
async fn resolve_target(pool: &DbPool, form: &SaveRequestForm) -> AppResult<RequestTarget> {
    let kind: TargetKind = form.target_type.as_deref().unwrap_or_default().parse()?;
    let reference = match kind {
        TargetKind::Equipment => parse_reference(form.equipment_id.as_deref()),
        TargetKind::WorkCenter => parse_reference(form.work_center_id.as_deref()),
    };
    let name = match (kind, reference) {
        (TargetKind::Equipment, Some(id)) => EquipmentRepo::find_name(pool, id).await?,
        (TargetKind::WorkCenter, Some(id)) => WorkCenterRepo::find_name(pool, id).await?,
        (_, None) => None,
    };
    if name.is_none() {
        tracing::warn!(target_type = %kind, reference = ?reference, "Request target did not resolve");
    }
    Ok(RequestTarget::resolved(kind, reference, name))
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, CoreError>
where
    T: std::str::FromStr<Err = CoreError>,
{
    raw.map(str::parse).transpose()
}

async fn build_fields(pool: &DbPool, form: &SaveRequestForm) -> AppResult<RequestFields> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    Ok(RequestFields {
        subject: text(&form.subject),
        category: text(&form.category),
        maintenance_type: parse_optional::<MaintenanceType>(form.maintenance_type.as_deref())?
            .unwrap_or_default(),
        target: resolve_target(pool, form).await?,
        technician: text(&form.technician),
        team: text(&form.team),
        scheduled_date: parse_schedule(form.scheduled_date.as_deref().unwrap_or_default())?,
        duration: text(&form.duration),
        company: text(&form.company),
        priority: parse_optional(form.priority.as_deref())?,
        status_state: parse_optional(form.status_state.as_deref())?,
        notes: form.notes.clone(),
        instructions: form.instructions.clone(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/request/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<RequestResponse>> {
    let id = parse_id(&raw_id)?;
    let row = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(RequestResponse::try_from(row)?))
}

/// POST /api/request/save
///
/// Creates a request when the form has no id, otherwise overwrites the
/// existing one. Redirects to the dashboard either way.
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<SaveRequestForm>,
) -> AppResult<impl IntoResponse> {
    let fields = build_fields(&state.pool, &form).await?;

    match form.id.as_deref() {
        None => {
            let created = RequestRepo::create(
                &state.pool,
                &CreateRequest {
                    fields,
                    employee: user.name.clone(),
                },
            )
            .await?;
            tracing::info!(request_id = created.id, user_id = user.user_id, "Maintenance request created");
        }
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            let update = UpdateRequest {
                fields,
                stage: form.stage.as_deref().map(canonicalize_stage).transpose()?,
                status_color: parse_optional(form.status_color.as_deref())?,
            };
            RequestRepo::update(&state.pool, id, &update)
                .await?
                .ok_or_else(|| not_found(id))?;
            tracing::info!(request_id = id, user_id = user.user_id, "Maintenance request saved");
        }
    }

    Ok(Redirect::to("/dashboard"))
}

/// POST /api/request/update
///
/// Auto-save of a single field: `{"id", "field", "value"}`, as JSON or a
/// form post.
pub async fn update_field(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(body): FormOrJson<UpdateFieldBody>,
) -> AppResult<Json<Value>> {
    let (Some(raw_id), Some(field)) = (body.id.as_ref(), body.field.as_deref()) else {
        return Err(missing_data());
    };
    if raw_id.is_null() || field.is_empty() {
        return Err(missing_data());
    }
    let id = parse_id_value(raw_id)?;
    let patch = RequestFieldPatch::parse(field, &body.value)?;

    if !RequestRepo::apply_patch(&state.pool, id, &patch).await? {
        return Err(not_found(id));
    }

    tracing::info!(request_id = id, user_id = user.user_id, field = patch.column(), "Request field updated");
    Ok(Json(json!({ "success": true })))
}

/// POST /api/request/update-stage
/// POST /api/kanban/move
///
/// Overwrites the stage. Any non-empty label is accepted.
pub async fn update_stage(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(body): FormOrJson<StageChangeBody>,
) -> AppResult<Json<Value>> {
    let raw_id = body.id.as_deref().ok_or_else(missing_data)?;
    let id = parse_id(raw_id)?;
    let stage = canonicalize_stage(
        body.stage
            .as_deref()
            .or(body.new_stage.as_deref())
            .unwrap_or_default(),
    )?;

    if !RequestRepo::set_stage(&state.pool, id, &stage).await? {
        return Err(not_found(id));
    }

    tracing::info!(request_id = id, user_id = user.user_id, stage = %stage, "Request stage changed");
    Ok(Json(json!({ "success": true })))
}

/// POST /api/request/delete/{id}
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    if !RequestRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(request_id = id, user_id = user.user_id, "Maintenance request deleted");
    Ok(Redirect::to("/dashboard"))
}

/// Project stored rows for clients.
pub(crate) fn project_all(
    rows: Vec<MaintenanceRequest>,
) -> Result<Vec<RequestResponse>, CoreError> {
    rows.into_iter().map(RequestResponse::try_from).collect()
}
