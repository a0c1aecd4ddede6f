//! Handlers for maintenance teams.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::error::CoreError;
use maintrack_core::ids::parse_id;
use maintrack_core::types::DbId;
use maintrack_db::models::team::{SaveTeam, Team};
use maintrack_db::repositories::TeamRepo;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Team", id })
}

/// GET /api/teams
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Team>>> {
    Ok(Json(TeamRepo::list(&state.pool).await?))
}

/// GET /api/team/{id}
pub async fn get_by_id(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Team>> {
    let id = parse_id(&raw_id)?;
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(team))
}

/// POST /api/team/save
///
/// `members` may be a list or a comma-separated string.
pub async fn save(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SaveTeam>,
) -> AppResult<Json<Team>> {
    input.validate()?;

    let team = match input.id.as_deref() {
        None => TeamRepo::create(&state.pool, &input).await?,
        Some(raw_id) => {
            let id = parse_id(raw_id)?;
            TeamRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(|| not_found(id))?
        }
    };

    tracing::info!(
        team_id = team.id,
        members = team.members.len(),
        user_id = user.user_id,
        "Team saved",
    );
    Ok(Json(team))
}

/// POST /api/team/delete/{id}
pub async fn delete(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !TeamRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(team_id = id, user_id = user.user_id, "Team deleted");
    Ok(Json(json!({ "success": true })))
}
