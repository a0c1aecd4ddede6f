//! User option list for assignment dropdowns.

use axum::extract::State;
use axum::Json;
use maintrack_db::models::user::UserOption;
use maintrack_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

/// GET /api/users
///
/// Never exposes emails or password hashes.
pub async fn list(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserOption>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserOption::from).collect()))
}
