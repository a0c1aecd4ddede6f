//! Read-only calendar and kanban projections over maintenance requests.

use axum::extract::State;
use axum::Json;
use maintrack_core::calendar::{event_color, event_end};
use maintrack_core::kanban::{partition, KanbanBoard};
use maintrack_db::models::request::{MaintenanceRequest, RequestResponse};
use maintrack_db::repositories::RequestRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::requests::project_all;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

/// One calendar entry.
#[derive(Debug, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    /// Absent when the duration cannot be read as a length of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub color: &'static str,
    pub stage: String,
    #[serde(rename = "type")]
    pub maintenance_type: String,
}

impl CalendarEvent {
    /// Build the event for a scheduled request; `None` when unscheduled.
    fn from_request(row: MaintenanceRequest) -> Option<Self> {
        let start = row.scheduled_date?;
        let color = event_color(row.status_color(), row.maintenance_type());
        Some(Self {
            id: row.id.to_string(),
            title: row.subject,
            start: start.to_rfc3339(),
            end: event_end(&start, &row.duration).map(|end| end.to_rfc3339()),
            color,
            stage: row.stage,
            maintenance_type: row.maintenance_type,
        })
    }
}

/// GET /api/calendar/events
pub async fn calendar_events(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let rows = RequestRepo::list_scheduled(&state.pool).await?;
    Ok(Json(
        rows.into_iter()
            .filter_map(CalendarEvent::from_request)
            .collect(),
    ))
}

/// GET /api/kanban
///
/// Requests whose stage is not one of the four columns are left off the
/// board and counted in `unplaced_count`.
pub async fn kanban(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<KanbanBoard<RequestResponse>>> {
    let requests = project_all(RequestRepo::list(&state.pool).await?)?;
    let board = partition(requests, |r| r.stage.as_str());

    if board.unplaced_count > 0 {
        tracing::warn!(
            unplaced = board.unplaced_count,
            "Requests with a non-canonical stage left off the kanban board",
        );
    }

    Ok(Json(board))
}
