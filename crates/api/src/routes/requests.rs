//! Route definitions for the maintenance request lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{requests, views};
use crate::state::AppState;

/// Request routes, merged into the `/api` tree.
///
/// ```text
/// GET  /request/{id}            -> get_by_id
/// POST /request/save            -> save (create or full update)
/// POST /request/update          -> update_field (auto-save)
/// POST /request/update-stage    -> update_stage
/// POST /request/delete/{id}     -> delete
/// POST /kanban/move             -> update_stage
/// GET  /kanban                  -> kanban
/// GET  /calendar/events         -> calendar_events
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request/save", post(requests::save))
        .route("/request/update", post(requests::update_field))
        .route("/request/update-stage", post(requests::update_stage))
        .route("/request/delete/{id}", post(requests::delete))
        .route("/request/{id}", get(requests::get_by_id))
        .route("/kanban", get(views::kanban))
        .route("/kanban/move", post(requests::update_stage))
        .route("/calendar/events", get(views::calendar_events))
}
