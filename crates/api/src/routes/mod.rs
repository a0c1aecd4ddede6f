pub mod accounts;
pub mod health;
pub mod pages;
pub mod registries;
pub mod requests;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree. Every route requires a session and answers
/// 401 JSON without one.
///
/// Route hierarchy:
///
/// ```text
/// /equipment-data                         dashboard payload (GET)
///
/// /request/...                            request lifecycle (see routes::requests)
/// /kanban, /kanban/move                   kanban board, stage move
/// /calendar/events                        scheduled requests
///
/// /equipment, /equipment/...              equipment registry
/// /teams, /team/...                       team registry
/// /work-centers, /work-center/...         work center registry
/// /categories, /category/...              category registry, quick-add
/// /technicians, /technician/...           technician registry
/// /users                                  user options
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/equipment-data", get(handlers::dashboard::equipment_data))
        .merge(requests::router())
        .merge(registries::router())
}
