//! Page routes, mounted at the root. Without a session they redirect to `/`.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /dashboard   -> dashboard
/// GET /equipment   -> equipment
/// GET /teams       -> teams
/// GET /calendar    -> calendar (preventive requests)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/equipment", get(pages::equipment))
        .route("/teams", get(pages::teams))
        .route("/calendar", get(pages::calendar))
}
