//! Public account routes, mounted at the root.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// ```text
/// GET  /         -> home
/// POST /signup   -> signup
/// POST /login    -> login
/// GET  /logout   -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(accounts::home))
        .route("/signup", post(accounts::signup))
        .route("/login", post(accounts::login))
        .route("/logout", get(accounts::logout))
}
