//! Request-scoped session context.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use maintrack_core::error::CoreError;
use maintrack_core::types::DbId;

use crate::auth::session::{token_from_headers, validate_token};
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user, as recorded in the session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: DbId,
    /// Display name, recorded as the employee on new requests.
    pub name: String,
    pub role: String,
}

/// Session state of the current request.
///
/// A missing, malformed or expired token all mean "no session".
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: Option<SessionUser>,
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionContext {
            user: session_user(parts, state),
        })
    }
}

fn session_user(parts: &Parts, state: &AppState) -> Option<SessionUser> {
    let token = token_from_headers(&parts.headers)?;
    match validate_token(&token, &state.config.session) {
        Ok(claims) => Some(SessionUser {
            user_id: claims.sub,
            name: claims.name,
            role: claims.role,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session token");
            None
        }
    }
}

/// Requires a session on an API route. Rejects with 401
/// `{"error": "Unauthorized"}` otherwise.
///
/// ```ignore
/// async fn my_handler(RequireSession(user): RequireSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSession(pub SessionUser);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_user(parts, state).map(RequireSession).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("No valid session".into()))
        })
    }
}

/// Requires a session on a page route. Redirects to `/` otherwise.
pub struct RequirePageSession(pub SessionUser);

impl FromRequestParts<AppState> for RequirePageSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_user(parts, state)
            .map(RequirePageSession)
            .ok_or_else(|| Redirect::to("/"))
    }
}
