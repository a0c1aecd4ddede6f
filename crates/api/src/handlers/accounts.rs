//! Handlers for signup, login, logout and the landing page.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use maintrack_db::models::user::CreateUser;
use maintrack_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{issue_token, removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::middleware::session::SessionContext;
use crate::state::AppState;

const MSG_PASSWORD_MISMATCH: &str = "Error: Passwords do not match!";
const MSG_EMAIL_TAKEN: &str = "Error: Email already exists!";
const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub retype_password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn rejected(status: StatusCode, message: &str) -> AppError {
    AppError::FormRejected {
        status,
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// Signed-in users go straight to the dashboard.
pub async fn home(session: SessionContext) -> Response {
    match session.user {
        Some(_) => Redirect::to("/dashboard").into_response(),
        None => "Maintenance management. Sign up or log in to continue.".into_response(),
    }
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<SignupForm>,
) -> AppResult<impl IntoResponse> {
    if input.password != input.retype_password {
        return Err(rejected(StatusCode::BAD_REQUEST, MSG_PASSWORD_MISMATCH));
    }
    if UserRepo::email_exists(&state.pool, &input.email).await? {
        return Err(rejected(StatusCode::BAD_REQUEST, MSG_EMAIL_TAKEN));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let created = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await;

    let user = match created {
        Ok(user) => user,
        // A concurrent signup won the race for this email.
        Err(sqlx::Error::Database(e)) if e.constraint() == Some("uq_users_email") => {
            return Err(rejected(StatusCode::BAD_REQUEST, MSG_EMAIL_TAKEN));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "User signed up");
    Ok("Signup successful. You can now log in.")
}

/// POST /login
///
/// Sets the session cookie and redirects to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<LoginForm>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| rejected(StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected");
        return Err(rejected(StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS));
    }

    let token = issue_token(user.id, &user.name, &user.role, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(token, &state.config.session);

    tracing::info!(user_id = user.id, "User logged in");
    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Redirect::to("/dashboard"),
    ))
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, session: SessionContext) -> impl IntoResponse {
    if let Some(user) = session.user {
        tracing::info!(user_id = user.user_id, "User logged out");
    }
    let cookie = removal_cookie(&state.config.session);
    ([(SET_COOKIE, cookie.to_string())], Redirect::to("/"))
}
