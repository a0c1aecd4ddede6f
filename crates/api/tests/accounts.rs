//! HTTP-level tests for signup, login, logout and the session gate.

mod common;

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use common::{body_json, body_text, create_user, get, get_with, post_form, TEST_PASSWORD};
use maintrack_db::repositories::UserRepo;
use sqlx::PgPool;

fn header<'a>(response: &'a axum::response::Response, name: axum::http::HeaderName) -> &'a str {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_creates_user_with_default_role(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/signup",
        "name=Aka+Foster&email=aka%40example.com&password=pw1&retype_password=pw1",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Signup successful"));

    let user = UserRepo::find_by_email(&pool, "aka@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.name, "Aka Foster");
    assert_eq!(user.role, "user");
    assert_ne!(user.password_hash, "pw1", "password must be stored hashed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_mismatched_passwords(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/signup",
        "name=A&email=a%40example.com&password=one&retype_password=two",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(header(&response, axum::http::header::CONTENT_TYPE).starts_with("text/plain"));
    assert_eq!(body_text(response).await, "Error: Passwords do not match!");
    assert!(!UserRepo::email_exists(&pool, "a@example.com").await.unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_existing_email(pool: PgPool) {
    create_user(&pool, "First", "taken@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/signup",
        "name=Second&email=taken%40example.com&password=x&retype_password=x",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Error: Email already exists!");
}

// ---------------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_sets_session_cookie_and_redirects(pool: PgPool) {
    create_user(&pool, "Marc Demo", "marc@example.com").await;
    let app = common::build_test_app(pool);

    let body = format!("email=marc%40example.com&password={TEST_PASSWORD}");
    let response = post_form(app.clone(), "/login", &body, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, LOCATION), "/dashboard");
    let set_cookie = header(&response, SET_COOKIE).to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));

    // The cookie opens the dashboard.
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    let response = get_with(app, "/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Marc Demo");
    assert_eq!(json["active_page"], "dashboard");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_rejected(pool: PgPool) {
    create_user(&pool, "Marc Demo", "marc@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app.clone(),
        "/login",
        "email=marc%40example.com&password=wrong",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid credentials");

    let response = post_form(app, "/login", "email=nobody%40example.com&password=x", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid credentials");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_clears_cookie(pool: PgPool) {
    let cookie = common::session_cookie_for(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_with(app, "/logout", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, LOCATION), "/");
    let set_cookie = header(&response, SET_COOKIE);
    assert!(set_cookie.starts_with("session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pages_redirect_to_landing_without_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    for page in ["/dashboard", "/equipment", "/teams", "/calendar"] {
        let response = get(app.clone(), page).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{page}");
        assert_eq!(header(&response, LOCATION), "/", "{page}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn api_rejects_missing_or_forged_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/equipment-data").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["code"], "UNAUTHORIZED");

    let response = get_with(app, "/api/kanban", Some("session=not-a-token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_redirects_signed_in_users(pool: PgPool) {
    let cookie = common::session_cookie_for(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_with(app.clone(), "/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, LOCATION), "/dashboard");

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}
