#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use maintrack_api::auth::password::hash_password;
use maintrack_api::auth::session::{issue_token, SessionConfig, SESSION_COOKIE};
use maintrack_api::config::ServerConfig;
use maintrack_api::router::build_app_router;
use maintrack_api::state::AppState;
use maintrack_db::models::user::{CreateUser, User};
use maintrack_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "hunter2-but-longer";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            expiry_hours: 1,
            cookie_secure: false,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, name: &str, email: &str) -> User {
    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Create a user and return a `Cookie` header value carrying their session.
pub async fn session_cookie_for(pool: &PgPool) -> String {
    let user = create_user(pool, "Mitchell Admin", "admin@example.com").await;
    let token = issue_token(user.id, &user.name, &user.role, &test_config().session)
        .expect("token generation should succeed");
    format!("{SESSION_COOKIE}={token}")
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn builder(method: Method, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match cookie {
        Some(cookie) => builder.header(COOKIE, cookie),
        None => builder,
    }
}

/// GET without a session.
pub async fn get(app: Router, uri: &str) -> Response {
    get_with(app, uri, None).await
}

pub async fn get_with(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let request = builder(Method::GET, uri, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response {
    let request = builder(Method::POST, uri, cookie)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a urlencoded form body, as a browser would.
pub async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let request = builder(Method::POST, uri, cookie)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a raw body with an explicit content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response {
    let request = builder(Method::POST, uri, cookie)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect the response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}
