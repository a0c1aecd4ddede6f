//! Session tokens carried in an HttpOnly cookie.
//!
//! A successful login issues an HS256-signed JWT holding the user's id,
//! display name and role. Browsers send it back in the `session` cookie;
//! API clients may send it as a `Bearer` token instead.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use maintrack_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "session";

/// Default session lifetime in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 12;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Display name, recorded as the creator of new requests.
    pub name: String,
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Session signing and cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 12).
    pub expiry_hours: i64,
    /// Whether the cookie carries the `Secure` attribute (default: false).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SESSION_SECRET`        | **yes**  | --      |
    /// | `SESSION_EXPIRY_HOURS`  | no       | `12`    |
    /// | `SESSION_COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            secret,
            expiry_hours,
            cookie_secure,
        }
    }
}

/// Issue a signed session token for the given user.
pub fn issue_token(
    user_id: DbId,
    name: &str,
    role: &str,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        name: name.to_string(),
        role: role.to_string(),
        exp: now + config.expiry_hours * 3600,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &SessionConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Build the cookie that carries a freshly issued token.
///
/// The cookie has no explicit expiry; the token inside it does.
pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_secure(config.cookie_secure);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie
}

/// Build a cookie that makes the browser drop the session.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}

/// Find the session token in a request's headers.
///
/// A `Bearer` token in `Authorization` wins over the cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(token.trim().to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|raw| {
            let cookie = Cookie::parse(raw.trim()).ok()?;
            (cookie.name() == SESSION_COOKIE && !cookie.value().is_empty())
                .then(|| cookie.value().to_owned())
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;
    use jsonwebtoken::errors::ErrorKind;

    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 12,
            cookie_secure: false,
        }
    }

    #[test]
    fn test_issue_and_validate_token() {
        let config = test_config();
        let token = issue_token(42, "Mitchell Admin", "user", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.name, "Mitchell Admin");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, 12 * 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            name: "Old".to_string(),
            role: "user".to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert_matches!(
            validate_token(&token, &config).map_err(|e| e.into_kind()),
            Err(ErrorKind::ExpiredSignature)
        );
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = test_config();
        let config_b = SessionConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        };
        let token = issue_token(1, "A", "user", &config_a).unwrap();
        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), &test_config()).to_string();
        assert!(cookie.starts_with("session=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));

        let removal = removal_cookie(&test_config()).to_string();
        assert!(removal.contains("Max-Age=0"));
    }

    #[test]
    fn test_token_read_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; session=tok123"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("tok123"));
    }

    #[test]
    fn test_bearer_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=from-cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_missing_or_empty_cookie_means_no_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);
        headers.insert(COOKIE, HeaderValue::from_static("session="));
        assert_eq!(token_from_headers(&headers), None);
    }
}
