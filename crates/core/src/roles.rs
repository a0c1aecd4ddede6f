//! Well-known role name constants.
//!
//! Must match the column default in `20260101000001_create_users.sql`.

/// Role assigned to every self-registered account.
pub const ROLE_USER: &str = "user";
