//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` save DTO accepted from forms and JSON, validated with
//!   `validator` where values are bounded

pub mod category;
pub mod equipment;
pub mod request;
pub mod team;
pub mod technician;
pub mod user;
pub mod work_center;
