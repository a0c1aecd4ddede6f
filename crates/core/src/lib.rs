//! Domain types and pure logic for maintenance management.
//!
//! Nothing in this crate performs I/O. The database crate maps rows onto
//! these types and the API crate turns [`error::CoreError`] into responses.

pub mod calendar;
pub mod equipment;
pub mod error;
pub mod field_patch;
pub mod form_input;
pub mod ids;
pub mod kanban;
pub mod kpi;
pub mod request;
pub mod roles;
pub mod stage;
pub mod types;
