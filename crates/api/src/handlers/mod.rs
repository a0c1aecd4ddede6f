//! Request handlers.
//!
//! Each submodule provides the async handler functions for one area of the
//! application. Handlers delegate to the repositories in `maintrack_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod accounts;
pub mod categories;
pub mod dashboard;
pub mod equipment;
pub mod pages;
pub mod requests;
pub mod technicians;
pub mod teams;
pub mod users;
pub mod views;
pub mod work_centers;
