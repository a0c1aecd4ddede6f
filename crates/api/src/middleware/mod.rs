//! Session extractors.
//!
//! - [`session::SessionContext`] -- The optional signed-in user; never rejects.
//! - [`session::RequireSession`] -- API routes; rejects with 401 JSON.
//! - [`session::RequirePageSession`] -- Page routes; redirects to `/`.

pub mod session;
