//! HTTP middleware for the server.
//!
//! - [`session`] - tower-sessions layer backed by `PostgreSQL`
//! - [`auth`] - extractors gating admin mutations on a live session

pub mod auth;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
