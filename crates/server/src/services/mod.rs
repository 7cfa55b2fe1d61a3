//! Application services.
//!
//! Services wrap repositories with business rules (credential checks,
//! message formatting). They hold no state beyond borrowed handles.

pub mod auth;
pub mod whatsapp;

pub use auth::{AdminAuthService, AuthError};
