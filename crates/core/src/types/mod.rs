//! Core types for Rekhali.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod phone;
pub mod slug;

pub use email::{Email, EmailError};
pub use id::*;
pub use phone::WhatsAppNumber;
pub use slug::{Slug, SlugError};
