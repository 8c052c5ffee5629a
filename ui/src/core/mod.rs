//! Platform-agnostic helpers shared by the views.

pub mod auth;
pub mod format;
pub mod session;
