//! Authentication status as reported by the surrounding application.

use dioxus::prelude::*;

use super::session::TokenSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
}

impl AuthState {
    /// A stored session token is treated as a signed-in user.
    pub fn from_token_source(tokens: &TokenSource) -> Self {
        Self {
            is_authenticated: tokens.current_token().is_some(),
        }
    }
}

/// Reads the `Signal<AuthState>` provided by the launcher. Without a provider
/// the user is treated as signed out.
pub fn use_auth() -> bool {
    try_use_context::<Signal<AuthState>>()
        .map(|state| state().is_authenticated)
        .unwrap_or(false)
}
