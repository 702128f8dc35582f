//! Auth-session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself persists in `localStorage`; this state is the
//! in-memory projection. The redirect guard and sign-out flow live here
//! so every authenticated route behaves identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::token;

/// Authentication state tracking the operator token and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    /// True until the stored token has been read on startup. Guards
    /// against redirecting to `/login` before the check completes.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Resolve the startup check with whatever token was stored.
    pub fn resolved(token: Option<String>) -> Self {
        Self {
            token,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Redirect to `/login` whenever the startup token check has resolved
/// and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.token.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Drop the stored token and reset the session; the redirect effect on
/// the current page then sends the operator back to `/login`.
pub fn sign_out(auth: RwSignal<AuthState>) {
    token::clear_token();
    auth.set(AuthState::resolved(None));
}
