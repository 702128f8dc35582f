//! Member-account list state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::UserRow;

/// Shared member inventory backed by the admin REST API.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<UserRow>,
    pub loading: bool,
    pub error: Option<String>,
}
