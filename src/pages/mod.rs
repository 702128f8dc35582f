//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth guard, list fetch,
//! list reconciliation) and delegates rendering details to `components`.

pub mod chat;
pub mod login;
pub mod reports;
pub mod users;
