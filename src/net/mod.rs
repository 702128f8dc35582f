//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the authenticated HTTP calls and `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
