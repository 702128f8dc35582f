//! Client-side state models for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own one `RwSignal` per state struct and provide it to their
//! components; keeping the structs plain data with pure transitions makes
//! moderation flows testable without a browser.

pub mod auth;
pub mod chat;
pub mod report_modal;
pub mod reports;
pub mod users;
