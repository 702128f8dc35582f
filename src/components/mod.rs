//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the moderation surfaces (listing cards, record
//! tables, the report detail modal) while pages own fetching and shared
//! state. Display rules live in pure helpers next to each component.

pub mod post_card;
pub mod record_table;
pub mod report_detail_modal;
pub mod state_box;
pub mod toolbar;
