//! Report-list state for the moderation table.
//!
//! DESIGN
//! ======
//! The detail modal never mutates the list directly. A successful save
//! produces a patched `Report` value and the list is rebuilt through
//! [`apply_report_patch`], so reconciliation stays a pure function of
//! (old list, patch) and the table needs no refetch.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::types::Report;

/// Shared report inventory backed by the admin REST API.
#[derive(Clone, Debug, Default)]
pub struct ReportsState {
    pub items: Vec<Report>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Rebuild a report list with one record replaced by its patched copy.
///
/// Rows whose id differs from the patch are carried over untouched and
/// order is preserved. A patch whose id matches nothing leaves the list
/// identical; it never appends.
pub fn apply_report_patch(items: &[Report], patch: &Report) -> Vec<Report> {
    items
        .iter()
        .map(|item| {
            if item.id == patch.id {
                patch.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}
