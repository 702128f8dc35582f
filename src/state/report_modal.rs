//! Detail-modal state machine for report moderation.
//!
//! DESIGN
//! ======
//! The modal opens only once the detail fetch succeeds; a failed fetch
//! leaves it closed. A successful save produces an immutable patched
//! copy of the record for the caller's list and closes the modal, while
//! a failed save keeps the modal open with the selection intact so the
//! operator can retry.

#[cfg(test)]
#[path = "report_modal_test.rs"]
mod report_modal_test;

use crate::net::types::{Report, ReportAction, ReportState};

/// Detail-modal state: the open record, the picked action, and the
/// in-flight flags for the detail fetch and the save submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportModalState {
    pub open: bool,
    pub report: Option<Report>,
    pub selected: Option<ReportAction>,
    /// True while the row-click detail fetch is in flight.
    pub loading: bool,
    /// True while a save submit is in flight.
    pub saving: bool,
}

impl ReportModalState {
    /// Row clicked: the detail fetch starts, modal stays closed.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Detail arrived: open the modal seeded with the record's current
    /// action so the operator sees the standing disposition.
    pub fn open_with(&mut self, report: Report) {
        self.selected = report
            .action
            .filter(|action| ReportAction::SELECTABLE.contains(action));
        self.report = Some(report);
        self.open = true;
        self.loading = false;
        self.saving = false;
    }

    /// Detail fetch failed: the modal never opens.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Pick an action, or clear the selection by picking it again.
    pub fn toggle(&mut self, action: ReportAction) {
        if self.selected == Some(action) {
            self.selected = None;
        } else {
            self.selected = Some(action);
        }
    }

    /// Whether the save control is active. Disabled with no selection,
    /// when the selection matches the record's standing action, or while
    /// a save is already in flight.
    #[must_use]
    pub fn save_enabled(&self) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        if self.saving {
            return false;
        }
        self.report
            .as_ref()
            .is_some_and(|report| report.action != Some(selected))
    }

    /// The (report id, action) pair to submit, when saving is possible.
    #[must_use]
    pub fn save_request(&self) -> Option<(i64, ReportAction)> {
        if !self.save_enabled() {
            return None;
        }
        Some((self.report.as_ref()?.id, self.selected?))
    }

    /// The patched copy handed to the caller's list after a successful
    /// save: the open record with the state forced to actioned and the
    /// action set to the selection, everything else untouched.
    #[must_use]
    pub fn patch_for_save(&self) -> Option<Report> {
        let selected = self.selected?;
        let mut patched = self.report.clone()?;
        patched.state = ReportState::Actioned;
        patched.action = Some(selected);
        Some(patched)
    }

    /// Whether the open record carries a chat session to inspect; the
    /// chat control only renders when it does.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.report
            .as_ref()
            .is_some_and(|report| report.user_sid.is_some())
    }

    /// Whether the chat control is active: the reportee must currently
    /// have an active rental.
    #[must_use]
    pub fn chat_enabled(&self) -> bool {
        self.report
            .as_ref()
            .is_some_and(|report| report.is_rented)
    }

    /// The session id to open the chat popup for, when inspection is
    /// possible.
    #[must_use]
    pub fn chat_request(&self) -> Option<String> {
        let report = self.report.as_ref()?;
        if !report.is_rented {
            return None;
        }
        report.user_sid.clone()
    }

    /// Save submit started.
    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    /// Save failed: stay open, keep the selection for a retry.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }

    /// Close and forget the record, whether via the close control or a
    /// successful save.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
