//! Wire DTOs for the admin backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON payloads so serde
//! round-trips stay lossless. Every success response arrives wrapped in
//! the backend's `{ code, message, result }` envelope; the client unwraps
//! `result` and ignores the rest.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Processing state of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportState {
    /// Filed and awaiting an operator decision.
    Pending,
    /// An operator has submitted a disposition.
    Actioned,
}

impl ReportState {
    /// Display label used by the table and the detail modal.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "접수 완료",
            Self::Actioned => "처리 완료",
        }
    }
}

/// Moderation action applied to a reportee. A report with no action
/// (`null` on the wire) is the "ignore"/unset disposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportAction {
    /// Block the account from trading.
    Restricted,
    /// Dock the reportee's closet score.
    Docked,
    /// Temporary suspension.
    Suspended,
    /// Catch-all for action values this build does not know. Displayed
    /// but never offered for selection or submitted.
    #[serde(other)]
    Ignored,
}

impl ReportAction {
    /// The actions an operator can pick in the detail modal, in display
    /// order. `Ignored` is intentionally absent: clearing the selection
    /// is how a report is left un-actioned.
    pub const SELECTABLE: [Self; 3] = [Self::Restricted, Self::Docked, Self::Suspended];

    /// Display label used by the table and the action chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Restricted => "이용 제한",
            Self::Docked => "점수 삭감",
            Self::Suspended => "유예",
            Self::Ignored => "무시",
        }
    }
}

/// A user report, as served by both the report list and the report
/// detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report identifier.
    pub id: i64,
    /// Nickname of the user who filed the report.
    pub reporter_nickname: String,
    /// Email of the user who filed the report.
    pub reporter_email: String,
    /// Nickname of the reported user.
    pub reportee_nickname: String,
    /// Email of the reported user.
    pub reportee_email: String,
    /// Reason category chosen by the reporter.
    pub reason: String,
    /// Free-text description from the reporter.
    pub content: String,
    /// Reportee's closet (reputation) score.
    pub closet_score: i64,
    /// Processing state; flips to `Actioned` after a save.
    pub state: ReportState,
    /// Whether the reportee currently has an active rental.
    pub is_rented: bool,
    /// Reportee's chat session identifier, when one exists.
    #[serde(default)]
    pub user_sid: Option<String>,
    /// Disposition applied by an operator, `None` while unset/ignored.
    #[serde(default)]
    pub action: Option<ReportAction>,
}

/// One row of the member account table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    /// Legal name.
    pub name: String,
    /// Display nickname.
    pub nickname: String,
    /// Account email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Closet (reputation) score.
    pub closet_score: i64,
    /// Count of positive manner keywords received.
    pub positive_keyword_count: i64,
    /// Count of negative manner keywords received.
    pub negative_keyword_count: i64,
    /// Number of completed rentals.
    pub rental_count: i64,
    /// Account is restricted from trading.
    pub is_restricted: bool,
    /// Account is temporarily suspended.
    pub is_suspended: bool,
}

/// An active rental chat room, listed by the chat popup view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentedRoom {
    /// Chat room identifier.
    pub room_id: i64,
    /// Counterpart's nickname.
    pub nickname: String,
    /// Title of the listing the rental belongs to.
    pub post_title: String,
}

/// Backend success envelope. Only `result` is consumed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub result: T,
}

/// Payload of a successful operator login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: String,
}
