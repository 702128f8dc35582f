//! Record table for the report and member admin screens.
//!
//! DESIGN
//! ======
//! The caller hands over a tagged union of rows; the column set is fixed
//! per variant rather than derived from the data, so matching stays
//! exhaustive and no cell access is untyped. Report rows open the detail
//! modal on activation; member rows are inert. All cell formatting is
//! done in pure helpers.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;

use crate::components::report_detail_modal::ReportDetailModal;
use crate::net::types::{Report, ReportAction, UserRow};
use crate::state::report_modal::ReportModalState;

/// Placeholder rendered instead of a table when there are no rows.
pub const EMPTY_TEXT: &str = "결과가 없습니다.";

/// Report table header, fixed at eight columns.
pub const REPORT_COLUMNS: [&str; 8] = [
    "번호",
    "신고대상 ID",
    "신고사유",
    "내용",
    "옷장 점수",
    "처리 상태",
    "거래 중 여부",
    "상태 변경",
];

/// Member table header, fixed at eight columns.
pub const USER_COLUMNS: [&str; 8] = [
    "이름",
    "닉네임",
    "이메일",
    "전화번호",
    "옷장 점수",
    "매너 키워드 횟수 (긍정 / 부정)",
    "거래 건수",
    "이용제한",
];

/// The rows a table renders, tagged by record kind.
#[derive(Clone, Debug, PartialEq)]
pub enum TableRows {
    Reports(Vec<Report>),
    Users(Vec<UserRow>),
}

impl TableRows {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Reports(reports) => reports.is_empty(),
            Self::Users(users) => users.is_empty(),
        }
    }
}

/// Closet-score cell.
pub fn score_label(score: i64) -> String {
    format!("{score}점")
}

/// Active-rental cell.
pub fn rented_label(is_rented: bool) -> &'static str {
    if is_rented { "거래 중" } else { "-" }
}

/// Disposition cell; an unset action invites the operator to pick one.
pub fn action_label(action: Option<ReportAction>) -> &'static str {
    match action {
        None => "조치 선택",
        Some(action) => action.label(),
    }
}

/// Manner keyword tally cell, positive first.
pub fn keyword_tally(positive: i64, negative: i64) -> String {
    format!("{positive} / {negative}")
}

/// Account standing cell; restriction outranks suspension.
pub fn standing_label(is_restricted: bool, is_suspended: bool) -> &'static str {
    if is_restricted {
        "제한됨"
    } else if is_suspended {
        "유예"
    } else {
        "정상"
    }
}

/// Table over report or member rows.
///
/// Clicking a report row fetches its detail and opens the moderation
/// modal; a failed fetch is logged and leaves the row inert. After a
/// successful save the patched record is handed to `on_report_update`
/// so the caller can reconcile its own list without refetching.
#[component]
pub fn RecordTable(
    rows: TableRows,
    #[prop(optional)] on_report_update: Option<Callback<Report>>,
) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="record-table__empty">{EMPTY_TEXT}</p> }.into_any();
    }

    match rows {
        TableRows::Reports(reports) => {
            view! { <ReportTable reports=reports on_report_update=on_report_update/> }.into_any()
        }
        TableRows::Users(users) => view! { <UserTable users=users/> }.into_any(),
    }
}

#[component]
fn ReportTable(
    reports: Vec<Report>,
    #[prop(optional_no_strip)] on_report_update: Option<Callback<Report>>,
) -> impl IntoView {
    let modal = RwSignal::new(ReportModalState::default());

    // Lazy, uncached: every activation re-fetches the detail record.
    let on_row_click = move |report_id: i64| {
        modal.update(ReportModalState::begin_fetch);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_report_detail(report_id).await {
                Ok(detail) => modal.update(|m| m.open_with(detail)),
                Err(e) => {
                    log::error!("report detail fetch failed for {report_id}: {e}");
                    modal.update(ReportModalState::fetch_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = report_id;
            modal.update(ReportModalState::fetch_failed);
        }
    };

    view! {
        <table class="record-table record-table--reports">
            <thead>
                <tr>
                    {REPORT_COLUMNS
                        .into_iter()
                        .map(|column| view! { <th>{column}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {reports
                    .into_iter()
                    .map(|report| {
                        let report_id = report.id;
                        view! {
                            <tr
                                class="record-table__row record-table__row--activatable"
                                on:click=move |_| on_row_click(report_id)
                            >
                                <td>{report.id}</td>
                                <td>{report.reportee_nickname}</td>
                                <td>{report.reason}</td>
                                <td class="record-table__cell--content">{report.content}</td>
                                <td>{score_label(report.closet_score)}</td>
                                <td>{report.state.label()}</td>
                                <td>{rented_label(report.is_rented)}</td>
                                <td>
                                    <button class="record-table__action">
                                        {action_label(report.action)}
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
        <Show when=move || modal.get().open>
            <ReportDetailModal modal=modal on_report_update=on_report_update/>
        </Show>
    }
}

#[component]
fn UserTable(users: Vec<UserRow>) -> impl IntoView {
    view! {
        <table class="record-table record-table--users">
            <thead>
                <tr>
                    {USER_COLUMNS
                        .into_iter()
                        .map(|column| view! { <th>{column}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        view! {
                            <tr class="record-table__row">
                                <td>{user.name}</td>
                                <td>{user.nickname}</td>
                                <td>{user.email}</td>
                                <td>{user.phone_number}</td>
                                <td>{score_label(user.closet_score)}</td>
                                <td>
                                    {keyword_tally(
                                        user.positive_keyword_count,
                                        user.negative_keyword_count,
                                    )}
                                </td>
                                <td>{user.rental_count}</td>
                                <td>{standing_label(user.is_restricted, user.is_suspended)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
