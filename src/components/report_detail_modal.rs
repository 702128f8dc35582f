//! Moderation modal for one report's detail record.
//!
//! DESIGN
//! ======
//! The transition rules live in [`ReportModalState`]; this component is
//! the markup plus the two network round trips (save, chat-room lookup).
//! Failures are logged and the modal stays where it was so the operator
//! can retry.

use leptos::prelude::*;

use crate::components::state_box::StateBox;
use crate::net::types::{Report, ReportAction};
use crate::state::report_modal::ReportModalState;

/// Detail modal over an open [`ReportModalState`].
///
/// A successful save hands the patched record to `on_report_update` and
/// closes the modal; the caller reconciles its own list from the patch.
#[component]
pub fn ReportDetailModal(
    modal: RwSignal<ReportModalState>,
    #[prop(optional_no_strip)] on_report_update: Option<Callback<Report>>,
) -> impl IntoView {
    let on_close = move |_| modal.update(ReportModalState::close);

    let detail = move |pick: fn(&Report) -> String| {
        modal
            .get()
            .report
            .as_ref()
            .map(pick)
            .unwrap_or_default()
    };

    let chat_enabled = move || modal.get().chat_enabled();
    let has_session = move || modal.get().has_session();

    // Seed the popup's chat view, then open it fire-and-forget: the
    // parent keeps no handle to the new window.
    let on_chat = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(user_sid) = modal.get_untracked().chat_request() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_rented_rooms(&user_sid).await {
                    Ok(_) => crate::util::popup::open_chat_popup(&user_sid),
                    Err(e) => log::error!("rented rooms fetch failed for {user_sid}: {e}"),
                }
            });
        }
    };

    let on_save = move |_| {
        let Some((report_id, action)) = modal.get_untracked().save_request() else {
            return;
        };
        modal.update(ReportModalState::begin_save);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_report_action(report_id, action).await {
                Ok(()) => {
                    if let Some(patch) = modal.get_untracked().patch_for_save() {
                        if let Some(on_report_update) = on_report_update.as_ref() {
                            on_report_update.run(patch);
                        }
                    }
                    modal.update(ReportModalState::close);
                }
                Err(e) => {
                    log::error!("report action save failed for {report_id}: {e}");
                    modal.update(ReportModalState::save_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (report_id, action, on_report_update);
            modal.update(ReportModalState::save_failed);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--report" on:click=move |ev| ev.stop_propagation()>
                <h2>"신고 상세"</h2>

                <div class="dialog__row">
                    <span class="dialog__label">"신고자"</span>
                    <span class="dialog__value">
                        {move || detail(|r| r.reporter_nickname.clone())}
                        " ("
                        {move || detail(|r| r.reporter_email.clone())}
                        ")"
                    </span>
                </div>
                <div class="dialog__row">
                    <span class="dialog__label">"신고대상"</span>
                    <span class="dialog__value">
                        {move || detail(|r| r.reportee_nickname.clone())}
                        " ("
                        {move || detail(|r| r.reportee_email.clone())}
                        ")"
                    </span>
                </div>
                <div class="dialog__row">
                    <span class="dialog__label">"신고사유"</span>
                    <span class="dialog__value">{move || detail(|r| r.reason.clone())}</span>
                </div>
                <div class="dialog__row">
                    <span class="dialog__label">"내용"</span>
                    <span class="dialog__value">{move || detail(|r| r.content.clone())}</span>
                </div>
                <div class="dialog__row">
                    <span class="dialog__label">"옷장 점수"</span>
                    <span class="dialog__value">
                        {move || detail(|r| format!("{}점", r.closet_score))}
                    </span>
                </div>
                <div class="dialog__row">
                    <span class="dialog__label">"처리 상태"</span>
                    <span class="dialog__value">
                        {move || detail(|r| r.state.label().to_owned())}
                    </span>
                </div>
                <Show when=has_session>
                    <div class="dialog__row">
                        <span class="dialog__label">"채팅 내역"</span>
                        <button
                            class="btn dialog__chat"
                            disabled=move || !chat_enabled()
                            on:click=on_chat
                        >
                            "보기"
                        </button>
                    </div>
                </Show>

                <div class="dialog__actions-picker">
                    {ReportAction::SELECTABLE
                        .into_iter()
                        .map(|action| {
                            view! {
                                <StateBox
                                    text=action.label()
                                    check=Signal::derive(move || {
                                        modal.get().selected == Some(action)
                                    })
                                    on_click=Callback::new(move |()| {
                                        modal.update(|m| m.toggle(action));
                                    })
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "닫기"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !modal.get().save_enabled()
                        on:click=on_save
                    >
                        "적용하기"
                    </button>
                </div>
            </div>
        </div>
    }
}
