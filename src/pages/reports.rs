//! Report moderation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches the report inventory once on
//! mount and reconciles it from the patched record the detail modal
//! hands back after a successful save, so no refetch is needed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::record_table::{RecordTable, TableRows};
use crate::components::toolbar::Toolbar;
use crate::net::types::Report;
use crate::state::auth::{AuthState, install_unauth_redirect};
use crate::state::reports::{ReportsState, apply_report_patch};

/// Report table page at `/report`.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let reports = RwSignal::new(ReportsState {
        loading: true,
        ..ReportsState::default()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_reports().await {
            Ok(items) => reports.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => {
                log::error!("report list fetch failed: {e}");
                reports.update(|s| {
                    s.loading = false;
                    s.error = Some("신고 목록을 불러오지 못했습니다.".to_owned());
                });
            }
        }
    });

    let on_report_update = Callback::new(move |patch: Report| {
        reports.update(|s| s.items = apply_report_patch(&s.items, &patch));
    });

    view! {
        <div class="admin-page admin-page--reports">
            <Toolbar/>
            <Show when=move || reports.get().error.is_some()>
                <p class="admin-page__error">{move || reports.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !reports.get().loading
                fallback=move || view! { <p class="admin-page__loading">"불러오는 중..."</p> }
            >
                {move || {
                    view! {
                        <RecordTable
                            rows=TableRows::Reports(reports.get().items)
                            on_report_update=on_report_update
                        />
                    }
                }}
            </Show>
        </div>
    }
}
