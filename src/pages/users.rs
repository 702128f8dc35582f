//! Member account page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::record_table::{RecordTable, TableRows};
use crate::components::toolbar::Toolbar;
use crate::state::auth::{AuthState, install_unauth_redirect};
use crate::state::users::UsersState;

/// Member table page at `/user`. Read-only: user rows open no modal.
#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let users = RwSignal::new(UsersState {
        loading: true,
        ..UsersState::default()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(items) => users.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => {
                log::error!("user list fetch failed: {e}");
                users.update(|s| {
                    s.loading = false;
                    s.error = Some("회원 목록을 불러오지 못했습니다.".to_owned());
                });
            }
        }
    });

    view! {
        <div class="admin-page admin-page--users">
            <Toolbar/>
            <Show when=move || users.get().error.is_some()>
                <p class="admin-page__error">{move || users.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !users.get().loading
                fallback=move || view! { <p class="admin-page__loading">"불러오는 중..."</p> }
            >
                {move || view! { <RecordTable rows=TableRows::Users(users.get().items)/> }}
            </Show>
        </div>
    }
}
