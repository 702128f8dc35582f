//! Top bar with the admin navigation tabs and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the report and member screens so tab highlighting and the
//! sign-out flow stay identical across routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthState, sign_out};

/// Top toolbar for the admin pages.
#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let on_report_tab = move || pathname.get() != "/user";

    let on_logout = move |_| {
        sign_out(auth);
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"Closet Admin"</span>
            <span class="toolbar__divider"></span>

            <a href="/report" class="toolbar__tab" class:toolbar__tab--active=on_report_tab>
                "신고 관리"
            </a>
            <a
                href="/user"
                class="toolbar__tab"
                class:toolbar__tab--active=move || !on_report_tab()
            >
                "회원 관리"
            </a>

            <span class="toolbar__spacer"></span>

            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "로그아웃"
            </button>
        </header>
    }
}
