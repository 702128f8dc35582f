//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, login::LoginPage, reports::ReportsPage, users::UsersPage};
use crate::state::auth::AuthState;
use crate::util::token;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The
/// persisted operator token is resolved once on the client; pages hold
/// their redirects until that check completes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    Effect::new(move || {
        if auth.get_untracked().loading {
            auth.set(AuthState::resolved(token::read_token()));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/closet-admin.css"/>
        <Title text="Closet Admin"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("report") view=ReportsPage/>
                <Route path=StaticSegment("user") view=UsersPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=StaticSegment("") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
