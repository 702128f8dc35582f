//! Chat-history view, opened by the report modal as a small popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The popup is fire-and-forget: the opener passes only `userSid` in the
//! query string and keeps no handle to this window, so the page fetches
//! the user's active rental rooms itself.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::{AuthState, install_unauth_redirect};
use crate::state::chat::ChatState;

/// Rental chat-room list at `/chat?userSid={sid}`.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let query = use_query_map();
    let user_sid = move || query.read().get("userSid");

    let chat = RwSignal::new(ChatState::default());

    // One fetch per page load; the sid never changes within a popup.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(sid) = user_sid() else {
            return;
        };
        requested.set(true);
        chat.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_rented_rooms(&sid).await {
                Ok(rooms) => chat.update(|s| {
                    s.rooms = rooms;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => {
                    log::error!("rented rooms fetch failed for {sid}: {e}");
                    chat.update(|s| {
                        s.loading = false;
                        s.error = Some("채팅 목록을 불러오지 못했습니다.".to_owned());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = sid;
            chat.update(|s| s.loading = false);
        }
    });

    view! {
        <div class="chat-page">
            <h1 class="chat-page__title">"거래 중인 채팅"</h1>
            <Show
                when=move || user_sid().is_some()
                fallback=move || view! { <p class="chat-page__empty">"잘못된 접근입니다."</p> }
            >
                <Show when=move || chat.get().error.is_some()>
                    <p class="chat-page__error">{move || chat.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !chat.get().loading
                    fallback=move || view! { <p class="chat-page__loading">"불러오는 중..."</p> }
                >
                    <Show
                        when=move || !chat.get().rooms.is_empty()
                        fallback=move || {
                            view! { <p class="chat-page__empty">"채팅 내역이 없습니다."</p> }
                        }
                    >
                        <ul class="chat-page__rooms">
                            {move || {
                                chat.get()
                                    .rooms
                                    .into_iter()
                                    .map(|room| {
                                        view! {
                                            <li class="chat-page__room">
                                                <span class="chat-page__room-nickname">
                                                    {room.nickname}
                                                </span>
                                                <span class="chat-page__room-title">
                                                    {room.post_title}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
