//! Selectable chip used by the report modal's action picker.

use leptos::prelude::*;

/// One mutually exclusive action choice. Purely presentational: the
/// parent owns the selection and re-runs `check` on every change.
#[component]
pub fn StateBox(
    text: &'static str,
    #[prop(into)] check: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="state-box"
            class:state-box--checked=move || check.get()
            on:click=move |_| on_click.run(())
        >
            {text}
        </button>
    }
}
