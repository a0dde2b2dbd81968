//! Outcome banners shown above tables and forms.

use leptos::prelude::*;

/// Red banner, visible while the message is non-empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="banner banner--error" role="alert">
                {move || message.get()}
            </div>
        </Show>
    }
}

/// Green banner, visible while the message is non-empty.
#[component]
pub fn SuccessBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="banner banner--success" role="status">
                {move || message.get()}
            </div>
        </Show>
    }
}
