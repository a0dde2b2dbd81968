//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Cette page n'existe pas."</p>
            <a class="btn" href="/dashboard">
                "Retour au tableau de bord"
            </a>
        </div>
    }
}
