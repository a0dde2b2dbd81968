//! Admin chrome: sidebar navigation and top bar around every screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionHandle;

const NAV_LINKS: [(&str, &str); 7] = [
    ("/dashboard", "Tableau de bord"),
    ("/users", "Utilisateurs"),
    ("/providers", "Prestataires"),
    ("/categories", "Catégories"),
    ("/disputes", "Litiges"),
    ("/reports", "Signalements"),
    ("/settings", "Paramètres"),
];

/// Sidebar plus top bar wrapping a screen's content.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let user_name = {
        let session = session.clone();
        move || {
            session
                .state()
                .user()
                .map(crate::net::types::UserProfile::display_name)
                .unwrap_or_default()
        }
    };
    let user_initial = {
        let session = session.clone();
        move || {
            session
                .state()
                .user()
                .map_or_else(|| "U".to_owned(), crate::net::types::UserProfile::initial)
        }
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <div class="admin-layout__brand">"Angola Admin"</div>
                <nav class="admin-layout__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a class="admin-layout__link" href=href>
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="admin-layout__main">
                <header class="admin-layout__topbar">
                    <div class="admin-layout__user">
                        <span class="admin-layout__avatar">{user_initial}</span>
                        <span class="admin-layout__name">{user_name}</span>
                    </div>
                    <button class="btn admin-layout__logout" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </header>
                <main class="admin-layout__content">{children()}</main>
            </div>
        </div>
    }
}
