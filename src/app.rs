//! Root application component with routing, context providers, and the
//! one-time session hydration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::net::http::Http;
use crate::pages::{
    categories::CategoriesPage,
    dashboard::DashboardPage,
    disputes::{DisputeDetailPage, DisputesPage},
    login::LoginPage,
    not_found::NotFoundPage,
    providers::ProvidersPage,
    reports::ReportsPage,
    settings::SettingsPage,
    users::UsersPage,
};
use crate::session::store::SessionStore;
use crate::state::auth::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
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
/// Provides the session handle and HTTP client contexts, hydrates the
/// persisted session exactly once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(SessionStore::default());
    let http = Http::new(session.clone());
    provide_context(session.clone());
    provide_context(http);

    // One-time boot: resolve Initializing from whatever the store holds.
    Effect::new(move || {
        if session.state().loading() {
            session.hydrate();
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/angola-admin.css"/>
        <Title text="Angola Admin"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Redirect path="/dashboard"/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <RequireAuth><UsersPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("providers")
                    view=|| view! { <RequireAuth><ProvidersPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("categories")
                    view=|| view! { <RequireAuth><CategoriesPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("disputes")
                    view=|| view! { <RequireAuth><DisputesPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("disputes"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><DisputeDetailPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("reports")
                    view=|| view! { <RequireAuth><ReportsPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
