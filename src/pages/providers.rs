//! Providers screen: paginated table with search, verified filter, and the
//! verify/unverify toggle.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::layout::AdminLayout;
use crate::components::pagination::Pager;
use crate::net::http::Http;
use crate::net::types::Provider;
#[cfg(feature = "hydrate")]
use crate::state::PAGE_SIZE;
use crate::state::providers::{ProvidersState, VerifiedFilter};

#[component]
pub fn ProvidersPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(ProvidersState::default());
    let page = RwSignal::new(1_i64);

    let reload = {
        let http = http.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    state.update(|s| s.begin_load());
                    let fetched =
                        crate::net::api::fetch_providers(&http, page.get_untracked(), PAGE_SIZE)
                            .await;
                    match fetched {
                        Ok(env) => state.update(|s| s.loaded(env)),
                        Err(_) => state.update(|s| s.load_failed()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &http;
        })
    };

    Effect::new(move || {
        page.track();
        reload.run(());
    });

    let toggle_verified = {
        let http = http.clone();
        Callback::new(move |provider: Provider| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                let next = !provider.is_verified;
                leptos::task::spawn_local(async move {
                    match crate::net::api::set_provider_verified(&http, provider.id, next).await {
                        Ok(()) => state.update(|s| s.set_verified(provider.id, next)),
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de changer le statut du prestataire.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, provider);
        })
    };

    view! {
        <AdminLayout>
            <div class="providers-page">
                <header class="page-header">
                    <h1>"Prestataires"</h1>
                    <div class="page-header__filters">
                        <input
                            class="page-header__search"
                            type="search"
                            placeholder="Rechercher..."
                            prop:value=move || state.with(|s| s.search.clone())
                            on:input=move |ev| {
                                state.update(|s| s.search = event_target_value(&ev));
                            }
                        />
                        <select
                            class="page-header__select"
                            on:change=move |ev| {
                                state.update(|s| {
                                    s.verified = match event_target_value(&ev).as_str() {
                                        "verified" => VerifiedFilter::Verified,
                                        "unverified" => VerifiedFilter::Unverified,
                                        _ => VerifiedFilter::All,
                                    };
                                });
                            }
                        >
                            <option value="all">"Tous"</option>
                            <option value="verified">"Vérifiés"</option>
                            <option value="unverified">"Non vérifiés"</option>
                        </select>
                    </div>
                </header>

                <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="page-loading">"Chargement..."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Nom"</th>
                                <th>"Entreprise"</th>
                                <th>"Note"</th>
                                <th>"Score de confiance"</th>
                                <th>"Vérifié"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .with(ProvidersState::filtered)
                                    .into_iter()
                                    .map(|provider| {
                                        let target = provider.clone();
                                        view! {
                                            <tr>
                                                <td>{provider.display_name().to_owned()}</td>
                                                <td>{provider.company_name.clone().unwrap_or_default()}</td>
                                                <td>{format!("{:.1}", provider.avg_rating)}</td>
                                                <td>{format!("{:.1}", provider.trust_score)}</td>
                                                <td>{if provider.is_verified { "Oui" } else { "Non" }}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| toggle_verified.run(target.clone())
                                                    >
                                                        {if provider.is_verified { "Retirer la vérification" } else { "Vérifier" }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>

                <Pager
                    page=page
                    total_pages=Signal::derive(move || state.with(ProvidersState::total_pages))
                />
            </div>
        </AdminLayout>
    }
}
