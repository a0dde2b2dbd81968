//! Disputes screens: the paginated list and the per-dispute detail view
//! where the status gets updated.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::banner::ErrorBanner;
use crate::components::layout::AdminLayout;
use crate::components::pagination::Pager;
use crate::net::http::Http;
use crate::net::types::{Dispute, DisputeStatus};
#[cfg(feature = "hydrate")]
use crate::state::PAGE_SIZE;
use crate::state::disputes::DisputesState;

#[component]
pub fn DisputesPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(DisputesState::default());
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
                        crate::net::api::fetch_disputes(&http, page.get_untracked(), PAGE_SIZE)
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

    view! {
        <AdminLayout>
            <div class="disputes-page">
                <header class="page-header">
                    <h1>"Litiges"</h1>
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
                                    s.status = DisputeStatus::parse(&event_target_value(&ev));
                                });
                            }
                        >
                            <option value="">"Tous les statuts"</option>
                            {DisputeStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! { <option value=status.as_str()>{status.label()}</option> }
                                })
                                .collect::<Vec<_>>()}
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
                                <th>"Titre"</th>
                                <th>"Client"</th>
                                <th>"Prestataire"</th>
                                <th>"Statut"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .with(DisputesState::filtered)
                                    .into_iter()
                                    .map(|dispute| {
                                        view! {
                                            <tr>
                                                <td>{dispute.title.clone()}</td>
                                                <td>{dispute.client_name.clone().unwrap_or_default()}</td>
                                                <td>{dispute.provider_name.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        dispute.status.as_str(),
                                                    )>{dispute.status.label()}</span>
                                                </td>
                                                <td class="data-table__actions">
                                                    <a class="btn btn--small" href=format!("/disputes/{}", dispute.id)>
                                                        "Détails"
                                                    </a>
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
                    total_pages=Signal::derive(move || state.with(DisputesState::total_pages))
                />
            </div>
        </AdminLayout>
    }
}

/// Detail view for one dispute, with the status update form.
#[component]
pub fn DisputeDetailPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let params = use_params_map();

    let dispute = RwSignal::new(None::<Dispute>);
    let error = RwSignal::new(String::new());
    let status = RwSignal::new(DisputeStatus::Open);
    let note = RwSignal::new(String::new());

    let dispute_id =
        move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    {
        let http = http.clone();
        Effect::new(move || {
            let Some(id) = dispute_id() else {
                error.set("Litige introuvable.".to_owned());
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_dispute(&http, id).await {
                        Ok(found) => {
                            status.set(found.status);
                            note.set(found.resolution_note.clone());
                            dispute.set(Some(found));
                        }
                        Err(_) => error.set("Impossible de charger le litige.".to_owned()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, id);
        });
    }

    let save = {
        let http = http.clone();
        Callback::new(move |()| {
            let Some(id) = dispute_id() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                let next = status.get_untracked();
                let resolution = note.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_dispute_status(&http, id, next, &resolution).await
                    {
                        Ok(updated) => {
                            dispute.set(Some(updated));
                            error.set(String::new());
                        }
                        Err(_) => error.set("Impossible de mettre à jour le litige.".to_owned()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, id);
        })
    };

    view! {
        <AdminLayout>
            <div class="dispute-detail">
                <a class="dispute-detail__back" href="/disputes">
                    "← Retour aux litiges"
                </a>

                <ErrorBanner message=error/>

                <Show
                    when=move || dispute.get().is_some()
                    fallback=|| view! { <p class="page-loading">"Chargement..."</p> }
                >
                    {move || {
                        dispute
                            .get()
                            .map(|d| {
                                view! {
                                    <div class="dispute-detail__card">
                                        <h1>{d.title.clone()}</h1>
                                        <p class="dispute-detail__description">{d.description.clone()}</p>
                                        <dl class="dispute-detail__facts">
                                            <dt>"Client"</dt>
                                            <dd>{d.client_name.clone().unwrap_or_default()}</dd>
                                            <dt>"Prestataire"</dt>
                                            <dd>{d.provider_name.clone().unwrap_or_default()}</dd>
                                            <dt>"Service"</dt>
                                            <dd>{d.service_title.clone().unwrap_or_default()}</dd>
                                            <dt>"Statut"</dt>
                                            <dd>{d.status.label()}</dd>
                                            <dt>"Note de résolution"</dt>
                                            <dd>{d.resolution_note.clone()}</dd>
                                        </dl>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <div class="dispute-detail__form">
                    <h2>"Mettre à jour le statut"</h2>
                    <label class="dialog__label">
                        "Statut"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                if let Some(parsed) = DisputeStatus::parse(&event_target_value(&ev)) {
                                    status.set(parsed);
                                }
                            }
                        >
                            {DisputeStatus::ALL
                                .into_iter()
                                .map(|candidate| {
                                    view! {
                                        <option
                                            value=candidate.as_str()
                                            selected=move || status.get() == candidate
                                        >
                                            {candidate.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Note de résolution"
                        <textarea
                            class="dialog__input"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" on:click=move |_| save.run(())>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </AdminLayout>
    }
}
