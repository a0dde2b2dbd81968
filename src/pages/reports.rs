//! Reports screen: paginated table with type filter and the review dialog.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::layout::AdminLayout;
use crate::components::pagination::Pager;
use crate::net::http::Http;
use crate::net::types::{Report, ReportStatus, ReportType};
#[cfg(feature = "hydrate")]
use crate::state::PAGE_SIZE;
use crate::state::reports::ReportsState;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(ReportsState::default());
    let page = RwSignal::new(1_i64);
    // Report under review in the dialog, if any.
    let reviewing = RwSignal::new(None::<Report>);
    let review_status = RwSignal::new(ReportStatus::Pending);
    let review_notes = RwSignal::new(String::new());

    let reload = {
        let http = http.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    state.update(|s| s.begin_load());
                    let fetched =
                        crate::net::api::fetch_reports(&http, page.get_untracked(), PAGE_SIZE)
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

    let save_review = {
        let http = http.clone();
        Callback::new(move |()| {
            let Some(report) = reviewing.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                let status = review_status.get_untracked();
                let notes = review_notes.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_report_status(&http, report.id, status, &notes)
                        .await
                    {
                        Ok(_) => {
                            state.update(|s| s.apply_review(report.id, status, &notes));
                            reviewing.set(None);
                        }
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de mettre à jour le signalement.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, report);
        })
    };

    view! {
        <AdminLayout>
            <div class="reports-page">
                <header class="page-header">
                    <h1>"Signalements"</h1>
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
                                    s.kind = ReportType::parse(&event_target_value(&ev));
                                });
                            }
                        >
                            <option value="">"Tous les types"</option>
                            {ReportType::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! { <option value=kind.as_str()>{kind.label()}</option> }
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
                                <th>"Type"</th>
                                <th>"Motif"</th>
                                <th>"Signalé par"</th>
                                <th>"Cible"</th>
                                <th>"Statut"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .with(ReportsState::filtered)
                                    .into_iter()
                                    .map(|report| {
                                        let target = report.clone();
                                        let reported = report
                                            .reported_user_name
                                            .clone()
                                            .or_else(|| report.reported_provider_name.clone())
                                            .unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>{report.kind.label()}</td>
                                                <td>{report.reason.clone()}</td>
                                                <td>{report.reporter_name.clone().unwrap_or_default()}</td>
                                                <td>{reported}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        report.status.as_str(),
                                                    )>{report.status.label()}</span>
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            review_status.set(target.status);
                                                            review_notes.set(target.admin_notes.clone());
                                                            reviewing.set(Some(target.clone()));
                                                        }
                                                    >
                                                        "Examiner"
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
                    total_pages=Signal::derive(move || state.with(ReportsState::total_pages))
                />

                <Show when=move || reviewing.get().is_some()>
                    <ReviewDialog
                        status=review_status
                        notes=review_notes
                        on_cancel=Callback::new(move |()| reviewing.set(None))
                        on_save=save_review
                    />
                </Show>
            </div>
        </AdminLayout>
    }
}

/// Modal applying an admin review to one report.
#[component]
fn ReviewDialog(
    status: RwSignal<ReportStatus>,
    notes: RwSignal<String>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Examiner le signalement"</h2>
                <label class="dialog__label">
                    "Statut"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(parsed) = ReportStatus::parse(&event_target_value(&ev)) {
                                status.set(parsed);
                            }
                        }
                    >
                        {ReportStatus::ALL
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
                    "Notes administratives"
                    <textarea
                        class="dialog__input"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}
