//! Dashboard: derived statistics over the first pages of users, providers,
//! and disputes.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::layout::AdminLayout;
use crate::net::http::Http;
use crate::state::dashboard::DashboardState;
#[cfg(feature = "hydrate")]
use crate::state::dashboard::{derive_stats, today};

/// How many rows each backing fetch pulls for the derivation.
#[cfg(feature = "hydrate")]
const SAMPLE_SIZE: i64 = 100;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(DashboardState::default());

    {
        let http = http.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    state.update(|s| s.begin_load());
                    let users = crate::net::api::fetch_users(&http, 1, SAMPLE_SIZE).await;
                    let providers = crate::net::api::fetch_providers(&http, 1, SAMPLE_SIZE).await;
                    let disputes = crate::net::api::fetch_disputes(&http, 1, SAMPLE_SIZE).await;
                    match (users, providers, disputes) {
                        (Ok(users), Ok(providers), Ok(disputes)) => {
                            let stats = derive_stats(
                                &users.results,
                                &providers.results,
                                &disputes.results,
                                today(),
                            );
                            state.update(|s| s.loaded(stats));
                        }
                        _ => state.update(|s| s.load_failed()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &http;
        });
    }

    view! {
        <AdminLayout>
            <div class="dashboard-page">
                <header class="page-header">
                    <h1>"Tableau de bord"</h1>
                </header>

                <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="page-loading">"Chargement..."</p> }
                >
                    <div class="dashboard-page__cards">
                        <StatCard
                            label="Utilisateurs"
                            value=Signal::derive(move || state.with(|s| s.stats.total_users))
                        />
                        <StatCard
                            label="Prestataires"
                            value=Signal::derive(move || state.with(|s| s.stats.total_providers))
                        />
                        <StatCard
                            label="Litiges"
                            value=Signal::derive(move || state.with(|s| s.stats.total_disputes))
                        />
                        <StatCard
                            label="Nouveaux ce mois-ci"
                            value=Signal::derive(move || state.with(|s| s.stats.new_users_this_month))
                        />
                    </div>

                    <div class="dashboard-page__charts">
                        <section class="chart-card">
                            <h2>"Inscriptions (6 derniers mois)"</h2>
                            <div class="chart-card__bars">
                                {move || {
                                    let chart = state.with(|s| s.stats.registrations_by_month.clone());
                                    let peak = chart.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
                                    chart
                                        .into_iter()
                                        .map(|(label, count)| {
                                            let height = count * 100 / peak;
                                            view! {
                                                <div class="chart-card__column">
                                                    <div
                                                        class="chart-card__bar"
                                                        style=format!("height: {height}%")
                                                        title=count.to_string()
                                                    ></div>
                                                    <span class="chart-card__label">{label}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </section>

                        <section class="chart-card">
                            <h2>"Litiges par statut"</h2>
                            <ul class="chart-card__legend">
                                {move || {
                                    state
                                        .with(|s| s.stats.disputes_by_status.clone())
                                        .into_iter()
                                        .map(|(status, count)| {
                                            view! {
                                                <li class="chart-card__legend-row">
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        status.as_str(),
                                                    )>{status.label()}</span>
                                                    <span>{count}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </div>

                    <div class="dashboard-page__tables">
                        <section class="table-card">
                            <h2>"Litiges récents"</h2>
                            <ul>
                                {move || {
                                    state
                                        .with(|s| s.stats.recent_disputes.clone())
                                        .into_iter()
                                        .map(|dispute| {
                                            view! {
                                                <li>
                                                    <a href=format!("/disputes/{}", dispute.id)>
                                                        {dispute.title.clone()}
                                                    </a>
                                                    <span class="table-card__meta">{dispute.status.label()}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>

                        <section class="table-card">
                            <h2>"Dernières inscriptions"</h2>
                            <ul>
                                {move || {
                                    state
                                        .with(|s| s.stats.latest_registrations.clone())
                                        .into_iter()
                                        .map(|user| {
                                            view! {
                                                <li>
                                                    <span>{user.display_name()}</span>
                                                    <span class="table-card__meta">{user.email.clone()}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </section>
                    </div>
                </Show>
            </div>
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
