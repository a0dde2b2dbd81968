//! Users screen: paginated table with search, edit, activate/deactivate,
//! and delete.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::layout::AdminLayout;
use crate::components::pagination::Pager;
use crate::net::http::Http;
use crate::net::types::{Role, UserProfile, UserUpdate};
#[cfg(feature = "hydrate")]
use crate::state::PAGE_SIZE;
use crate::state::users::UsersState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(UsersState::default());
    let page = RwSignal::new(1_i64);
    // Row being edited, if any.
    let editing = RwSignal::new(None::<UserProfile>);
    let form = RwSignal::new(UserUpdate::default());
    let deleting = RwSignal::new(None::<UserProfile>);

    let reload = {
        let http = http.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    state.update(|s| s.begin_load());
                    let fetched =
                        crate::net::api::fetch_users(&http, page.get_untracked(), PAGE_SIZE).await;
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

    // Refetch whenever the page changes, including the initial mount.
    Effect::new(move || {
        page.track();
        reload.run(());
    });

    let save_edit = {
        let http = http.clone();
        Callback::new(move |()| {
            let Some(user) = editing.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                let body = form.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_user(&http, user.id, &body).await {
                        Ok(_) => {
                            state.update(|s| s.patch(user.id, &body));
                            editing.set(None);
                        }
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de mettre à jour l'utilisateur.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, user);
        })
    };

    let toggle_active = {
        let http = http.clone();
        Callback::new(move |user: UserProfile| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::set_user_active(&http, user.id, !user.is_active).await {
                        Ok(()) => state.update(|s| s.toggle_active(user.id)),
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de changer le statut de l'utilisateur.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, user);
        })
    };

    let confirm_delete = {
        let http = http.clone();
        Callback::new(move |()| {
            let Some(user) = deleting.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_user(&http, user.id).await {
                        Ok(()) => {
                            state.update(|s| s.remove(user.id));
                            deleting.set(None);
                        }
                        Err(_) => {
                            state.update(|s| {
                                s.action_failed("Impossible de supprimer l'utilisateur.");
                            });
                            deleting.set(None);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, user);
        })
    };

    view! {
        <AdminLayout>
            <div class="users-page">
                <header class="page-header">
                    <h1>"Utilisateurs"</h1>
                    <input
                        class="page-header__search"
                        type="search"
                        placeholder="Rechercher..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            state.update(|s| s.search = event_target_value(&ev));
                        }
                    />
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
                                <th>"Email"</th>
                                <th>"Rôle"</th>
                                <th>"Vérifié"</th>
                                <th>"Actif"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .with(UsersState::filtered)
                                    .into_iter()
                                    .map(|user| {
                                        let edit_target = user.clone();
                                        let toggle_target = user.clone();
                                        let delete_target = user.clone();
                                        view! {
                                            <tr>
                                                <td>{user.display_name()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{user.role.label()}</td>
                                                <td>{if user.is_verified { "Oui" } else { "Non" }}</td>
                                                <td>{if user.is_active { "Actif" } else { "Inactif" }}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            form.set(UserUpdate::from_profile(&edit_target));
                                                            editing.set(Some(edit_target.clone()));
                                                        }
                                                    >
                                                        "Modifier"
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| toggle_active.run(toggle_target.clone())
                                                    >
                                                        {if user.is_active { "Désactiver" } else { "Activer" }}
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| deleting.set(Some(delete_target.clone()))
                                                    >
                                                        "Supprimer"
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
                    total_pages=Signal::derive(move || state.with(UsersState::total_pages))
                />

                <Show when=move || editing.get().is_some()>
                    <EditUserDialog
                        form=form
                        on_cancel=Callback::new(move |()| editing.set(None))
                        on_save=save_edit
                    />
                </Show>

                <Show when=move || deleting.get().is_some()>
                    <DeleteUserDialog
                        name=Signal::derive(move || {
                            deleting.get().map(|u| u.display_name()).unwrap_or_default()
                        })
                        on_cancel=Callback::new(move |()| deleting.set(None))
                        on_confirm=confirm_delete
                    />
                </Show>
            </div>
        </AdminLayout>
    }
}

/// Modal editing one user row.
#[component]
fn EditUserDialog(
    form: RwSignal<UserUpdate>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Modifier l'utilisateur"</h2>
                <label class="dialog__label">
                    "Prénom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Téléphone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || form.with(|f| f.phone_number.clone())
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Rôle"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            form.update(|f| {
                                f.role = match event_target_value(&ev).as_str() {
                                    "admin" => Role::Admin,
                                    "provider" => Role::Provider,
                                    _ => Role::Client,
                                };
                            });
                        }
                    >
                        <option value="client" selected=move || form.with(|f| f.role == Role::Client)>
                            "Client"
                        </option>
                        <option value="provider" selected=move || form.with(|f| f.role == Role::Provider)>
                            "Prestataire"
                        </option>
                        <option value="admin" selected=move || form.with(|f| f.role == Role::Admin)>
                            "Admin"
                        </option>
                    </select>
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_verified)
                        on:change=move |ev| form.update(|f| f.is_verified = event_target_checked(&ev))
                    />
                    "Vérifié"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "Actif"
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

/// Confirmation modal before a destructive delete.
#[component]
fn DeleteUserDialog(
    #[prop(into)] name: Signal<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Supprimer l'utilisateur"</h2>
                <p>
                    {move || {
                        format!(
                            "Voulez-vous vraiment supprimer {} ? Cette action est irréversible.",
                            name.get(),
                        )
                    }}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Supprimer"
                    </button>
                </div>
            </div>
        </div>
    }
}
