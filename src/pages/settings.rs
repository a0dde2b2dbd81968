//! Settings screen: tabbed local forms for profile, password, and
//! notification preferences.

use leptos::prelude::*;

use crate::components::banner::{ErrorBanner, SuccessBanner};
use crate::components::layout::AdminLayout;
use crate::state::auth::SessionHandle;
use crate::state::settings::{SettingsState, SettingsTab};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let state = RwSignal::new(SettingsState::default());

    // Pre-fill the profile form from the session once it is available.
    Effect::new(move || {
        if let Some(user) = session.state().user() {
            let user = user.clone();
            state.update(|s| s.prefill(&user));
        }
    });

    let tab_button = move |tab: SettingsTab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if state.with(|s| s.tab == tab) {
                        "tabs__button tabs__button--active"
                    } else {
                        "tabs__button"
                    }
                }
                on:click=move |_| state.update(|s| s.select_tab(tab))
            >
                {label}
            </button>
        }
    };

    view! {
        <AdminLayout>
            <div class="settings-page">
                <header class="page-header">
                    <h1>"Paramètres"</h1>
                </header>

                <div class="tabs">
                    {tab_button(SettingsTab::Profile, "Profil")}
                    {tab_button(SettingsTab::Password, "Mot de passe")}
                    {tab_button(SettingsTab::Notifications, "Notifications")}
                </div>

                <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>
                <SuccessBanner message=Signal::derive(move || state.with(|s| s.success.clone()))/>

                <Show when=move || state.with(|s| s.tab == SettingsTab::Profile)>
                    <form
                        class="settings-page__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.saved("Profil mis à jour avec succès"));
                        }
                    >
                        <label class="dialog__label">
                            "Prénom"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || state.with(|s| s.profile.first_name.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.profile.first_name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Nom"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || state.with(|s| s.profile.last_name.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.profile.last_name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                prop:value=move || state.with(|s| s.profile.email.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.profile.email = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Téléphone"
                            <input
                                class="dialog__input"
                                type="tel"
                                prop:value=move || state.with(|s| s.profile.phone_number.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.profile.phone_number = event_target_value(&ev));
                                }
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Enregistrer"
                        </button>
                    </form>
                </Show>

                <Show when=move || state.with(|s| s.tab == SettingsTab::Password)>
                    <form
                        class="settings-page__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.save_password());
                        }
                    >
                        <label class="dialog__label">
                            "Mot de passe actuel"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || state.with(|s| s.password.current.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.password.current = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Nouveau mot de passe"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || state.with(|s| s.password.new.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.password.new = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Confirmer le mot de passe"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || state.with(|s| s.password.confirm.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.password.confirm = event_target_value(&ev));
                                }
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Mettre à jour"
                        </button>
                    </form>
                </Show>

                <Show when=move || state.with(|s| s.tab == SettingsTab::Notifications)>
                    <form
                        class="settings-page__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.saved("Préférences enregistrées"));
                        }
                    >
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.notifications.email_new_dispute)
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.notifications.email_new_dispute = event_target_checked(&ev);
                                    });
                                }
                            />
                            "Email pour chaque nouveau litige"
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.notifications.email_new_report)
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.notifications.email_new_report = event_target_checked(&ev);
                                    });
                                }
                            />
                            "Email pour chaque nouveau signalement"
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.notifications.email_new_provider)
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.notifications.email_new_provider = event_target_checked(&ev);
                                    });
                                }
                            />
                            "Email pour chaque nouveau prestataire"
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.notifications.weekly_summary)
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.notifications.weekly_summary = event_target_checked(&ev);
                                    });
                                }
                            />
                            "Résumé hebdomadaire"
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Enregistrer"
                        </button>
                    </form>
                </Show>
            </div>
        </AdminLayout>
    }
}
