//! Login page: email/password form posting to the auth endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::ErrorBanner;
use crate::net::http::Http;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthResult;
use crate::state::auth::SessionHandle;

/// Login screen. An already-authenticated visitor is sent straight to the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let http = expect_context::<Http>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    {
        let session = session.clone();
        let navigate = use_navigate();
        Effect::new(move || {
            let state = session.state();
            if !state.loading() && state.user().is_some() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        let secret = password.get_untracked();
        if address.trim().is_empty() || secret.is_empty() {
            error.set("Veuillez saisir votre email et votre mot de passe.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let http = http.clone();
            let navigate = navigate.clone();
            pending.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&http, address.trim(), &secret).await {
                    AuthResult::Success(_) => {
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    AuthResult::Failure { message } => {
                        error.set(message);
                        pending.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&http, address, secret);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Angola Admin"</h1>
                <p class="login-page__subtitle">"Console d'administration"</p>

                <ErrorBanner message=error/>

                <form
                    class="login-page__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="login-page__label">
                        "Email"
                        <input
                            class="login-page__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-page__label">
                        "Mot de passe"
                        <input
                            class="login-page__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
