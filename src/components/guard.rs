//! Protected-route guard.
//!
//! Wraps every admin screen. While the session is still `Initializing` it
//! renders a placeholder and nothing else, so a refresh with a valid stored
//! session never flashes the login page. Once resolved, an unauthenticated
//! visitor is sent to `/login` with history replacement; an authenticated
//! one gets the wrapped content. Because the decision is derived from the
//! session signal, a mid-session invalidation (logout or a `401` from any
//! request) flips the guard and triggers the same redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, SessionHandle};

/// What the guard should render for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; hold rendering.
    Wait,
    RedirectToLogin,
    Render,
}

/// Pure decision table over the controller state.
pub fn decide(state: &AuthState) -> GuardDecision {
    if state.loading() {
        GuardDecision::Wait
    } else if state.user().is_some() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Route guard wrapping protected content.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    // Navigation is a side effect of the state transition, not of any HTTP
    // call. Replacement keeps Back from landing on a dead protected page.
    {
        let session = session.clone();
        let navigate = use_navigate();
        Effect::new(move || {
            if decide(&session.state()) == GuardDecision::RedirectToLogin {
                navigate(
                    "/login",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    move || match decide(&session.state()) {
        GuardDecision::Render => children().into_any(),
        // Wait and RedirectToLogin both hold content back; the effect above
        // owns the actual navigation.
        GuardDecision::Wait | GuardDecision::RedirectToLogin => view! {
            <div class="guard__loading">
                <p>"Chargement..."</p>
            </div>
        }
        .into_any(),
    }
}
