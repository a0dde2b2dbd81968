use super::*;

use leptos::prelude::Owner;

use crate::net::types::{Role, UserProfile};
use crate::session::store::SessionStore;
use crate::state::auth::SessionState;

fn profile(role: Role) -> UserProfile {
    UserProfile {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@x.com".to_owned(),
        role,
        is_verified: true,
        is_active: true,
        first_name: None,
        last_name: None,
        phone_number: None,
        profile_picture: None,
        bio: None,
        location: None,
        date_joined: None,
    }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn initializing_waits_instead_of_redirecting() {
    let state = AuthState::default();
    assert_eq!(decide(&state), GuardDecision::Wait);
}

#[test]
fn unauthenticated_redirects_to_login() {
    let state = AuthState {
        session: SessionState::Unauthenticated,
    };
    assert_eq!(decide(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn any_authenticated_user_renders() {
    for role in [Role::Admin, Role::Client, Role::Provider] {
        let state = AuthState {
            session: SessionState::Authenticated(profile(role)),
        };
        assert_eq!(decide(&state), GuardDecision::Render);
    }
}

// =============================================================
// Scenarios against the real handle
// =============================================================

#[test]
fn refresh_with_a_stored_session_never_shows_the_redirect() {
    let owner = Owner::new();
    owner.set();

    let store = SessionStore::in_memory();
    store.save("tok123", &profile(Role::Admin));
    let handle = SessionHandle::new(store);

    // Before hydration the guard holds.
    assert_eq!(decide(&handle.state()), GuardDecision::Wait);

    handle.hydrate();
    assert_eq!(decide(&handle.state()), GuardDecision::Render);
}

#[test]
fn forced_invalidation_flips_the_guard_to_redirect() {
    let owner = Owner::new();
    owner.set();

    let handle = SessionHandle::new(SessionStore::in_memory());
    handle.hydrate();
    handle.establish("tok123", profile(Role::Admin));
    assert_eq!(decide(&handle.state()), GuardDecision::Render);

    // What the 401 interceptor does. Firing twice changes nothing.
    handle.invalidate();
    handle.invalidate();
    assert_eq!(decide(&handle.state()), GuardDecision::RedirectToLogin);
}

#[test]
fn login_success_renders_and_persists_the_session() {
    let owner = Owner::new();
    owner.set();

    let handle = SessionHandle::new(SessionStore::in_memory());
    handle.hydrate();
    assert_eq!(decide(&handle.state()), GuardDecision::RedirectToLogin);

    handle.establish("tok123", profile(Role::Admin));
    assert_eq!(decide(&handle.state()), GuardDecision::Render);
    assert_eq!(handle.token(), Some("tok123".to_owned()));
    assert!(handle.is_admin());
}
