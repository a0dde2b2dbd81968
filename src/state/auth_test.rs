use super::*;

use crate::session::store::SessionStore;

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
// Initial state and hydration
// =============================================================

#[test]
fn default_state_is_initializing_and_loading() {
    let state = AuthState::default();
    assert_eq!(state.session, SessionState::Initializing);
    assert!(state.loading());
    assert!(state.user().is_none());
}

#[test]
fn resolve_with_persisted_session_authenticates() {
    let store = SessionStore::in_memory();
    store.save("tok123", &profile(Role::Admin));

    let mut state = AuthState::default();
    state.resolve(store.read());

    assert!(!state.loading());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
}

#[test]
fn resolve_with_empty_store_is_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(None);

    assert!(!state.loading());
    assert_eq!(state.session, SessionState::Unauthenticated);
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn establish_writes_store_and_memory_together() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    state.resolve(None);

    establish(&mut state, &store, "tok123", profile(Role::Admin));

    let persisted = store.read().expect("persisted session");
    assert_eq!(persisted.token, "tok123");
    assert_eq!(state.user(), Some(&persisted.user));
    assert!(state.is_admin());
}

#[test]
fn invalidate_clears_store_and_memory_together() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    establish(&mut state, &store, "tok123", profile(Role::Admin));

    invalidate(&mut state, &store);

    assert_eq!(store.read(), None);
    assert_eq!(state.session, SessionState::Unauthenticated);
}

#[test]
fn invalidate_twice_matches_invalidate_once() {
    let store = SessionStore::in_memory();
    let mut state = AuthState::default();
    establish(&mut state, &store, "tok123", profile(Role::Client));

    invalidate(&mut state, &store);
    let after_first = (store.read(), state.clone());
    invalidate(&mut state, &store);

    assert_eq!(store.read(), after_first.0);
    assert_eq!(state, after_first.1);
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn is_admin_only_for_authenticated_admin_role() {
    let mut state = AuthState::default();
    assert!(!state.is_admin());

    state.resolve(None);
    assert!(!state.is_admin());

    state.session = SessionState::Authenticated(profile(Role::Client));
    assert!(!state.is_admin());

    state.session = SessionState::Authenticated(profile(Role::Admin));
    assert!(state.is_admin());
}

// =============================================================
// Reactive handle
// =============================================================

#[test]
fn handle_hydrate_resolves_from_the_store() {
    let owner = Owner::new();
    owner.set();

    let store = SessionStore::in_memory();
    store.save("tok123", &profile(Role::Admin));

    let handle = SessionHandle::new(store);
    assert!(handle.auth.get_untracked().loading());

    handle.hydrate();
    let state = handle.auth.get_untracked();
    assert!(!state.loading());
    assert!(state.is_admin());
}

#[test]
fn handle_forced_invalidation_is_seen_by_both_sides() {
    let owner = Owner::new();
    owner.set();

    let store = SessionStore::in_memory();
    let handle = SessionHandle::new(store);
    handle.hydrate();
    handle.establish("tok123", profile(Role::Admin));

    // What the 401 interceptor calls.
    handle.invalidate();

    assert_eq!(handle.token(), None);
    assert_eq!(
        handle.auth.get_untracked().session,
        SessionState::Unauthenticated
    );
}

#[test]
fn handle_logout_is_idempotent() {
    let owner = Owner::new();
    owner.set();

    let store = SessionStore::in_memory();
    let handle = SessionHandle::new(store);
    handle.hydrate();
    handle.establish("tok123", profile(Role::Client));

    handle.logout();
    handle.logout();

    assert_eq!(handle.token(), None);
    assert_eq!(
        handle.auth.get_untracked().session,
        SessionState::Unauthenticated
    );
}
