//! Auth session controller: the canonical answer to "is someone logged in".
//!
//! The lifecycle is a three-state machine. The client boots in
//! `Initializing`, reads the persisted store exactly once, and resolves to
//! `Authenticated` or `Unauthenticated`; after that, only `login`, `logout`
//! and the HTTP layer's 401 handler may move it, and the latter two funnel
//! through the same transition so the store and the in-memory state can
//! never disagree.
//!
//! Transitions are plain functions over [`AuthState`] so they run in native
//! tests; [`SessionHandle`] is the thin reactive wrapper handed to
//! components via context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserProfile};
use crate::session::store::{Session, SessionStore};

/// Lifecycle of the client session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// The persisted store has not been read yet. Guards must block
    /// rendering, not merely hide it.
    #[default]
    Initializing,
    Authenticated(UserProfile),
    Unauthenticated,
}

/// Controller state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: SessionState,
}

impl AuthState {
    /// True until the initial store read has resolved. Flips exactly once.
    pub fn loading(&self) -> bool {
        matches!(self.session, SessionState::Initializing)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.session {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True iff authenticated as an admin.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.role == Role::Admin)
    }

    /// Resolve the initial state from whatever the store held at boot.
    pub fn resolve(&mut self, persisted: Option<Session>) {
        self.session = match persisted {
            Some(session) => SessionState::Authenticated(session.user),
            None => SessionState::Unauthenticated,
        };
    }

    fn set_authenticated(&mut self, user: UserProfile) {
        self.session = SessionState::Authenticated(user);
    }

    fn drop_user(&mut self) {
        self.session = SessionState::Unauthenticated;
    }
}

/// Discriminated result of a login attempt. Callers branch on the variant;
/// nothing throws past the controller boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthResult {
    Success(UserProfile),
    Failure { message: String },
}

/// Persist and adopt a fresh session: store first, then memory, so a crash
/// between the two leaves a complete session on disk rather than a torn one.
pub fn establish(state: &mut AuthState, store: &SessionStore, token: &str, user: UserProfile) {
    store.save(token, &user);
    state.set_authenticated(user);
}

/// Drop the session everywhere. Both user-initiated logout and the 401
/// handler land here; calling it on an already-absent session is a no-op.
pub fn invalidate(state: &mut AuthState, store: &SessionStore) {
    store.clear();
    state.drop_user();
}

/// Shared handle wiring the reactive controller state to the persisted
/// store. Cheap to clone; provided once via context at the app root.
#[derive(Clone)]
pub struct SessionHandle {
    pub auth: RwSignal<AuthState>,
    store: SessionStore,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            store,
        }
    }

    /// Read the persisted session once at boot and leave `Initializing`.
    pub fn hydrate(&self) {
        let persisted = self.store.read();
        self.auth.update(|a| a.resolve(persisted));
    }

    /// Adopt a session returned by the login endpoint.
    pub fn establish(&self, token: &str, user: UserProfile) {
        let store = self.store.clone();
        self.auth.update(|a| establish(a, &store, token, user));
    }

    /// User-initiated logout. Idempotent.
    pub fn logout(&self) {
        self.invalidate();
    }

    /// Forced invalidation, used by the HTTP 401 handler. Same transition
    /// as `logout`, safe under concurrent firing.
    pub fn invalidate(&self) {
        let store = self.store.clone();
        self.auth.update(|a| invalidate(a, &store));
    }

    /// Reactive read of the whole controller state.
    pub fn state(&self) -> AuthState {
        self.auth.get()
    }

    pub fn is_admin(&self) -> bool {
        self.auth.get().is_admin()
    }

    /// Token for the outgoing request interceptor. Reads the store, not the
    /// signal, so it reflects exactly what is persisted.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }
}
