//! Persisted session store over the browser's localStorage.
//!
//! The token and the profile live under two keys but are written and cleared
//! together, and `read()` is all-or-nothing: a token without a parsable
//! profile (or the reverse) is treated as no session at all, and the partial
//! remnants are erased so the next read starts clean.
//!
//! Browser access is gated behind `#[cfg(feature = "hydrate")]`; native code
//! paths (tests, the SSR render pass) run against an in-memory map.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::UserProfile;

const TOKEN_KEY: &str = "angola_admin_token";
const USER_KEY: &str = "angola_admin_user";

/// A bearer token together with the profile it authenticates.
///
/// Invariant: the two only ever exist as a pair. There is no constructor for
/// a half-session, and the store never returns one.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Key/value persistence for the session, surviving page reloads.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    /// The browser's localStorage. Only reachable under `hydrate`.
    Browser,
    /// Plain map for native tests and server-side rendering.
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl Default for SessionStore {
    fn default() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { backend: Backend::Browser }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }
}

impl SessionStore {
    /// A store backed by a private in-memory map.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    /// Persist a fresh session, replacing whatever was there.
    ///
    /// The profile is serialized before either key is touched so a
    /// serialization failure cannot leave a token without a profile.
    pub fn save(&self, token: &str, user: &UserProfile) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.set(TOKEN_KEY, token);
        self.set(USER_KEY, &raw);
    }

    /// Erase both keys. Safe to call on an empty store.
    pub fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }

    /// Read the persisted session, if a complete one exists.
    ///
    /// Partial or malformed contents self-heal: both keys are cleared and
    /// `None` is returned.
    pub fn read(&self) -> Option<Session> {
        let token = self.get(TOKEN_KEY);
        let user = self
            .get(USER_KEY)
            .map(|raw| serde_json::from_str::<UserProfile>(&raw));

        match (token, user) {
            (Some(token), Some(Ok(user))) => Some(Session { token, user }),
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// The bearer token of the current complete session, if any.
    ///
    /// Goes through [`read`](Self::read) so a token orphaned by a corrupt
    /// profile is never handed out.
    pub fn token(&self) -> Option<String> {
        self.read().map(|s| s.token)
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Browser => browser_get(key),
            Backend::Memory(map) => map.lock().ok()?.get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match &self.backend {
            Backend::Browser => browser_set(key, value),
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.insert(key.to_owned(), value.to_owned());
                }
            }
        }
    }

    fn remove(&self, key: &str) {
        match &self.backend {
            Backend::Browser => browser_remove(key),
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.remove(key);
                }
            }
        }
    }
}

fn browser_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn browser_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn browser_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(test)]
impl SessionStore {
    /// Raw key write, bypassing the pair invariant. Test-only, used to
    /// simulate partial or corrupt persisted state.
    pub(crate) fn poke(&self, key: &str, value: &str) {
        self.set(key, value);
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}
