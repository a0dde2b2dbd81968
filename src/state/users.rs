//! Users screen state: paginated rows, client-side search, optimistic
//! patches after mutations.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Paginated, UserProfile, UserUpdate};
use crate::state::{matches, matches_opt, total_pages};

#[derive(Clone, Debug)]
pub struct UsersState {
    pub items: Vec<UserProfile>,
    pub count: i64,
    pub loading: bool,
    pub error: String,
    pub search: String,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: true,
            error: String::new(),
            search: String::new(),
        }
    }
}

impl UsersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, env: Paginated<UserProfile>) {
        self.items = env.results;
        self.count = env.count;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les utilisateurs. Veuillez réessayer.".to_owned();
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.count)
    }

    /// Rows of the current page matching the search box, in fetch order.
    /// Matches username, email, names, and phone, like the original screen.
    pub fn filtered(&self) -> Vec<UserProfile> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || matches(&u.username, &needle)
                    || matches(&u.email, &needle)
                    || matches_opt(u.first_name.as_deref(), &needle)
                    || matches_opt(u.last_name.as_deref(), &needle)
                    || matches_opt(u.phone_number.as_deref(), &needle)
            })
            .cloned()
            .collect()
    }

    /// Merge a saved edit form into the matching row.
    pub fn patch(&mut self, id: i64, form: &UserUpdate) {
        if let Some(user) = self.items.iter_mut().find(|u| u.id == id) {
            user.first_name = Some(form.first_name.clone());
            user.last_name = Some(form.last_name.clone());
            user.email = form.email.clone();
            user.phone_number = Some(form.phone_number.clone());
            user.role = form.role;
            user.is_verified = form.is_verified;
            user.is_active = form.is_active;
        }
    }

    pub fn toggle_active(&mut self, id: i64) {
        if let Some(user) = self.items.iter_mut().find(|u| u.id == id) {
            user.is_active = !user.is_active;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.items.retain(|u| u.id != id);
        self.count = (self.count - 1).max(0);
    }

    pub fn action_failed(&mut self, message: &str) {
        self.error = message.to_owned();
    }
}
