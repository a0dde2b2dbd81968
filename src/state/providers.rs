//! Providers screen state: search plus a verified/unverified filter, and
//! the verify toggle's optimistic patch.

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use crate::net::types::{Paginated, Provider};
use crate::state::{matches_opt, total_pages};

/// The verified dropdown above the providers table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifiedFilter {
    #[default]
    All,
    Verified,
    Unverified,
}

impl VerifiedFilter {
    fn accepts(self, provider: &Provider) -> bool {
        match self {
            VerifiedFilter::All => true,
            VerifiedFilter::Verified => provider.is_verified,
            VerifiedFilter::Unverified => !provider.is_verified,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProvidersState {
    pub items: Vec<Provider>,
    pub count: i64,
    pub loading: bool,
    pub error: String,
    pub search: String,
    pub verified: VerifiedFilter,
}

impl Default for ProvidersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: true,
            error: String::new(),
            search: String::new(),
            verified: VerifiedFilter::All,
        }
    }
}

impl ProvidersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, env: Paginated<Provider>) {
        self.items = env.results;
        self.count = env.count;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les prestataires. Veuillez réessayer.".to_owned();
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.count)
    }

    /// Search over full name, company, and username, intersected with the
    /// verified filter.
    pub fn filtered(&self) -> Vec<Provider> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|p| {
                let text = needle.is_empty()
                    || matches_opt(p.full_name.as_deref(), &needle)
                    || matches_opt(p.company_name.as_deref(), &needle)
                    || matches_opt(p.username.as_deref(), &needle);
                text && self.verified.accepts(p)
            })
            .cloned()
            .collect()
    }

    pub fn set_verified(&mut self, id: i64, is_verified: bool) {
        if let Some(provider) = self.items.iter_mut().find(|p| p.id == id) {
            provider.is_verified = is_verified;
        }
    }

    pub fn action_failed(&mut self, message: &str) {
        self.error = message.to_owned();
    }
}
