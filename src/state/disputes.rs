//! Disputes screen state: status filter, search, and the status-update
//! patch shared by the list and the detail view.

#[cfg(test)]
#[path = "disputes_test.rs"]
mod disputes_test;

use crate::net::types::{Dispute, DisputeStatus, Paginated};
use crate::state::{matches, matches_opt, total_pages};

#[derive(Clone, Debug)]
pub struct DisputesState {
    pub items: Vec<Dispute>,
    pub count: i64,
    pub loading: bool,
    pub error: String,
    pub search: String,
    /// `None` means every status.
    pub status: Option<DisputeStatus>,
}

impl Default for DisputesState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: true,
            error: String::new(),
            search: String::new(),
            status: None,
        }
    }
}

impl DisputesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, env: Paginated<Dispute>) {
        self.items = env.results;
        self.count = env.count;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les litiges. Veuillez réessayer.".to_owned();
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.count)
    }

    /// Search over title and party names, intersected with the status
    /// filter.
    pub fn filtered(&self) -> Vec<Dispute> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|d| {
                let text = needle.is_empty()
                    || matches(&d.title, &needle)
                    || matches_opt(d.client_name.as_deref(), &needle)
                    || matches_opt(d.provider_name.as_deref(), &needle);
                let status = self.status.is_none_or(|s| d.status == s);
                text && status
            })
            .cloned()
            .collect()
    }

    pub fn apply_status(&mut self, id: i64, status: DisputeStatus, resolution_note: &str) {
        if let Some(dispute) = self.items.iter_mut().find(|d| d.id == id) {
            dispute.status = status;
            dispute.resolution_note = resolution_note.to_owned();
        }
    }

    pub fn action_failed(&mut self, message: &str) {
        self.error = message.to_owned();
    }
}
