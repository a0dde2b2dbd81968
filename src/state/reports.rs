//! Reports screen state: type filter, search, and the review patch.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::types::{Paginated, Report, ReportStatus, ReportType};
use crate::state::{matches, matches_opt, total_pages};

#[derive(Clone, Debug)]
pub struct ReportsState {
    pub items: Vec<Report>,
    pub count: i64,
    pub loading: bool,
    pub error: String,
    pub search: String,
    /// `None` means every report type.
    pub kind: Option<ReportType>,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: true,
            error: String::new(),
            search: String::new(),
            kind: None,
        }
    }
}

impl ReportsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, env: Paginated<Report>) {
        self.items = env.results;
        self.count = env.count;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les signalements. Veuillez réessayer.".to_owned();
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.count)
    }

    /// Search over reason and names, intersected with the type filter.
    pub fn filtered(&self) -> Vec<Report> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|r| {
                let text = needle.is_empty()
                    || matches(&r.reason, &needle)
                    || matches_opt(r.reporter_name.as_deref(), &needle)
                    || matches_opt(r.reported_user_name.as_deref(), &needle)
                    || matches_opt(r.reported_provider_name.as_deref(), &needle);
                let kind = self.kind.is_none_or(|k| r.kind == k);
                text && kind
            })
            .cloned()
            .collect()
    }

    /// Apply an admin review (status + notes) to the matching row.
    pub fn apply_review(&mut self, id: i64, status: ReportStatus, admin_notes: &str) {
        if let Some(report) = self.items.iter_mut().find(|r| r.id == id) {
            report.status = status;
            report.admin_notes = admin_notes.to_owned();
        }
    }

    pub fn action_failed(&mut self, message: &str) {
        self.error = message.to_owned();
    }
}
