//! Dashboard statistics, derived client-side.
//!
//! The backend has no stats endpoint, so the screen fetches the first page
//! of users, providers, and disputes (100 rows each) and derives everything
//! here. Pure over an injected "today" so the derivation is testable.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::{Datelike, NaiveDate};

use crate::net::types::{Dispute, DisputeStatus, Provider, UserProfile};

/// French short month names, indexed by zero-based month.
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// How many trailing months the registrations chart covers.
const CHART_MONTHS: u32 = 6;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_providers: usize,
    pub total_disputes: usize,
    pub new_users_this_month: usize,
    /// (status, count) in declaration order.
    pub disputes_by_status: Vec<(DisputeStatus, usize)>,
    /// (label, count) for the last [`CHART_MONTHS`] months, oldest first.
    pub registrations_by_month: Vec<(String, usize)>,
    pub recent_disputes: Vec<Dispute>,
    pub latest_registrations: Vec<UserProfile>,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub loading: bool,
    pub error: String,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn loaded(&mut self, stats: DashboardStats) {
        self.stats = stats;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = "Impossible de charger les statistiques. Veuillez réessayer.".to_owned();
    }
}

/// Derive every dashboard figure from raw rows.
pub fn derive_stats(
    users: &[UserProfile],
    providers: &[Provider],
    disputes: &[Dispute],
    today: NaiveDate,
) -> DashboardStats {
    let month_start = first_of_month(today.year(), today.month());

    let disputes_by_status = DisputeStatus::ALL
        .into_iter()
        .map(|status| (status, disputes.iter().filter(|d| d.status == status).count()))
        .collect();

    let registrations_by_month = trailing_months(today)
        .into_iter()
        .map(|(year, month)| {
            let count = users
                .iter()
                .filter_map(joined_date)
                .filter(|d| d.year() == year && d.month() == month)
                .count();
            let label = MONTHS_FR[(month - 1) as usize].to_owned();
            (label, count)
        })
        .collect();

    DashboardStats {
        total_users: users.len(),
        total_providers: providers.len(),
        total_disputes: disputes.len(),
        new_users_this_month: users
            .iter()
            .filter_map(joined_date)
            .filter(|d| *d >= month_start)
            .count(),
        disputes_by_status,
        registrations_by_month,
        recent_disputes: disputes.iter().take(5).cloned().collect(),
        latest_registrations: users.iter().take(5).cloned().collect(),
    }
}

/// Registration date of a user, when present and parsable. The backend
/// sends RFC 3339 timestamps; only the date prefix matters here.
pub fn joined_date(user: &UserProfile) -> Option<NaiveDate> {
    let raw = user.date_joined.as_deref()?;
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// The last [`CHART_MONTHS`] (year, month) pairs ending at `today`'s month,
/// oldest first.
fn trailing_months(today: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(CHART_MONTHS as usize);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..CHART_MONTHS {
        months.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months.reverse();
    months
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // month comes from a valid NaiveDate, so day 1 always exists
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// Today's date in the environment the code runs in.
pub fn today() -> NaiveDate {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year;
        #[allow(clippy::cast_possible_wrap)]
        {
            year = now.get_full_year() as i32;
        }
        NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chrono::Utc::now().date_naive()
    }
}
