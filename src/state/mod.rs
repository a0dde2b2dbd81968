//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`auth`, `users`, `disputes`, etc.) as plain
//! structs with pure transition methods, so every decision the UI makes is
//! testable natively. Components hold them in `RwSignal`s and call the
//! methods inside `update`.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod disputes;
pub mod providers;
pub mod reports;
pub mod settings;
pub mod users;

/// Client-side page size shared by every list screen.
pub const PAGE_SIZE: i64 = 10;

/// Pages needed to show `count` rows, rounding up. Zero rows means zero
/// pages; the pagination footer hides itself below two.
pub fn total_pages(count: i64) -> i64 {
    (count.max(0) + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Case-insensitive containment used by every list search box.
pub(crate) fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// `matches` over an optional field.
pub(crate) fn matches_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| matches(h, needle))
}
