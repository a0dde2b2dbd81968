//! One module per routed screen.

pub mod categories;
pub mod dashboard;
pub mod disputes;
pub mod login;
pub mod not_found;
pub mod providers;
pub mod reports;
pub mod settings;
pub mod users;
