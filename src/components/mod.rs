//! Shared UI building blocks used across the admin screens.

pub mod banner;
pub mod guard;
pub mod layout;
pub mod pagination;
