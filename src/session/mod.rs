//! Durable session persistence.
//!
//! The store owns the two localStorage keys holding the bearer token and the
//! serialized profile. Nothing else in the crate touches storage directly;
//! the auth controller and the HTTP 401 handler go through [`store::SessionStore`].

pub mod store;
