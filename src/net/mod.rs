//! REST API access for the marketplace backend.
//!
//! `types` holds the wire schemas, `http` the shared client with auth
//! interceptors, and `api` the per-resource request builders. Real HTTP runs
//! only under the `hydrate` feature; native builds get inert stubs.

pub mod api;
pub mod http;
pub mod types;
