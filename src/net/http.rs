//! Shared HTTP client with auth interceptors.
//!
//! One client instance is provided via context and used by every resource
//! service. Outgoing requests get the bearer token from the session store
//! when one exists; incoming `401`s invalidate the whole session (store and
//! controller together) and surface as an error. The redirect to `/login` is
//! NOT performed here: the route guard observes the state transition and
//! does the navigation, which keeps this layer free of browser globals and
//! makes concurrent `401`s trivially idempotent.
//!
//! No retries, no caching. Every other status passes through to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::auth::SessionHandle;

/// Fallback when `ANGOLA_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8001/api";

/// Failure of an API call, after interceptors have run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response, with the backend's `detail` when it sent one.
    #[error("api returned {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected schema.
    #[error("unreadable response: {0}")]
    Decode(String),
    /// Real HTTP is only available in the browser build.
    #[error("http unavailable outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The backend-provided human message, when the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when this failure also invalidated the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// The single configured client. Cheap to clone.
#[derive(Clone)]
pub struct Http {
    base: String,
    session: SessionHandle,
}

impl Http {
    /// Client against the configured backend base URL.
    pub fn new(session: SessionHandle) -> Self {
        let base = option_env!("ANGOLA_API_URL").unwrap_or(DEFAULT_API_URL);
        Self::with_base(base, session)
    }

    pub fn with_base(base: &str, session: SessionHandle) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }
}

/// `base` without trailing slash + `path` with exactly one leading slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(feature = "hydrate")]
impl Http {
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.authorize(gloo_net::http::Request::get(&self.url(path)));
        self.dispatch(req.send().await).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(req.send().await).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(req.send().await).await
    }

    /// DELETE, expecting an empty success body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.authorize(gloo_net::http::Request::delete(&self.url(path)));
        self.intercept(req.send().await).await?;
        Ok(())
    }

    /// Outgoing interceptor: attach the bearer credential when the store
    /// holds a complete session, otherwise send unauthenticated.
    fn authorize(&self, req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.session.token() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let resp = self.intercept(sent).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Incoming interceptor: a `401` from anywhere drops the session before
    /// the error reaches the caller. Everything else passes through.
    async fn intercept(
        &self,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();

        if resp.ok() {
            return Ok(resp);
        }

        if status == 401 {
            // Expired or revoked token. The guard sees the transition and
            // redirects; nothing to retry here.
            self.session.invalidate();
        }

        let detail = resp
            .json::<crate::net::types::ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.detail);
        leptos::logging::warn!("api error: status={status} detail={detail:?}");
        Err(ApiError::Status { status, detail })
    }
}

#[cfg(not(feature = "hydrate"))]
impl Http {
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
