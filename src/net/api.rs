//! Resource services: thin request builders over the shared [`Http`] client.
//!
//! Each function maps to one backend endpoint. None of them retry or cache;
//! screens decide what a failure means locally, except for `401`s which the
//! client layer already turned into a global session invalidation.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{ApiError, Http};
use crate::net::types::{
    Category, CategoryForm, Dispute, DisputeStatus, DisputeStatusUpdate, LoginRequest,
    LoginResponse, MaybePaginated, Paginated, Provider, Report, ReportStatus, ReportStatusUpdate,
    SubCategory, SubCategoryForm, UserProfile, UserUpdate,
};
use crate::state::auth::AuthResult;

/// Shown when a login failure carries no backend `detail`.
pub const GENERIC_LOGIN_ERROR: &str = "Une erreur est survenue lors de la connexion";

// =============================================================
// Auth
// =============================================================

/// `POST /auth/login/`. On success the session is persisted (token and
/// profile together) and adopted before the result is returned; on any
/// failure the session is left untouched.
pub async fn login(http: &Http, email: &str, password: &str) -> AuthResult {
    let body = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    match http.post::<LoginResponse, _>("/auth/login/", &body).await {
        Ok(resp) => {
            http.session().establish(&resp.access, resp.user.clone());
            AuthResult::Success(resp.user)
        }
        Err(err) => AuthResult::Failure {
            message: login_failure_message(&err),
        },
    }
}

/// Prefer the backend's `detail` field, fall back to the generic message.
pub(crate) fn login_failure_message(err: &ApiError) -> String {
    err.detail()
        .map_or_else(|| GENERIC_LOGIN_ERROR.to_owned(), ToOwned::to_owned)
}

// =============================================================
// Users
// =============================================================

pub async fn fetch_users(
    http: &Http,
    page: i64,
    page_size: i64,
) -> Result<Paginated<UserProfile>, ApiError> {
    http.get(&format!("/users/?page={page}&page_size={page_size}"))
        .await
}

pub async fn update_user(http: &Http, id: i64, form: &UserUpdate) -> Result<UserProfile, ApiError> {
    http.put(&format!("/users/{id}/"), form).await
}

/// Partial update used by the activate/deactivate shortcut.
pub async fn set_user_active(http: &Http, id: i64, is_active: bool) -> Result<(), ApiError> {
    let body = serde_json::json!({ "is_active": is_active });
    http.put::<serde_json::Value, _>(&format!("/users/{id}/"), &body)
        .await
        .map(|_| ())
}

pub async fn delete_user(http: &Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/users/{id}/")).await
}

// =============================================================
// Providers
// =============================================================

pub async fn fetch_providers(
    http: &Http,
    page: i64,
    page_size: i64,
) -> Result<Paginated<Provider>, ApiError> {
    http.get(&format!("/providers/?page={page}&page_size={page_size}"))
        .await
}

pub async fn set_provider_verified(
    http: &Http,
    id: i64,
    is_verified: bool,
) -> Result<(), ApiError> {
    let body = serde_json::json!({ "is_verified": is_verified });
    http.put::<serde_json::Value, _>(&format!("/providers/{id}/"), &body)
        .await
        .map(|_| ())
}

// =============================================================
// Categories
// =============================================================

pub async fn fetch_categories(http: &Http) -> Result<Vec<Category>, ApiError> {
    http.get::<MaybePaginated<Category>>("/categories/")
        .await
        .map(MaybePaginated::into_results)
}

pub async fn create_category(http: &Http, form: &CategoryForm) -> Result<Category, ApiError> {
    http.post("/categories/", form).await
}

pub async fn update_category(
    http: &Http,
    id: i64,
    form: &CategoryForm,
) -> Result<Category, ApiError> {
    http.put(&format!("/categories/{id}/"), form).await
}

pub async fn delete_category(http: &Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/categories/{id}/")).await
}

pub async fn fetch_subcategories(http: &Http) -> Result<Vec<SubCategory>, ApiError> {
    http.get::<MaybePaginated<SubCategory>>("/subcategories/")
        .await
        .map(MaybePaginated::into_results)
}

pub async fn create_subcategory(
    http: &Http,
    form: &SubCategoryForm,
) -> Result<SubCategory, ApiError> {
    http.post("/subcategories/", form).await
}

pub async fn update_subcategory(
    http: &Http,
    id: i64,
    form: &SubCategoryForm,
) -> Result<SubCategory, ApiError> {
    http.put(&format!("/subcategories/{id}/"), form).await
}

pub async fn delete_subcategory(http: &Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/subcategories/{id}/")).await
}

// =============================================================
// Disputes
// =============================================================

pub async fn fetch_disputes(
    http: &Http,
    page: i64,
    page_size: i64,
) -> Result<Paginated<Dispute>, ApiError> {
    http.get(&format!("/disputes/?page={page}&page_size={page_size}"))
        .await
}

pub async fn fetch_dispute(http: &Http, id: i64) -> Result<Dispute, ApiError> {
    http.get(&format!("/disputes/{id}/")).await
}

pub async fn update_dispute_status(
    http: &Http,
    id: i64,
    status: DisputeStatus,
    resolution_note: &str,
) -> Result<Dispute, ApiError> {
    let body = DisputeStatusUpdate {
        status,
        resolution_note: resolution_note.to_owned(),
    };
    http.post(&format!("/disputes/{id}/update_status/"), &body)
        .await
}

// =============================================================
// Reports
// =============================================================

pub async fn fetch_reports(
    http: &Http,
    page: i64,
    page_size: i64,
) -> Result<Paginated<Report>, ApiError> {
    http.get(&format!("/reports/?page={page}&page_size={page_size}"))
        .await
}

pub async fn update_report_status(
    http: &Http,
    id: i64,
    status: ReportStatus,
    admin_notes: &str,
) -> Result<Report, ApiError> {
    let body = ReportStatusUpdate {
        status,
        admin_notes: admin_notes.to_owned(),
    };
    http.post(&format!("/reports/{id}/update_status/"), &body)
        .await
}
