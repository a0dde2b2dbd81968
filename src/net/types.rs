//! Wire schemas for the marketplace REST API.
//!
//! Every payload crossing the HTTP boundary is shaped here instead of being
//! passed around as loose JSON. Deserialization is deliberately tolerant
//! about optional fields the backend omits, and strict about the ones the UI
//! depends on.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Accounts
// =============================================================

/// Account role as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Provider,
    #[default]
    Client,
    /// A role this client does not know about yet. Keeps an otherwise valid
    /// profile deserializable when the backend grows a new role.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// French display label, matching the backend's choice labels.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Provider => "Prestataire",
            Role::Client => "Client",
            Role::Unknown => "Inconnu",
        }
    }
}

/// The authenticated user's profile, owned by the session. Replaced
/// wholesale on login, cleared wholesale on logout. Also the row type of the
/// users screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl UserProfile {
    /// "First Last" when a first name exists, otherwise the username.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !first.is_empty() => format!("{first} {last}"),
            (Some(first), None) if !first.is_empty() => first.clone(),
            _ => self.username.clone(),
        }
    }

    /// Single-letter avatar fallback.
    pub fn initial(&self) -> String {
        self.first_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(Some(self.username.as_str()))
            .and_then(|s| s.chars().next())
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().to_string())
    }
}

fn default_true() -> bool {
    true
}

// =============================================================
// Auth endpoint payloads
// =============================================================

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub access: String,
    pub user: UserProfile,
}

/// Error payload shape used by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

// =============================================================
// Pagination
// =============================================================

/// The `{count, results}` envelope returned by every list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub count: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Some list endpoints answer enveloped, some as a bare array, depending on
/// whether the backend viewset paginates them.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum MaybePaginated<T> {
    Envelope(Paginated<T>),
    Bare(Vec<T>),
}

impl<T> MaybePaginated<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            MaybePaginated::Envelope(env) => env.results,
            MaybePaginated::Bare(items) => items,
        }
    }
}

// =============================================================
// Resources
// =============================================================

/// Provider row from the list serializer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_rating: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub trust_score: f64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Provider {
    /// Best available human name: full name, then company, then username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.company_name.as_deref().filter(|s| !s.is_empty()))
            .or(self.username.as_deref())
            .unwrap_or("—")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: i64,
    /// Parent category id.
    pub category: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
    Closed,
}

impl DisputeStatus {
    pub const ALL: [DisputeStatus; 4] = [
        DisputeStatus::Open,
        DisputeStatus::UnderReview,
        DisputeStatus::Resolved,
        DisputeStatus::Closed,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::UnderReview => "under_review",
            DisputeStatus::Resolved => "resolved",
            DisputeStatus::Closed => "closed",
        }
    }

    /// French display label, matching the backend's choice labels.
    pub fn label(self) -> &'static str {
        match self {
            DisputeStatus::Open => "Ouvert",
            DisputeStatus::UnderReview => "En cours d'examen",
            DisputeStatus::Resolved => "Résolu",
            DisputeStatus::Closed => "Fermé",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: DisputeStatus,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub service_title: Option<String>,
    #[serde(default)]
    pub resolution_note: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    UnderReview,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::UnderReview,
        ReportStatus::Resolved,
        ReportStatus::Dismissed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::UnderReview => "under_review",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Pending => "En attente",
            ReportStatus::UnderReview => "En cours d'examen",
            ReportStatus::Resolved => "Résolu",
            ReportStatus::Dismissed => "Rejeté",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// What kind of entity a report targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Provider,
    User,
    Review,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Provider, ReportType::User, ReportType::Review];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Provider => "provider",
            ReportType::User => "user",
            ReportType::Review => "review",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportType::Provider => "Prestataire",
            ReportType::User => "Utilisateur",
            ReportType::Review => "Avis",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub reason: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub reported_user_name: Option<String>,
    #[serde(default)]
    pub reported_provider_name: Option<String>,
    #[serde(default)]
    pub admin_notes: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================
// Mutation bodies
// =============================================================

/// Body of `PUT /users/{id}/`, also the edit-modal form model.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub is_verified: bool,
    pub is_active: bool,
}

impl UserUpdate {
    /// Pre-fill the form from an existing row.
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            role: user.role,
            is_verified: user.is_verified,
            is_active: user.is_active,
        }
    }
}

/// Body of category/subcategory create and update calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SubCategoryForm {
    pub category: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Body of `POST /disputes/{id}/update_status/`.
#[derive(Clone, Debug, Serialize)]
pub struct DisputeStatusUpdate {
    pub status: DisputeStatus,
    pub resolution_note: String,
}

/// Body of `POST /reports/{id}/update_status/`.
#[derive(Clone, Debug, Serialize)]
pub struct ReportStatusUpdate {
    pub status: ReportStatus,
    pub admin_notes: String,
}

// =============================================================
// Lenient decimal handling
// =============================================================

/// Accepts a JSON number, a decimal rendered as a string (DRF's default for
/// `DecimalField`), or null.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.parse().unwrap_or(0.0),
        Raw::Null => 0.0,
    })
}
