use super::*;

// =============================================================
// Roles
// =============================================================

#[test]
fn role_deserializes_from_backend_strings() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"provider\"").unwrap(), Role::Provider);
    assert_eq!(serde_json::from_str::<Role>("\"client\"").unwrap(), Role::Client);
}

#[test]
fn unknown_role_does_not_break_deserialization() {
    assert_eq!(serde_json::from_str::<Role>("\"moderator\"").unwrap(), Role::Unknown);
}

// =============================================================
// Profiles
// =============================================================

#[test]
fn user_profile_accepts_a_minimal_backend_row() {
    let raw = r#"{"id": 7, "username": "joao", "email": "joao@x.com", "role": "client"}"#;
    let user: UserProfile = serde_json::from_str(raw).unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Client);
    // Fields the serializer omits fall back sensibly.
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert_eq!(user.first_name, None);
}

#[test]
fn display_name_prefers_first_and_last() {
    let raw = r#"{"id": 1, "username": "ana", "email": "a@x.com",
                  "first_name": "Ana", "last_name": "Silva"}"#;
    let user: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(user.display_name(), "Ana Silva");
    assert_eq!(user.initial(), "A");
}

#[test]
fn display_name_falls_back_to_username() {
    let raw = r#"{"id": 1, "username": "ana", "email": "a@x.com", "first_name": ""}"#;
    let user: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(user.display_name(), "ana");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn paginated_envelope_deserializes() {
    let raw = r#"{"count": 42, "results": [{"id": 1, "name": "Plomberie"}]}"#;
    let env: Paginated<Category> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.count, 42);
    assert_eq!(env.results.len(), 1);
    assert_eq!(env.results[0].name, "Plomberie");
}

#[test]
fn maybe_paginated_accepts_both_shapes() {
    let enveloped = r#"{"count": 1, "results": [{"id": 1, "name": "Plomberie"}]}"#;
    let bare = r#"[{"id": 1, "name": "Plomberie"}]"#;

    let a: MaybePaginated<Category> = serde_json::from_str(enveloped).unwrap();
    let b: MaybePaginated<Category> = serde_json::from_str(bare).unwrap();

    assert_eq!(a.into_results(), b.into_results());
}

// =============================================================
// Providers (lenient decimals)
// =============================================================

#[test]
fn provider_accepts_decimal_strings_and_numbers() {
    let raw = r#"{"id": 3, "username": "pro", "avg_rating": "4.50", "trust_score": 3.2}"#;
    let provider: Provider = serde_json::from_str(raw).unwrap();
    assert!((provider.avg_rating - 4.5).abs() < f64::EPSILON);
    assert!((provider.trust_score - 3.2).abs() < f64::EPSILON);
}

#[test]
fn provider_tolerates_null_rating() {
    let raw = r#"{"id": 3, "avg_rating": null}"#;
    let provider: Provider = serde_json::from_str(raw).unwrap();
    assert!(provider.avg_rating.abs() < f64::EPSILON);
    assert_eq!(provider.display_name(), "—");
}

// =============================================================
// Statuses
// =============================================================

#[test]
fn dispute_status_round_trips_through_wire_strings() {
    for status in DisputeStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        assert_eq!(serde_json::from_str::<DisputeStatus>(&json).unwrap(), status);
        assert_eq!(DisputeStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(DisputeStatus::parse("nonsense"), None);
}

#[test]
fn report_kind_field_maps_from_type() {
    let raw = r#"{"id": 9, "type": "provider", "reason": "spam", "status": "pending"}"#;
    let report: Report = serde_json::from_str(raw).unwrap();
    assert_eq!(report.kind, ReportType::Provider);
    assert_eq!(report.status, ReportStatus::Pending);
}

// =============================================================
// Forms
// =============================================================

#[test]
fn user_update_prefills_from_a_profile() {
    let raw = r#"{"id": 1, "username": "ana", "email": "a@x.com", "role": "admin",
                  "first_name": "Ana", "is_verified": true, "is_active": false}"#;
    let user: UserProfile = serde_json::from_str(raw).unwrap();
    let form = UserUpdate::from_profile(&user);

    assert_eq!(form.first_name, "Ana");
    assert_eq!(form.last_name, "");
    assert_eq!(form.role, Role::Admin);
    assert!(form.is_verified);
    assert!(!form.is_active);
}

#[test]
fn dispute_status_update_serializes_the_wire_body() {
    let body = DisputeStatusUpdate {
        status: DisputeStatus::Resolved,
        resolution_note: "remboursé".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["resolution_note"], "remboursé");
}
