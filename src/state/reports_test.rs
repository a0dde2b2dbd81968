use super::*;

fn report(id: i64, kind: ReportType, reason: &str) -> Report {
    Report {
        id,
        kind,
        reason: reason.to_owned(),
        status: ReportStatus::Pending,
        reporter_name: None,
        reported_user_name: None,
        reported_provider_name: None,
        admin_notes: String::new(),
        created_at: None,
    }
}

fn seeded() -> ReportsState {
    let mut state = ReportsState::default();
    let mut named = report(2, ReportType::User, "Harcèlement");
    named.reporter_name = Some("Ana Silva".to_owned());
    named.reported_user_name = Some("Bruno Costa".to_owned());
    state.loaded(Paginated {
        count: 3,
        results: vec![
            report(1, ReportType::Provider, "Travail bâclé"),
            named,
            report(3, ReportType::Review, "Avis frauduleux"),
        ],
    });
    state
}

#[test]
fn type_filter_narrows_the_list() {
    let mut state = seeded();

    state.kind = Some(ReportType::Provider);
    assert_eq!(state.filtered().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

    state.kind = Some(ReportType::Review);
    assert_eq!(state.filtered().iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);

    state.kind = None;
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn search_covers_reason_and_names() {
    let mut state = seeded();

    state.search = "frauduleux".to_owned();
    assert_eq!(state.filtered().iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);

    state.search = "bruno".to_owned();
    assert_eq!(state.filtered().iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn search_and_type_intersect() {
    let mut state = seeded();
    state.search = "bruno".to_owned();
    state.kind = Some(ReportType::Provider);
    assert!(state.filtered().is_empty());
}

#[test]
fn apply_review_patches_status_and_notes() {
    let mut state = seeded();

    state.apply_review(1, ReportStatus::Dismissed, "Sans fondement");
    let row = state.items.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(row.status, ReportStatus::Dismissed);
    assert_eq!(row.admin_notes, "Sans fondement");

    state.apply_review(99, ReportStatus::Resolved, "");
    assert_eq!(state.items.len(), 3);
}
