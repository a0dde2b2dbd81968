use super::*;

fn dispute(id: i64, title: &str, status: DisputeStatus) -> Dispute {
    Dispute {
        id,
        title: title.to_owned(),
        description: String::new(),
        status,
        client_name: None,
        provider_name: None,
        service_title: None,
        resolution_note: String::new(),
        created_at: None,
    }
}

fn seeded() -> DisputesState {
    let mut state = DisputesState::default();
    let mut with_parties = dispute(2, "Retard de chantier", DisputeStatus::UnderReview);
    with_parties.client_name = Some("Ana Silva".to_owned());
    with_parties.provider_name = Some("Bruno Costa".to_owned());
    state.loaded(Paginated {
        count: 3,
        results: vec![
            dispute(1, "Service non rendu", DisputeStatus::Open),
            with_parties,
            dispute(3, "Facture contestée", DisputeStatus::Resolved),
        ],
    });
    state
}

#[test]
fn status_filter_narrows_the_list() {
    let mut state = seeded();

    state.status = Some(DisputeStatus::Open);
    assert_eq!(state.filtered().iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);

    state.status = Some(DisputeStatus::Closed);
    assert!(state.filtered().is_empty());

    state.status = None;
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn search_covers_title_and_party_names() {
    let mut state = seeded();

    state.search = "chantier".to_owned();
    assert_eq!(state.filtered().iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);

    state.search = "ana".to_owned();
    assert_eq!(state.filtered().iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);

    state.search = "costa".to_owned();
    assert_eq!(state.filtered().iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn search_and_status_intersect() {
    let mut state = seeded();
    state.search = "chantier".to_owned();
    state.status = Some(DisputeStatus::Open);
    assert!(state.filtered().is_empty());
}

#[test]
fn apply_status_patches_status_and_note_together() {
    let mut state = seeded();

    state.apply_status(1, DisputeStatus::Resolved, "Client remboursé");
    let row = state.items.iter().find(|d| d.id == 1).unwrap();
    assert_eq!(row.status, DisputeStatus::Resolved);
    assert_eq!(row.resolution_note, "Client remboursé");

    // Unknown id is ignored.
    state.apply_status(99, DisputeStatus::Closed, "");
    assert_eq!(state.items.len(), 3);
}

#[test]
fn load_failure_keeps_previous_rows() {
    let mut state = seeded();
    state.begin_load();
    state.load_failed();
    assert_eq!(state.items.len(), 3);
    assert!(!state.error.is_empty());
}
