use super::*;

fn provider(id: i64, full_name: &str, verified: bool) -> Provider {
    Provider {
        id,
        username: None,
        full_name: Some(full_name.to_owned()),
        company_name: None,
        avg_rating: 0.0,
        trust_score: 0.0,
        is_verified: verified,
        is_featured: false,
        address: None,
        created_at: None,
    }
}

#[test]
fn verified_filter_partitions_the_rows() {
    let mut state = ProvidersState::default();
    state.loaded(Paginated {
        count: 3,
        results: vec![
            provider(1, "Ana Silva", true),
            provider(2, "Bruno Costa", false),
            provider(3, "Carla Dias", true),
        ],
    });

    state.verified = VerifiedFilter::Verified;
    assert_eq!(state.filtered().iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

    state.verified = VerifiedFilter::Unverified;
    assert_eq!(state.filtered().iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

    state.verified = VerifiedFilter::All;
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn search_intersects_with_the_verified_filter() {
    let mut state = ProvidersState::default();
    let mut company = provider(2, "Bruno Costa", false);
    company.company_name = Some("Costa Plomberie".to_owned());
    state.loaded(Paginated {
        count: 2,
        results: vec![provider(1, "Ana Silva", true), company],
    });

    state.search = "costa".to_owned();
    assert_eq!(state.filtered().iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

    state.verified = VerifiedFilter::Verified;
    assert!(state.filtered().is_empty());
}

#[test]
fn set_verified_patches_only_the_target_row() {
    let mut state = ProvidersState::default();
    state.loaded(Paginated {
        count: 2,
        results: vec![provider(1, "Ana Silva", false), provider(2, "Bruno Costa", false)],
    });

    state.set_verified(2, true);
    assert!(!state.items[0].is_verified);
    assert!(state.items[1].is_verified);

    // Unknown id is ignored.
    state.set_verified(99, true);
    assert!(!state.items[0].is_verified);
}

#[test]
fn load_failure_sets_the_banner_and_stops_loading() {
    let mut state = ProvidersState::default();
    state.begin_load();
    state.load_failed();
    assert!(!state.loading);
    assert!(!state.error.is_empty());

    state.begin_load();
    assert!(state.error.is_empty());
}

#[test]
fn total_pages_rounds_up() {
    let mut state = ProvidersState::default();
    state.loaded(Paginated { count: 21, results: Vec::new() });
    assert_eq!(state.total_pages(), 3);

    state.loaded(Paginated { count: 20, results: Vec::new() });
    assert_eq!(state.total_pages(), 2);
}
