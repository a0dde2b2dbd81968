use super::*;

use crate::net::types::Role;

fn user(id: i64, username: &str, email: &str) -> UserProfile {
    UserProfile {
        id,
        username: username.to_owned(),
        email: email.to_owned(),
        role: Role::Client,
        is_verified: false,
        is_active: true,
        first_name: None,
        last_name: None,
        phone_number: None,
        profile_picture: None,
        bio: None,
        location: None,
        date_joined: None,
    }
}

fn page(count: i64, items: Vec<UserProfile>) -> Paginated<UserProfile> {
    Paginated { count, results: items }
}

#[test]
fn total_pages_rounds_up_and_clamps_negative_counts() {
    assert_eq!(crate::state::total_pages(-5), 0);
    assert_eq!(crate::state::total_pages(0), 0);
    assert_eq!(crate::state::total_pages(1), 1);
    assert_eq!(crate::state::total_pages(10), 1);
    assert_eq!(crate::state::total_pages(11), 2);
}

#[test]
fn starts_loading_with_no_rows() {
    let state = UsersState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.total_pages(), 0);
}

#[test]
fn loaded_replaces_rows_and_stops_loading() {
    let mut state = UsersState::default();
    state.begin_load();
    state.loaded(page(23, vec![user(1, "ana", "a@x.com")]));

    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    // 23 rows at 10 per page.
    assert_eq!(state.total_pages(), 3);
}

#[test]
fn load_failed_keeps_stale_rows_visible() {
    let mut state = UsersState::default();
    state.loaded(page(1, vec![user(1, "ana", "a@x.com")]));

    state.begin_load();
    state.load_failed();

    assert!(!state.loading);
    assert!(!state.error.is_empty());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn search_matches_across_identity_fields() {
    let mut state = UsersState::default();
    let mut with_phone = user(2, "bruno", "b@x.com");
    with_phone.phone_number = Some("+244 912 345".to_owned());
    let mut with_name = user(3, "carla", "c@x.com");
    with_name.first_name = Some("Carla".to_owned());
    state.loaded(page(3, vec![user(1, "ana", "a@x.com"), with_phone, with_name]));

    // Case-insensitive.
    state.search = "ANA".to_owned();
    assert_eq!(state.filtered().iter().map(|u| u.id).collect::<Vec<_>>(), vec![1]);

    state.search = "912".to_owned();
    assert_eq!(state.filtered().iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);

    state.search = "carla".to_owned();
    assert_eq!(state.filtered().iter().map(|u| u.id).collect::<Vec<_>>(), vec![3]);

    state.search.clear();
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn patch_merges_the_saved_form_into_the_row() {
    let mut state = UsersState::default();
    state.loaded(page(1, vec![user(1, "ana", "a@x.com")]));

    let form = UserUpdate {
        first_name: "Ana".to_owned(),
        last_name: "Silva".to_owned(),
        email: "ana@x.com".to_owned(),
        phone_number: String::new(),
        role: Role::Admin,
        is_verified: true,
        is_active: false,
    };
    state.patch(1, &form);

    let row = &state.items[0];
    assert_eq!(row.first_name.as_deref(), Some("Ana"));
    assert_eq!(row.email, "ana@x.com");
    assert_eq!(row.role, Role::Admin);
    assert!(row.is_verified);
    assert!(!row.is_active);
}

#[test]
fn patch_of_a_missing_row_does_nothing() {
    let mut state = UsersState::default();
    state.loaded(page(1, vec![user(1, "ana", "a@x.com")]));
    let before = state.items.clone();

    state.patch(99, &UserUpdate::default());
    assert_eq!(state.items, before);
}

#[test]
fn toggle_active_flips_only_the_target() {
    let mut state = UsersState::default();
    state.loaded(page(2, vec![user(1, "ana", "a@x.com"), user(2, "bruno", "b@x.com")]));

    state.toggle_active(2);
    assert!(state.items[0].is_active);
    assert!(!state.items[1].is_active);

    state.toggle_active(2);
    assert!(state.items[1].is_active);
}

#[test]
fn remove_drops_the_row_and_decrements_the_count() {
    let mut state = UsersState::default();
    state.loaded(page(2, vec![user(1, "ana", "a@x.com"), user(2, "bruno", "b@x.com")]));

    state.remove(1);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.count, 1);

    // Removing a ghost id never drives the count negative.
    state.remove(1);
    state.remove(2);
    state.remove(2);
    assert_eq!(state.count, 0);
}
