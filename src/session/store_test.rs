use super::*;

use crate::net::types::Role;

fn admin() -> UserProfile {
    UserProfile {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@x.com".to_owned(),
        role: Role::Admin,
        is_verified: true,
        is_active: true,
        first_name: Some("Ana".to_owned()),
        last_name: Some("Silva".to_owned()),
        phone_number: None,
        profile_picture: None,
        bio: None,
        location: None,
        date_joined: Some("2024-01-15T09:00:00Z".to_owned()),
    }
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn read_empty_store_is_none() {
    let store = SessionStore::in_memory();
    assert_eq!(store.read(), None);
}

#[test]
fn save_then_read_returns_the_pair() {
    let store = SessionStore::in_memory();
    store.save("tok123", &admin());

    let session = store.read().expect("complete session");
    assert_eq!(session.token, "tok123");
    assert_eq!(session.user, admin());
}

#[test]
fn save_replaces_the_previous_session_wholesale() {
    let store = SessionStore::in_memory();
    store.save("tok-old", &admin());

    let mut other = admin();
    other.id = 2;
    other.username = "other".to_owned();
    store.save("tok-new", &other);

    let session = store.read().expect("complete session");
    assert_eq!(session.token, "tok-new");
    assert_eq!(session.user.username, "other");
}

#[test]
fn clear_erases_both_keys() {
    let store = SessionStore::in_memory();
    store.save("tok123", &admin());
    store.clear();

    assert_eq!(store.read(), None);
    assert_eq!(store.raw(TOKEN_KEY), None);
    assert_eq!(store.raw(USER_KEY), None);
}

#[test]
fn clear_twice_is_a_no_op() {
    let store = SessionStore::in_memory();
    store.save("tok123", &admin());
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// All-or-nothing reads
// =============================================================

#[test]
fn orphaned_token_reads_as_absent_and_self_heals() {
    let store = SessionStore::in_memory();
    store.poke(TOKEN_KEY, "tok123");

    assert_eq!(store.read(), None);
    // The remnant is gone, and the token accessor never saw it either.
    assert_eq!(store.raw(TOKEN_KEY), None);
    assert_eq!(store.token(), None);
}

#[test]
fn orphaned_profile_reads_as_absent_and_self_heals() {
    let store = SessionStore::in_memory();
    let raw = serde_json::to_string(&admin()).expect("serializable profile");
    store.poke(USER_KEY, &raw);

    assert_eq!(store.read(), None);
    assert_eq!(store.raw(USER_KEY), None);
}

#[test]
fn corrupt_profile_reads_as_absent_and_clears_the_token_too() {
    let store = SessionStore::in_memory();
    store.poke(TOKEN_KEY, "tok123");
    store.poke(USER_KEY, "{not json");

    assert_eq!(store.read(), None);
    assert_eq!(store.raw(TOKEN_KEY), None);
    assert_eq!(store.raw(USER_KEY), None);
}

#[test]
fn token_accessor_requires_a_complete_session() {
    let store = SessionStore::in_memory();
    store.save("tok123", &admin());
    assert_eq!(store.token(), Some("tok123".to_owned()));

    store.poke(USER_KEY, "null");
    assert_eq!(store.token(), None);
}
