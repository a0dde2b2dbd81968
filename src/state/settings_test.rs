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
        phone_number: Some("+244 912 345".to_owned()),
        profile_picture: None,
        bio: None,
        location: None,
        date_joined: None,
    }
}

#[test]
fn prefill_copies_the_session_profile() {
    let mut state = SettingsState::default();
    state.prefill(&admin());

    assert_eq!(state.profile.first_name, "Ana");
    assert_eq!(state.profile.email, "admin@x.com");
    assert_eq!(state.profile.phone_number, "+244 912 345");
}

#[test]
fn switching_tabs_clears_outcome_banners() {
    let mut state = SettingsState::default();
    state.saved("Profil mis à jour");
    assert!(!state.success.is_empty());

    state.select_tab(SettingsTab::Password);
    assert_eq!(state.tab, SettingsTab::Password);
    assert!(state.success.is_empty());
    assert!(state.error.is_empty());
}

#[test]
fn password_validation_rejects_bad_forms() {
    let mut form = PasswordForm::default();
    assert!(form.validate().is_err());

    form.current = "old-secret".to_owned();
    form.new = "short".to_owned();
    form.confirm = "short".to_owned();
    assert!(form.validate().is_err());

    form.new = "long enough".to_owned();
    form.confirm = "different!!".to_owned();
    assert!(form.validate().is_err());

    form.confirm = form.new.clone();
    assert!(form.validate().is_ok());
}

#[test]
fn save_password_consumes_the_form_on_success() {
    let mut state = SettingsState::default();
    state.password = PasswordForm {
        current: "old-secret".to_owned(),
        new: "new-secret".to_owned(),
        confirm: "new-secret".to_owned(),
    };

    state.save_password();

    assert_eq!(state.password, PasswordForm::default());
    assert!(!state.success.is_empty());
    assert!(state.error.is_empty());
}

#[test]
fn save_password_keeps_the_form_on_failure() {
    let mut state = SettingsState::default();
    state.password.new = "short".to_owned();

    state.save_password();

    assert_eq!(state.password.new, "short");
    assert!(!state.error.is_empty());
    assert!(state.success.is_empty());
}

#[test]
fn notification_defaults_favor_email_alerts() {
    let prefs = NotificationPrefs::default();
    assert!(prefs.email_new_dispute);
    assert!(prefs.email_new_report);
    assert!(prefs.email_new_provider);
    assert!(!prefs.weekly_summary);
}
