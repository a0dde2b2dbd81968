//! Settings screen state: tabbed local forms for profile, password, and
//! notification preferences.
//!
//! The original screen never wired these to the backend; the forms stay
//! local state with client-side validation only.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::types::UserProfile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Password,
    Notifications,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl ProfileForm {
    /// Pre-fill from the session user.
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    /// Client-side checks before a change would be submitted.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.current.is_empty() {
            return Err("Veuillez saisir votre mot de passe actuel.");
        }
        if self.new.len() < 8 {
            return Err("Le nouveau mot de passe doit contenir au moins 8 caractères.");
        }
        if self.new != self.confirm {
            return Err("Les mots de passe ne correspondent pas.");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationPrefs {
    pub email_new_dispute: bool,
    pub email_new_report: bool,
    pub email_new_provider: bool,
    pub weekly_summary: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_new_dispute: true,
            email_new_report: true,
            email_new_provider: true,
            weekly_summary: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub profile: ProfileForm,
    pub password: PasswordForm,
    pub notifications: NotificationPrefs,
    pub error: String,
    pub success: String,
}

impl SettingsState {
    pub fn prefill(&mut self, user: &UserProfile) {
        self.profile = ProfileForm::from_profile(user);
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.error.clear();
        self.success.clear();
    }

    pub fn saved(&mut self, message: &str) {
        self.success = message.to_owned();
        self.error.clear();
    }

    /// Validate and, on success, consume the password form.
    pub fn save_password(&mut self) {
        match self.password.validate() {
            Ok(()) => {
                self.password = PasswordForm::default();
                self.saved("Mot de passe mis à jour avec succès");
            }
            Err(message) => {
                self.error = message.to_owned();
                self.success.clear();
            }
        }
    }
}
