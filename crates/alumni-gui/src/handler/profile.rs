//! Profile dashboard handler.
//!
//! The profile dialogs do not talk to the backend. Submitting them validates
//! locally and confirms with an alert.

use alumni_model::{FormError, PasswordForm};
use iced::Task;

use super::MessageHandler;
use crate::message::{Message, PrivacyToggle, ProfileMessage};
use crate::state::{AppState, ProfileModal};

/// Handler for the Profile tab.
pub struct ProfileHandler;

impl MessageHandler<ProfileMessage> for ProfileHandler {
    fn handle(&self, state: &mut AppState, msg: ProfileMessage) -> Task<Message> {
        if let ProfileMessage::QuickAction(tab) = msg {
            return Task::done(Message::SelectTab(tab));
        }

        let Some(profile) = state.profile_mut() else {
            return Task::none();
        };

        match msg {
            ProfileMessage::SectionSelected(section) => profile.section = section,

            ProfileMessage::OpenEditProfile => {
                profile.form_error = None;
                profile.modal = Some(ProfileModal::EditProfile);
            }

            ProfileMessage::OpenChangePassword => {
                profile.form_error = None;
                profile.modal = Some(ProfileModal::ChangePassword);
            }

            ProfileMessage::CloseModal => {
                profile.form_error = None;
                profile.modal = None;
            }

            ProfileMessage::ProfileFieldChanged(field, value) => {
                field.apply(&mut profile.profile_form, value);
                profile.form_error = None;
            }

            ProfileMessage::SubmitProfile => match profile.profile_form.validate() {
                Ok(()) => {
                    profile.modal = None;
                    tracing::info!("Profile form submitted");
                    state.alert("Profile updated successfully!");
                }
                Err(e) => profile.form_error = Some(e),
            },

            ProfileMessage::PasswordFieldChanged(field, value) => {
                field.apply(&mut profile.password_form, value);
                profile.form_error = None;
            }

            ProfileMessage::SubmitPassword => match profile.password_form.validate() {
                Ok(()) => {
                    profile.modal = None;
                    profile.password_form = PasswordForm::default();
                    tracing::info!("Password form submitted");
                    state.alert("Password changed successfully!");
                }
                Err(FormError::PasswordMismatch) => {
                    state.alert(FormError::PasswordMismatch.to_string());
                }
                Err(e) => profile.form_error = Some(e),
            },

            ProfileMessage::PrivacyToggled(toggle, enabled) => {
                let slot = match toggle {
                    PrivacyToggle::ShowInDirectory => &mut profile.privacy.show_in_directory,
                    PrivacyToggle::EmailNotifications => &mut profile.privacy.email_notifications,
                    PrivacyToggle::AllowContact => &mut profile.privacy.allow_contact,
                };
                *slot = enabled;
            }

            ProfileMessage::QuickAction(_) => {}
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::select_tab;
    use crate::message::{PasswordField, ProfileField};
    use crate::state::test_support::{test_state, test_user};
    use crate::state::{ProfileSection, Tab};

    fn profile_state(dir: &tempfile::TempDir) -> AppState {
        let mut state = test_state(dir);
        state.login(test_user());
        let _ = select_tab(&mut state, Tab::Profile);
        state
    }

    fn set_password(state: &mut AppState, field: PasswordField, value: &str) {
        let _ = ProfileHandler.handle(
            state,
            ProfileMessage::PasswordFieldChanged(field, value.to_string()),
        );
    }

    #[test]
    fn test_sections_switch() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = profile_state(&dir);
        let _ = ProfileHandler.handle(
            &mut state,
            ProfileMessage::SectionSelected(ProfileSection::Settings),
        );
        assert_eq!(state.profile_mut().unwrap().section, ProfileSection::Settings);
    }

    #[test]
    fn test_edit_profile_confirms_with_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = profile_state(&dir);
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::OpenEditProfile);
        assert_eq!(state.profile_mut().unwrap().profile_form.first_name, "Grace");

        let _ = ProfileHandler.handle(
            &mut state,
            ProfileMessage::ProfileFieldChanged(ProfileField::JobTitle, "Admiral".into()),
        );
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::SubmitProfile);
        assert_eq!(state.profile_mut().unwrap().modal, None);
        assert_eq!(
            state.alert.as_deref(),
            Some("Profile updated successfully!")
        );
    }

    #[test]
    fn test_password_mismatch_alerts_and_keeps_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = profile_state(&dir);
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::OpenChangePassword);
        set_password(&mut state, PasswordField::Current, "old");
        set_password(&mut state, PasswordField::New, "new-one");
        set_password(&mut state, PasswordField::Confirm, "new-two");
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::SubmitPassword);

        assert_eq!(state.alert.as_deref(), Some("New passwords do not match."));
        assert_eq!(
            state.profile_mut().unwrap().modal,
            Some(ProfileModal::ChangePassword)
        );
    }

    #[test]
    fn test_password_change_resets_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = profile_state(&dir);
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::OpenChangePassword);
        set_password(&mut state, PasswordField::Current, "old");
        set_password(&mut state, PasswordField::New, "new-one");
        set_password(&mut state, PasswordField::Confirm, "new-one");
        let _ = ProfileHandler.handle(&mut state, ProfileMessage::SubmitPassword);

        let profile = state.profile_mut().unwrap();
        assert_eq!(profile.modal, None);
        assert_eq!(profile.password_form, PasswordForm::default());
        assert_eq!(
            state.alert.as_deref(),
            Some("Password changed successfully!")
        );
    }

    #[test]
    fn test_privacy_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = profile_state(&dir);
        let _ = ProfileHandler.handle(
            &mut state,
            ProfileMessage::PrivacyToggled(PrivacyToggle::AllowContact, true),
        );
        let _ = ProfileHandler.handle(
            &mut state,
            ProfileMessage::PrivacyToggled(PrivacyToggle::ShowInDirectory, false),
        );
        let privacy = state.profile_mut().unwrap().privacy;
        assert!(privacy.allow_contact);
        assert!(!privacy.show_in_directory);
        assert!(privacy.email_notifications);
    }
}
