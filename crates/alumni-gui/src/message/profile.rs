//! Profile dashboard messages.

use alumni_model::{PasswordForm, ProfileForm};

use crate::state::{ProfileSection, Tab};

/// Messages for the Profile tab.
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    /// Sidebar navigation
    SectionSelected(ProfileSection),

    /// "Edit Profile" / "Update Profile"
    OpenEditProfile,

    /// "Change Password"
    OpenChangePassword,

    CloseModal,

    ProfileFieldChanged(ProfileField, String),
    SubmitProfile,

    PasswordFieldChanged(PasswordField, String),
    SubmitPassword,

    PrivacyToggled(PrivacyToggle, bool),

    /// A quick action that jumps to another tab
    QuickAction(Tab),
}

/// Fields of the Edit Profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    GraduationYear,
    FieldOfStudy,
    CurrentCompany,
    JobTitle,
    Location,
    Phone,
    Bio,
}

impl ProfileField {
    pub fn apply(self, form: &mut ProfileForm, value: String) {
        let slot = match self {
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::Email => &mut form.email,
            Self::GraduationYear => &mut form.graduation_year,
            Self::FieldOfStudy => &mut form.field_of_study,
            Self::CurrentCompany => &mut form.current_company,
            Self::JobTitle => &mut form.job_title,
            Self::Location => &mut form.location,
            Self::Phone => &mut form.phone,
            Self::Bio => &mut form.bio,
        };
        *slot = value;
    }
}

/// Fields of the Change Password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    pub fn apply(self, form: &mut PasswordForm, value: String) {
        let slot = match self {
            Self::Current => &mut form.current_password,
            Self::New => &mut form.new_password,
            Self::Confirm => &mut form.confirm_password,
        };
        *slot = value;
    }
}

/// The privacy checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyToggle {
    ShowInDirectory,
    EmailNotifications,
    AllowContact,
}
