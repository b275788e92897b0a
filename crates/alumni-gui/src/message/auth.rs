//! Login and register dialog messages.

use alumni_client::ApiError;
use alumni_model::{AuthForm, User};

/// Messages for the auth dialogs.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    /// Header Login button
    OpenLogin,

    /// Header Register button
    OpenRegister,

    /// Cancel pressed or backdrop clicked
    Close,

    /// A form field was edited
    FieldChanged(AuthField, String),

    /// Submit the open dialog
    Submit,

    /// The backend answered a login or register request
    Completed(Result<User, ApiError>),
}

/// Fields of the shared auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    FirstName,
    LastName,
    GraduationYear,
    FieldOfStudy,
}

impl AuthField {
    pub fn apply(self, form: &mut AuthForm, value: String) {
        let slot = match self {
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::GraduationYear => &mut form.graduation_year,
            Self::FieldOfStudy => &mut form.field_of_study,
        };
        *slot = value;
    }
}
