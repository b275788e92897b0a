//! Login and register dialog handler.

use alumni_client::ApiError;
use alumni_model::User;
use iced::Task;

use super::MessageHandler;
use crate::message::{AuthMessage, Message};
use crate::service;
use crate::state::{AppState, AuthDialog};

/// Alert shown when the backend could not be reached or gave no reason.
const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// Handler for the login and register dialogs.
pub struct AuthHandler;

impl MessageHandler<AuthMessage> for AuthHandler {
    fn handle(&self, state: &mut AppState, msg: AuthMessage) -> Task<Message> {
        match msg {
            AuthMessage::OpenLogin => open(state, AuthDialog::Login),
            AuthMessage::OpenRegister => open(state, AuthDialog::Register),

            AuthMessage::Close => {
                state.auth.dialog = None;
                state.auth.error = None;
                Task::none()
            }

            AuthMessage::FieldChanged(field, value) => {
                field.apply(&mut state.auth.form, value);
                state.auth.error = None;
                Task::none()
            }

            AuthMessage::Submit => submit(state),

            AuthMessage::Completed(result) => completed(state, result),
        }
    }
}

/// Show one dialog; the two never appear together.
fn open(state: &mut AppState, dialog: AuthDialog) -> Task<Message> {
    state.auth.dialog = Some(dialog);
    state.auth.error = None;
    Task::none()
}

fn submit(state: &mut AppState) -> Task<Message> {
    let Some(dialog) = state.auth.dialog else {
        return Task::none();
    };

    let task = match dialog {
        AuthDialog::Login => state
            .auth
            .form
            .login_request()
            .map(|request| service::login(&state.client, request)),
        AuthDialog::Register => state
            .auth
            .form
            .register_request()
            .map(|request| service::register(&state.client, request)),
    };

    match task {
        Ok(task) => {
            state.auth.error = None;
            task
        }
        Err(e) => {
            state.auth.error = Some(e);
            Task::none()
        }
    }
}

fn completed(state: &mut AppState, result: Result<User, ApiError>) -> Task<Message> {
    match result {
        Ok(user) => {
            state.login(user);
            state.auth.dialog = None;
            state.auth.error = None;
        }
        Err(e) => {
            tracing::warn!("Authentication failed: {e}");
            state.alert(e.user_message(CONNECTION_ERROR));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AuthField;
    use crate::state::test_support::{test_state, test_user};
    use alumni_model::FormError;

    fn fill_login(state: &mut AppState) {
        let _ = AuthHandler.handle(state, AuthMessage::OpenLogin);
        let _ = AuthHandler.handle(
            state,
            AuthMessage::FieldChanged(AuthField::Email, "grace@example.com".into()),
        );
        let _ = AuthHandler.handle(
            state,
            AuthMessage::FieldChanged(AuthField::Password, "secret".into()),
        );
    }

    #[test]
    fn test_dialogs_are_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        let _ = AuthHandler.handle(&mut state, AuthMessage::OpenLogin);
        let _ = AuthHandler.handle(&mut state, AuthMessage::OpenRegister);
        assert_eq!(state.auth.dialog, Some(AuthDialog::Register));
        let _ = AuthHandler.handle(&mut state, AuthMessage::Close);
        assert_eq!(state.auth.dialog, None);
    }

    #[test]
    fn test_empty_login_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        let _ = AuthHandler.handle(&mut state, AuthMessage::OpenLogin);
        let _ = AuthHandler.handle(&mut state, AuthMessage::Submit);
        assert!(matches!(state.auth.error, Some(FormError::Missing { .. })));
        assert!(!state.session.logged_in);
    }

    #[test]
    fn test_valid_login_signs_in_and_persists_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        fill_login(&mut state);
        let _ = AuthHandler.handle(&mut state, AuthMessage::Submit);
        assert!(state.auth.error.is_none());

        let _ = AuthHandler.handle(&mut state, AuthMessage::Completed(Ok(test_user())));
        assert!(state.session.logged_in);
        assert_eq!(state.auth.dialog, None);
        assert_eq!(state.store.token(), Some("tok-123"));
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_rejected_login_surfaces_server_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        fill_login(&mut state);

        let rejection = ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        let _ = AuthHandler.handle(&mut state, AuthMessage::Completed(Err(rejection)));

        assert!(!state.session.logged_in);
        assert_eq!(state.store.token(), None);
        assert_eq!(state.alert.as_deref(), Some("Invalid credentials"));
        assert_eq!(state.auth.dialog, Some(AuthDialog::Login));
    }

    #[test]
    fn test_network_failure_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        fill_login(&mut state);
        let _ = AuthHandler.handle(
            &mut state,
            AuthMessage::Completed(Err(ApiError::Network("refused".into()))),
        );
        assert_eq!(state.alert.as_deref(), Some(CONNECTION_ERROR));
    }
}
