//! Main application module for the Alumni Portal.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Backend calls are `Task::perform` futures
//! - **Tab state is part of `TabState`** - Leaving a tab drops its state

use std::path::PathBuf;

use alumni_client::PortalClient;
use alumni_storage::LocalStore;
use iced::{Element, Task, Theme};

use crate::error::{GuiError, log_error};
use crate::handler::{
    AuthHandler, DirectoryHandler, DonationsHandler, EventsHandler, JobsHandler, MessageHandler,
    ProfileHandler, open_mail, select_tab,
};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::portal_theme;
use crate::view::shell::APP_TITLE;
use crate::view::view_app;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Opens the local store, restoring the theme and any saved token. The
    /// portal starts on the Home tab, so there is nothing to fetch yet.
    pub fn new(settings: Settings, client: PortalClient) -> (Self, Task<Message>) {
        let path = LocalStore::default_path().unwrap_or_else(|e| {
            log_error(&GuiError::from(e));
            PathBuf::from("storage.toml")
        });
        let store = LocalStore::load_or_empty(path);

        (Self::from_state(AppState::new(settings, store, client)), Task::none())
    }

    /// Wrap existing state.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Shell
            // =================================================================
            Message::SelectTab(tab) => select_tab(&mut self.state, tab),

            Message::ToggleDarkMode => {
                self.state.toggle_dark_mode();
                Task::none()
            }

            Message::Logout => {
                self.state.logout();
                Task::none()
            }

            Message::DismissAlert => {
                self.state.alert = None;
                Task::none()
            }

            Message::OpenMail(email) => open_mail(&email),

            // =================================================================
            // Feature messages
            // =================================================================
            Message::Auth(msg) => AuthHandler.handle(&mut self.state, msg),
            Message::Directory(msg) => DirectoryHandler.handle(&mut self.state, msg),
            Message::Jobs(msg) => JobsHandler.handle(&mut self.state, msg),
            Message::Events(msg) => EventsHandler.handle(&mut self.state, msg),
            Message::Donations(msg) => DonationsHandler.handle(&mut self.state, msg),
            Message::Profile(msg) => ProfileHandler.handle(&mut self.state, msg),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    /// Light or dark portal theme.
    pub fn theme(&self) -> Theme {
        portal_theme(self.state.session.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AuthMessage;
    use crate::state::Tab;
    use crate::state::test_support::{test_state, test_user};

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::from_state(test_state(dir))
    }

    #[test]
    fn test_dismiss_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.state.alert("Login failed");

        let _ = app.update(Message::DismissAlert);
        assert!(app.state.alert.is_none());
    }

    #[test]
    fn test_toggle_dark_mode_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        assert!(!app.state.session.dark_mode);

        let _ = app.update(Message::ToggleDarkMode);
        assert!(app.state.session.dark_mode);
        assert!(app.state.store.dark_mode());
    }

    #[test]
    fn test_logout_keeps_active_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.state.login(test_user());
        let _ = app.update(Message::SelectTab(Tab::Profile));

        let _ = app.update(Message::Logout);
        assert!(!app.state.session.logged_in);
        assert!(app.state.session.user.is_none());
        assert_eq!(app.state.active_tab(), Tab::Profile);
    }

    #[test]
    fn test_auth_messages_reach_handler() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::Auth(AuthMessage::OpenRegister));
        assert!(app.state.auth.dialog.is_some());
        let _ = app.update(Message::Auth(AuthMessage::Close));
        assert!(app.state.auth.dialog.is_none());
    }

    #[test]
    fn test_title() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(test_app(&dir).title(), "Alumni Association");
    }
}
