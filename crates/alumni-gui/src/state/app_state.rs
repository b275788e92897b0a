//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use alumni_client::PortalClient;
use alumni_model::{AuthForm, FormError, ProfileForm, User};
use alumni_storage::LocalStore;

use super::navigation::Tab;
use super::settings::Settings;
use super::tabs::{
    DirectoryState, DonationsState, EventsState, JobsState, ProfileState, TabInstance, TabState,
};
use crate::error::{GuiError, log_error};

// =============================================================================
// SESSION
// =============================================================================

/// Who is signed in and how the portal looks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub logged_in: bool,
    /// The verified user. `None` after a restart even when a token was
    /// restored, until the next login.
    pub user: Option<User>,
    pub dark_mode: bool,
}

impl Session {
    /// Name used in the header greeting.
    pub fn greeting_name(&self) -> &str {
        self.user
            .as_ref()
            .map(User::greeting_name)
            .unwrap_or("Alumni")
    }
}

// =============================================================================
// AUTH DIALOGS
// =============================================================================

/// The two mutually exclusive auth dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDialog {
    Login,
    Register,
}

/// State of the login/register dialogs. Both share one form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub dialog: Option<AuthDialog>,
    pub form: AuthForm,
    pub error: Option<FormError>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Top-level application state.
///
/// This is the root of all state in the application.
pub struct AppState {
    /// Session flags (persisted partly through `store`)
    pub session: Session,
    /// The active tab and everything it owns
    pub tab: TabState,
    /// Login/register dialogs
    pub auth: AuthState,
    /// Blocking alert text, shown above everything until dismissed
    pub alert: Option<String>,
    /// Application settings (persisted)
    pub settings: Settings,
    /// Local key/value store holding `token` and `darkMode`
    pub store: LocalStore,
    /// Backend client, carrying the session token
    pub client: PortalClient,
    next_instance: u64,
}

impl AppState {
    /// Create state from loaded settings, store and client, restoring the
    /// theme and any stored token.
    pub fn new(settings: Settings, store: LocalStore, client: PortalClient) -> Self {
        let token = store.token().map(str::to_string);
        let session = Session {
            logged_in: token.is_some(),
            user: None,
            dark_mode: store.dark_mode(),
        };
        if session.logged_in {
            tracing::info!("Restored session token; user details unavailable until next login");
        }

        Self {
            session,
            tab: TabState::default(),
            auth: AuthState::default(),
            alert: None,
            settings,
            store,
            client: client.with_token(token),
            next_instance: 0,
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.tab.tab()
    }

    /// Mount `tab` with fresh state.
    ///
    /// Returns the new instance, or `None` when `tab` is already active.
    pub fn select_tab(&mut self, tab: Tab) -> Option<TabInstance> {
        if tab == self.active_tab() {
            return None;
        }
        self.next_instance += 1;
        let instance = TabInstance(self.next_instance);
        self.tab = TabState::mount(tab, instance, self.session.user.as_ref());
        tracing::info!(tab = %tab, "Switched tab");
        Some(instance)
    }

    /// The Directory tab, if it is the mount `instance`.
    pub fn directory_for(&mut self, instance: TabInstance) -> Option<&mut DirectoryState> {
        match &mut self.tab {
            TabState::Directory(s) if s.status.instance == instance => Some(s),
            _ => None,
        }
    }

    /// The Jobs tab, if it is the mount `instance`.
    pub fn jobs_for(&mut self, instance: TabInstance) -> Option<&mut JobsState> {
        match &mut self.tab {
            TabState::Jobs(s) if s.status.instance == instance => Some(s),
            _ => None,
        }
    }

    /// The Events tab, if it is the mount `instance`.
    pub fn events_for(&mut self, instance: TabInstance) -> Option<&mut EventsState> {
        match &mut self.tab {
            TabState::Events(s) if s.status.instance == instance => Some(s),
            _ => None,
        }
    }

    /// The Donations tab, if it is the mount `instance`.
    pub fn donations_for(&mut self, instance: TabInstance) -> Option<&mut DonationsState> {
        match &mut self.tab {
            TabState::Donations(s) if s.status.instance == instance => Some(s),
            _ => None,
        }
    }

    pub fn directory_mut(&mut self) -> Option<&mut DirectoryState> {
        match &mut self.tab {
            TabState::Directory(s) => Some(s),
            _ => None,
        }
    }

    pub fn jobs_mut(&mut self) -> Option<&mut JobsState> {
        match &mut self.tab {
            TabState::Jobs(s) => Some(s),
            _ => None,
        }
    }

    pub fn events_mut(&mut self) -> Option<&mut EventsState> {
        match &mut self.tab {
            TabState::Events(s) => Some(s),
            _ => None,
        }
    }

    pub fn donations_mut(&mut self) -> Option<&mut DonationsState> {
        match &mut self.tab {
            TabState::Donations(s) => Some(s),
            _ => None,
        }
    }

    pub fn profile_mut(&mut self) -> Option<&mut ProfileState> {
        match &mut self.tab {
            TabState::Profile(s) => Some(s),
            _ => None,
        }
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Mark `user` as signed in and persist their token.
    pub fn login(&mut self, user: User) {
        tracing::info!(email = %user.email, "Logged in");
        if let Some(token) = user.token.as_deref().filter(|t| !t.is_empty()) {
            if let Err(e) = self.store.set_token(token) {
                log_error(&GuiError::from(e));
            }
        }
        self.client = self.client.clone().with_token(user.token.clone());
        if let TabState::Profile(profile) = &mut self.tab {
            profile.profile_form = ProfileForm::from_user(&user);
        }
        self.session.logged_in = true;
        self.session.user = Some(user);
    }

    /// Clear the session and forget the stored token. The active tab stays.
    pub fn logout(&mut self) {
        tracing::info!("Logged out");
        if let Err(e) = self.store.clear_token() {
            log_error(&GuiError::from(e));
        }
        self.client = self.client.clone().with_token(None);
        self.session.logged_in = false;
        self.session.user = None;
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_dark_mode(&mut self) {
        self.session.dark_mode = !self.session.dark_mode;
        if let Err(e) = self.store.set_dark_mode(self.session.dark_mode) {
            log_error(&GuiError::from(e));
        }
    }

    /// Show a blocking alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "Alert");
        self.alert = Some(message);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use alumni_model::RecordId;

    /// State backed by a temporary store and a backend nobody listens on.
    pub(crate) fn test_state(dir: &tempfile::TempDir) -> AppState {
        let store = LocalStore::load_or_empty(dir.path().join("storage.toml"));
        let client = PortalClient::new("http://127.0.0.1:9").unwrap();
        AppState::new(Settings::default(), store, client)
    }

    pub(crate) fn test_user() -> User {
        User {
            id: Some(RecordId::Int(7)),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            graduation_year: "1934".to_string(),
            field_of_study: "Mathematics".to_string(),
            token: Some("tok-123".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{test_state, test_user};
    use super::*;

    #[test]
    fn test_fresh_state_is_logged_out_on_home() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        assert!(!state.session.logged_in);
        assert_eq!(state.active_tab(), Tab::Home);
        assert_eq!(state.session.greeting_name(), "Alumni");
    }

    #[test]
    fn test_login_persists_token_and_logout_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);

        state.login(test_user());
        assert!(state.session.logged_in);
        assert_eq!(state.session.greeting_name(), "Grace");
        assert_eq!(state.store.token(), Some("tok-123"));
        assert_eq!(state.client.token(), Some("tok-123"));

        state.logout();
        assert!(!state.session.logged_in);
        assert!(state.session.user.is_none());
        assert_eq!(state.store.token(), None);
        assert_eq!(state.client.token(), None);
    }

    #[test]
    fn test_restored_token_logs_in_without_user() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut state = test_state(&dir);
            state.login(test_user());
            state.toggle_dark_mode();
        }

        let state = test_state(&dir);
        assert!(state.session.logged_in);
        assert!(state.session.user.is_none());
        assert!(state.session.dark_mode);
        assert_eq!(state.client.token(), Some("tok-123"));
    }

    #[test]
    fn test_select_tab_mounts_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);

        let first = state.select_tab(Tab::Jobs).unwrap();
        state.jobs_mut().unwrap().filter.search = "rust".to_string();
        assert!(state.select_tab(Tab::Jobs).is_none());
        assert_eq!(state.jobs_mut().unwrap().filter.search, "rust");

        state.select_tab(Tab::Events);
        let second = state.select_tab(Tab::Jobs).unwrap();
        assert_ne!(first, second);
        assert!(state.jobs_mut().unwrap().filter.search.is_empty());
        assert!(state.jobs_for(first).is_none());
        assert!(state.jobs_for(second).is_some());
    }

    #[test]
    fn test_toggle_dark_mode_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        state.toggle_dark_mode();
        assert!(state.session.dark_mode);
        assert_eq!(state.store.get_item("darkMode"), Some("true"));
        state.toggle_dark_mode();
        assert_eq!(state.store.get_item("darkMode"), Some("false"));
    }
}
