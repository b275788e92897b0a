//! Application state management.
//!
//! - **AppState**: root state, session and backend client
//! - **TabState**: the active tab with its lists, filters, forms and modals
//! - **Settings**: persisted preferences

mod app_state;
pub mod navigation;
pub mod settings;
mod tabs;

pub use app_state::{AppState, AuthDialog, AuthState, Session};
pub use navigation::{Choice, Tab};
pub use settings::Settings;
pub use tabs::{
    DirectoryState, DonationsModal, DonationsState, EventsModal, EventsState, JobFilterChange,
    JobsModal, JobsState, ListStatus, PrivacySettings, ProfileModal, ProfileSection, ProfileState,
    TabInstance, TabState,
};

#[cfg(test)]
pub(crate) use app_state::test_support;
