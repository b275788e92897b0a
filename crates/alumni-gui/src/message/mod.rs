//! Message module for the Alumni Portal.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and backend responses flow through these types.

pub mod auth;
pub mod directory;
pub mod donations;
pub mod events;
pub mod jobs;
pub mod profile;

use crate::state::Tab;

pub use auth::{AuthField, AuthMessage};
pub use directory::DirectoryMessage;
pub use donations::{CampaignField, DonationField, DonationsMessage};
pub use events::{EventField, EventsMessage, RegistrationField};
pub use jobs::{ApplicationField, JobField, JobsMessage};
pub use profile::{PasswordField, PrivacyToggle, ProfileField, ProfileMessage};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Shell
    // =========================================================================
    /// Switch to a different tab
    SelectTab(Tab),

    /// Floating theme toggle pressed
    ToggleDarkMode,

    /// Header Logout button pressed
    Logout,

    /// The blocking alert was acknowledged
    DismissAlert,

    /// Open a `mailto:` link for this address
    OpenMail(String),

    // =========================================================================
    // Feature messages
    // =========================================================================
    /// Login and register dialogs
    Auth(AuthMessage),

    /// Alumni directory tab
    Directory(DirectoryMessage),

    /// Job portal tab
    Jobs(JobsMessage),

    /// Events tab
    Events(EventsMessage),

    /// Donations tab
    Donations(DonationsMessage),

    /// Profile dashboard
    Profile(ProfileMessage),
}
