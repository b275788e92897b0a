//! Data model for the Alumni Portal.
//!
//! This crate holds everything about the portal that does not depend on a UI
//! toolkit or an HTTP stack:
//!
//! - [`entity`]: records mirrored from the backend (users, alumni, jobs, events, campaigns)
//! - [`options`]: closed option sets (job types, event types, campaign categories)
//! - [`filter`]: list filters and their query-parameter encoding
//! - [`form`]: user-editable forms, validation, and request payload building
//! - [`request`]: JSON request bodies sent to the backend
//! - [`format`]: display helpers (dates, currency, progress)
//! - [`profile`]: the static sample data shown on the profile dashboard
//!
//! Entities are transient copies of backend state. The client never mutates or
//! reconciles them; every list is replaced wholesale on each fetch.

pub mod entity;
pub mod error;
pub mod filter;
pub mod form;
pub mod format;
pub mod id;
pub mod lenient;
pub mod options;
pub mod profile;
pub mod request;

pub use entity::{
    AlumniProfile, Campaign, Donation, Event, JobApplication, JobPosting, Registration, User,
};
pub use error::FormError;
pub use filter::{CampaignFilter, DirectoryFilter, EventFilter, JobFilter, QueryParams};
pub use form::{
    ApplicationForm, AuthForm, CampaignForm, DonationForm, EventForm, JobForm, PasswordForm,
    ProfileForm, RegistrationForm,
};
pub use format::{
    format_currency, format_event_date, format_percent, format_short_date, initials, job_summary,
    progress_percentage,
};
pub use id::RecordId;
pub use options::{BadgeColor, CampaignCategory, EventType, JobType};
pub use request::{
    ApplicationRequest, CampaignRequest, DonationRequest, EventRequest, JobRequest, LoginRequest,
    RegisterRequest, RegistrationRequest,
};
