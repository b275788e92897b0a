//! Events tab messages.

use alumni_client::ApiError;
use alumni_model::{Event, EventForm, EventType, RegistrationForm};

use crate::state::{Choice, TabInstance};

/// Messages for the Events tab.
#[derive(Debug, Clone)]
pub enum EventsMessage {
    // =========================================================================
    // List
    // =========================================================================
    SearchChanged(String),
    TypeSelected(Choice<EventType>),

    /// Search button pressed
    SearchPressed,

    /// `GET /api/events` finished
    Loaded {
        instance: TabInstance,
        result: Result<Vec<Event>, ApiError>,
    },

    // =========================================================================
    // Dialogs
    // =========================================================================
    OpenCreate,
    ViewDetails(Event),
    OpenRegister(Event),
    CloseModal,

    // =========================================================================
    // Create event
    // =========================================================================
    EventFieldChanged(EventField, String),
    EventTypeChanged(EventType),
    SubmitEvent,

    /// `POST /api/events` finished
    EventCreated {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },

    // =========================================================================
    // Register
    // =========================================================================
    RegistrationFieldChanged(RegistrationField, String),
    SubmitRegistration,

    /// `POST /api/events/{id}/register` finished
    Registered {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },
}

/// Text fields of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Description,
    Date,
    Time,
    Location,
    Capacity,
    Organizer,
    ContactEmail,
}

impl EventField {
    pub fn apply(self, form: &mut EventForm, value: String) {
        let slot = match self {
            Self::Title => &mut form.title,
            Self::Description => &mut form.description,
            Self::Date => &mut form.date,
            Self::Time => &mut form.time,
            Self::Location => &mut form.location,
            Self::Capacity => &mut form.capacity,
            Self::Organizer => &mut form.organizer,
            Self::ContactEmail => &mut form.contact_email,
        };
        *slot = value;
    }
}

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
}

impl RegistrationField {
    pub fn apply(self, form: &mut RegistrationForm, value: String) {
        match self {
            Self::Name => form.attendee_name = value,
            Self::Email => form.attendee_email = value,
        }
    }
}
