//! Job portal messages.

use alumni_client::ApiError;
use alumni_model::{ApplicationForm, JobForm, JobPosting, JobType};

use crate::state::{JobFilterChange, TabInstance};

/// Messages for the Jobs tab.
#[derive(Debug, Clone)]
pub enum JobsMessage {
    // =========================================================================
    // List
    // =========================================================================
    /// A filter control changed; fetches immediately
    FilterChanged(JobFilterChange),

    /// `GET /api/jobs` finished
    Loaded {
        instance: TabInstance,
        result: Result<Vec<JobPosting>, ApiError>,
    },

    // =========================================================================
    // Dialogs
    // =========================================================================
    /// "Post a Job" pressed
    OpenPostJob,

    /// "View Details" pressed on a card
    ViewDetails(JobPosting),

    /// "Apply Now" pressed on a card or in the detail dialog
    OpenApply(JobPosting),

    /// Cancel, Close, or backdrop clicked
    CloseModal,

    // =========================================================================
    // Post a job
    // =========================================================================
    JobFieldChanged(JobField, String),
    JobTypeSelected(JobType),
    SubmitJob,

    /// `POST /api/jobs` finished
    JobPosted {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },

    // =========================================================================
    // Apply
    // =========================================================================
    ApplicationFieldChanged(ApplicationField, String),
    SubmitApplication,

    /// `POST /api/jobs/{id}/apply` finished
    ApplicationSent {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },
}

/// Text fields of the job form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    Field,
    Description,
    Requirements,
    Salary,
    ContactEmail,
}

impl JobField {
    pub fn apply(self, form: &mut JobForm, value: String) {
        let slot = match self {
            Self::Title => &mut form.title,
            Self::Company => &mut form.company,
            Self::Location => &mut form.location,
            Self::Field => &mut form.field,
            Self::Description => &mut form.description,
            Self::Requirements => &mut form.requirements,
            Self::Salary => &mut form.salary,
            Self::ContactEmail => &mut form.contact_email,
        };
        *slot = value;
    }
}

/// Fields of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    CoverLetter,
    Resume,
}

impl ApplicationField {
    pub fn apply(self, form: &mut ApplicationForm, value: String) {
        match self {
            Self::CoverLetter => form.cover_letter = value,
            Self::Resume => form.resume = value,
        }
    }
}
