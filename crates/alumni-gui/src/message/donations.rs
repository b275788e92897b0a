//! Donations tab messages.

use alumni_client::ApiError;
use alumni_model::{Campaign, CampaignCategory, CampaignForm, DonationForm};

use crate::state::{Choice, TabInstance};

/// Messages for the Donations tab.
#[derive(Debug, Clone)]
pub enum DonationsMessage {
    // =========================================================================
    // List
    // =========================================================================
    SearchChanged(String),
    CategorySelected(Choice<CampaignCategory>),
    SearchPressed,

    /// `GET /api/campaigns` finished
    Loaded {
        instance: TabInstance,
        result: Result<Vec<Campaign>, ApiError>,
    },

    // =========================================================================
    // Dialogs
    // =========================================================================
    OpenCreate,
    ViewDetails(Campaign),
    OpenDonate(Campaign),
    CloseModal,

    // =========================================================================
    // Create campaign
    // =========================================================================
    CampaignFieldChanged(CampaignField, String),
    CampaignCategoryChanged(CampaignCategory),
    SubmitCampaign,

    /// `POST /api/campaigns` finished
    CampaignCreated {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },

    // =========================================================================
    // Donate
    // =========================================================================
    DonationFieldChanged(DonationField, String),
    AnonymousToggled(bool),
    SubmitDonation,

    /// `POST /api/campaigns/{id}/donate` finished
    Donated {
        instance: TabInstance,
        result: Result<(), ApiError>,
    },
}

/// Text fields of the campaign form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignField {
    Title,
    Description,
    Goal,
    Organizer,
    ContactEmail,
}

impl CampaignField {
    pub fn apply(self, form: &mut CampaignForm, value: String) {
        let slot = match self {
            Self::Title => &mut form.title,
            Self::Description => &mut form.description,
            Self::Goal => &mut form.goal,
            Self::Organizer => &mut form.organizer,
            Self::ContactEmail => &mut form.contact_email,
        };
        *slot = value;
    }
}

/// Text fields of the donation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationField {
    Amount,
    Message,
}

impl DonationField {
    pub fn apply(self, form: &mut DonationForm, value: String) {
        match self {
            Self::Amount => form.amount = value,
            Self::Message => form.message = value,
        }
    }
}
