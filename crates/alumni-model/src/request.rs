//! JSON request bodies sent to the backend.
//!
//! These are built from validated forms (see [`crate::form`]) and serialized
//! with camelCase keys.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: String,
    pub field_of_study: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub field: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub contact_email: String,
    pub posted_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub applicant_id: Option<RecordId>,
    pub cover_letter: String,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub capacity: u32,
    pub organizer: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub attendee_id: RecordId,
    pub attendee_name: String,
    pub attendee_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub title: String,
    pub description: String,
    pub goal: f64,
    pub category: String,
    pub organizer: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub donor_id: RecordId,
    pub donor_name: String,
    pub donor_email: String,
    pub amount: f64,
    pub message: String,
    pub is_anonymous: bool,
}
