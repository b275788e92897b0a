//! Records mirrored from the backend.
//!
//! All JSON keys are camelCase. Fields the backend may omit or send as `null`
//! default to empty values, and ids may arrive as `id` or `_id`, so a
//! partially populated record still renders.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::lenient;

// =============================================================================
// USERS
// =============================================================================

/// The authenticated user returned by the login and register endpoints.
///
/// The payload is flat: profile fields sit next to the session `token`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub graduation_year: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub field_of_study: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Name used in the header greeting.
    pub fn greeting_name(&self) -> &str {
        if self.first_name.is_empty() {
            "Alumni"
        } else {
            &self.first_name
        }
    }
}

/// A member listed in the alumni directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniProfile {
    #[serde(
        default,
        rename = "_id",
        alias = "id",
        deserialize_with = "lenient::null_as_default"
    )]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub graduation_year: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub field_of_study: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
}

impl AlumniProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Employer line, present only when a non-empty company is recorded.
    pub fn employer(&self) -> Option<&str> {
        self.current_company.as_deref().filter(|c| !c.is_empty())
    }
}

// =============================================================================
// JOBS
// =============================================================================

/// A job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, alias = "_id", deserialize_with = "lenient::null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub location: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::string_from_any")]
    pub job_type: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub requirements: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub salary: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub posted_by: String,
    /// Creation timestamp set by the backend.
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub applications: Vec<JobApplication>,
}

/// An application submitted against a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(default)]
    pub applicant_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub cover_letter: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub resume: String,
}

// =============================================================================
// EVENTS
// =============================================================================

/// An alumni event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, alias = "_id", deserialize_with = "lenient::null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub description: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub location: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::string_from_any")]
    pub event_type: String,
    #[serde(default, deserialize_with = "lenient::u32_from_any")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "lenient::u32_from_any")]
    pub registered_count: u32,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub organizer: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub registrations: Vec<Registration>,
}

impl Event {
    /// Whether there is room for another attendee.
    pub fn has_capacity(&self) -> bool {
        self.registered_count < self.capacity
    }
}

/// A registration for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub attendee_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub attendee_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub attendee_email: String,
}

// =============================================================================
// CAMPAIGNS
// =============================================================================

/// A fundraising campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default, alias = "_id", deserialize_with = "lenient::null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::f64_from_any")]
    pub goal: f64,
    #[serde(default, deserialize_with = "lenient::f64_from_any")]
    pub raised: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub organizer: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub donations: Vec<Donation>,
}

impl Campaign {
    /// Funding progress in percent, clamped to `0..=100`.
    pub fn progress(&self) -> f64 {
        crate::format::progress_percentage(self.raised, self.goal)
    }
}

/// A donation made to a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(default)]
    pub donor_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub donor_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub donor_email: String,
    #[serde(default, deserialize_with = "lenient::f64_from_any")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub is_anonymous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_flat_login_payload() {
        let json = r#"{
            "token": "abc",
            "id": 3,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "graduationYear": 2015,
            "fieldOfStudy": "Mathematics"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.token.as_deref(), Some("abc"));
        assert_eq!(user.id, Some(RecordId::Int(3)));
        assert_eq!(user.graduation_year, "2015");
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_greeting_falls_back_to_alumni() {
        let user = User::default();
        assert_eq!(user.greeting_name(), "Alumni");
    }

    #[test]
    fn test_alumni_profile_uses_document_id() {
        let json = r#"{"_id":"a1","firstName":"Grace","lastName":"Hopper","graduationYear":"1934","fieldOfStudy":"Math","currentCompany":""}"#;
        let p: AlumniProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, RecordId::from("a1"));
        assert_eq!(p.employer(), None);
    }

    #[test]
    fn test_event_capacity() {
        let json = r#"{"id":1,"title":"Reunion","capacity":"100","registeredCount":100}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.capacity, 100);
        assert!(!event.has_capacity());
    }

    #[test]
    fn test_job_type_key() {
        let json = r#"{"id":9,"title":"Engineer","type":"Contract"}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, "Contract");
        assert!(job.applications.is_empty());
    }

    #[test]
    fn test_list_mixes_numeric_and_document_ids() {
        let json = r#"[{"id":1,"title":"A"},{"_id":"65a1","title":"B"}]"#;
        let jobs: Vec<JobPosting> = serde_json::from_str(json).unwrap();
        assert_eq!(jobs[0].id, RecordId::Int(1));
        assert_eq!(jobs[1].id, RecordId::from("65a1"));

        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events[1].id, RecordId::from("65a1"));

        let campaigns: Vec<Campaign> = serde_json::from_str(json).unwrap();
        assert_eq!(campaigns[1].id, RecordId::from("65a1"));
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "id": 4,
            "title": "Gala",
            "organizer": null,
            "contactEmail": null,
            "type": null,
            "capacity": null,
            "registrations": null
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.organizer, "");
        assert_eq!(event.contact_email, "");
        assert_eq!(event.event_type, "");
        assert_eq!(event.capacity, 0);
        assert!(event.registrations.is_empty());

        let json = r#"{"_id":"c1","title":"Fund","organizer":null,"donations":null}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.organizer, "");
        assert!(campaign.donations.is_empty());
    }

    #[test]
    fn test_missing_or_null_id_falls_back_to_default() {
        let profile: AlumniProfile =
            serde_json::from_str(r#"{"firstName":"Grace","lastName":null}"#).unwrap();
        assert_eq!(profile.id, RecordId::default());
        assert_eq!(profile.full_name(), "Grace");

        let job: JobPosting = serde_json::from_str(r#"{"id":null,"title":"Engineer"}"#).unwrap();
        assert_eq!(job.id, RecordId::default());
    }

    #[test]
    fn test_anonymous_flag_accepts_null() {
        let json = r#"{"donorName":"Ada","amount":"25","isAnonymous":null}"#;
        let donation: Donation = serde_json::from_str(json).unwrap();
        assert!(!donation.is_anonymous);
        assert_eq!(donation.amount, 25.0);
    }
}
