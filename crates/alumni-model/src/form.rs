//! User-editable forms.
//!
//! Forms hold raw text exactly as typed. [`validate`](JobForm::validate) checks
//! required fields in display order and returns the first problem; the
//! `to_request` builders validate first and then apply the submission
//! defaults (organizer names, anonymous ids and so on).

use chrono::NaiveDate;

use crate::entity::User;
use crate::error::{FormError, Result};
use crate::id::RecordId;
use crate::options::{CampaignCategory, EventType, JobType};
use crate::request::{
    ApplicationRequest, CampaignRequest, DonationRequest, EventRequest, JobRequest, LoginRequest,
    RegisterRequest, RegistrationRequest,
};

pub const DEFAULT_ORGANIZER: &str = "Alumni Association";
pub const DEFAULT_EVENT_CONTACT: &str = "events@alumni.edu";
pub const DEFAULT_CAMPAIGN_CONTACT: &str = "donations@alumni.edu";
pub const ANONYMOUS_NAME: &str = "Anonymous";
pub const ANONYMOUS_EMAIL: &str = "anonymous@email.com";

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(FormError::Missing { field })
    } else {
        Ok(())
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Credentials and registration details.
///
/// The login and register dialogs edit the same record, so text typed into
/// one is still there when the user switches to the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: String,
    pub field_of_study: String,
}

impl AuthForm {
    pub fn validate_login(&self) -> Result<()> {
        require(&self.email, "Email")?;
        require(&self.password, "Password")
    }

    pub fn validate_register(&self) -> Result<()> {
        require(&self.first_name, "First Name")?;
        require(&self.last_name, "Last Name")?;
        require(&self.email, "Email")?;
        require(&self.password, "Password")?;
        require(&self.graduation_year, "Graduation Year")?;
        if self.graduation_year.trim().parse::<i32>().is_err() {
            return Err(FormError::Invalid {
                field: "Graduation Year",
                reason: "must be a year",
            });
        }
        require(&self.field_of_study, "Field of Study")
    }

    pub fn login_request(&self) -> Result<LoginRequest> {
        self.validate_login()?;
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn register_request(&self) -> Result<RegisterRequest> {
        self.validate_register()?;
        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            graduation_year: self.graduation_year.trim().to_string(),
            field_of_study: self.field_of_study.clone(),
        })
    }
}

// =============================================================================
// JOBS
// =============================================================================

/// The "Post a Job" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub field: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub contact_email: String,
}

impl JobForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.title, "Job Title")?;
        require(&self.company, "Company")?;
        require(&self.location, "Location")?;
        require(&self.field, "Field")?;
        require(&self.description, "Job Description")?;
        require(&self.requirements, "Requirements")?;
        require(&self.salary, "Salary Range")?;
        require(&self.contact_email, "Contact Email")
    }

    /// Build the request; `postedBy` is the poster's name or "Anonymous".
    pub fn to_request(&self, poster: Option<&User>) -> Result<JobRequest> {
        self.validate()?;
        let posted_by = poster
            .map(User::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ANONYMOUS_NAME.to_string());
        Ok(JobRequest {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            job_type: self.job_type.label().to_string(),
            field: self.field.clone(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            salary: self.salary.clone(),
            contact_email: self.contact_email.clone(),
            posted_by,
        })
    }
}

/// A job application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub cover_letter: String,
    pub resume: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.cover_letter, "Cover Letter")?;
        require(&self.resume, "Resume/CV")
    }

    pub fn to_request(&self, applicant: &User) -> Result<ApplicationRequest> {
        self.validate()?;
        Ok(ApplicationRequest {
            applicant_id: applicant.id.clone(),
            cover_letter: self.cover_letter.clone(),
            resume: self.resume.clone(),
        })
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// The "Create Event" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub location: String,
    pub event_type: EventType,
    pub capacity: String,
    pub organizer: String,
    pub contact_email: String,
}

impl EventForm {
    pub fn validate(&self) -> Result<()> {
        self.validated_capacity().map(|_| ())
    }

    fn validated_capacity(&self) -> Result<u32> {
        require(&self.title, "Event Title")?;
        require(&self.description, "Description")?;
        require(&self.date, "Date")?;
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(FormError::Invalid {
                field: "Date",
                reason: "must be a date (YYYY-MM-DD)",
            });
        }
        require(&self.time, "Time")?;
        require(&self.location, "Location")?;
        require(&self.capacity, "Capacity")?;
        match self.capacity.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(FormError::Invalid {
                field: "Capacity",
                reason: "must be a positive whole number",
            }),
        }
    }

    pub fn to_request(&self) -> Result<EventRequest> {
        let capacity = self.validated_capacity()?;
        Ok(EventRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.trim().to_string(),
            time: self.time.clone(),
            location: self.location.clone(),
            event_type: self.event_type.label().to_string(),
            capacity,
            organizer: or_default(&self.organizer, DEFAULT_ORGANIZER),
            contact_email: or_default(&self.contact_email, DEFAULT_EVENT_CONTACT),
        })
    }
}

/// Registration for a single event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub attendee_name: String,
    pub attendee_email: String,
}

impl RegistrationForm {
    /// Form prefilled with the attendee's own name and email.
    pub fn for_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |u| Self {
            attendee_name: u.full_name(),
            attendee_email: u.email.clone(),
        })
    }

    /// Validate after applying the user defaults, so an empty field is fine
    /// as long as the user record can fill it.
    pub fn validate(&self, user: Option<&User>) -> Result<()> {
        self.to_request(user).map(|_| ())
    }

    pub fn to_request(&self, user: Option<&User>) -> Result<RegistrationRequest> {
        let fallback_name = user.map(User::full_name).unwrap_or_default();
        let fallback_email = user.map(|u| u.email.as_str()).unwrap_or_default();

        let attendee_name = or_default(&self.attendee_name, &fallback_name);
        let attendee_email = or_default(&self.attendee_email, fallback_email);
        require(&attendee_name, "Full Name")?;
        require(&attendee_email, "Email")?;

        Ok(RegistrationRequest {
            attendee_id: user
                .and_then(|u| u.id.clone())
                .unwrap_or(RecordId::ANONYMOUS),
            attendee_name,
            attendee_email,
        })
    }
}

// =============================================================================
// CAMPAIGNS
// =============================================================================

/// The "Create Campaign" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub goal: String,
    pub category: CampaignCategory,
    pub organizer: String,
    pub contact_email: String,
}

impl CampaignForm {
    pub fn validate(&self) -> Result<()> {
        self.validated_goal().map(|_| ())
    }

    fn validated_goal(&self) -> Result<f64> {
        require(&self.title, "Campaign Title")?;
        require(&self.description, "Description")?;
        require(&self.goal, "Goal Amount")?;
        match self.goal.trim().parse::<f64>() {
            Ok(goal) if goal.is_finite() && goal > 0.0 => Ok(goal),
            _ => Err(FormError::Invalid {
                field: "Goal Amount",
                reason: "must be a positive amount",
            }),
        }
    }

    pub fn to_request(&self) -> Result<CampaignRequest> {
        let goal = self.validated_goal()?;
        Ok(CampaignRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            goal,
            category: self.category.label().to_string(),
            organizer: or_default(&self.organizer, DEFAULT_ORGANIZER),
            contact_email: or_default(&self.contact_email, DEFAULT_CAMPAIGN_CONTACT),
        })
    }
}

/// A donation to a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub amount: String,
    pub message: String,
    pub is_anonymous: bool,
}

impl DonationForm {
    pub fn validate(&self) -> Result<()> {
        self.validated_amount().map(|_| ())
    }

    fn validated_amount(&self) -> Result<f64> {
        require(&self.amount, "Donation Amount")?;
        match self.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 1.0 => Ok(amount),
            _ => Err(FormError::Invalid {
                field: "Donation Amount",
                reason: "must be at least $1",
            }),
        }
    }

    pub fn to_request(&self, donor: Option<&User>) -> Result<DonationRequest> {
        let amount = self.validated_amount()?;
        let donor_name = if self.is_anonymous {
            ANONYMOUS_NAME.to_string()
        } else {
            donor
                .map(User::full_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
        };
        let donor_email = donor
            .map(|u| u.email.clone())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| ANONYMOUS_EMAIL.to_string());

        Ok(DonationRequest {
            donor_id: donor
                .and_then(|u| u.id.clone())
                .unwrap_or(RecordId::ANONYMOUS),
            donor_name,
            donor_email,
            amount,
            message: self.message.clone(),
            is_anonymous: self.is_anonymous,
        })
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// The "Edit Profile" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub graduation_year: String,
    pub field_of_study: String,
    pub current_company: String,
    pub job_title: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            graduation_year: user.graduation_year.clone(),
            field_of_study: user.field_of_study.clone(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.first_name, "First Name")?;
        require(&self.last_name, "Last Name")?;
        require(&self.email, "Email")
    }
}

/// The "Change Password" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.current_password, "Current Password")?;
        require(&self.new_password, "New Password")?;
        require(&self.confirm_password, "Confirm New Password")?;
        if self.new_password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: Some(RecordId::Int(42)),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..User::default()
        }
    }

    #[test]
    fn test_login_requires_email_then_password() {
        let mut form = AuthForm::default();
        assert_eq!(
            form.validate_login(),
            Err(FormError::Missing { field: "Email" })
        );
        form.email = "a@b.c".into();
        assert_eq!(
            form.validate_login(),
            Err(FormError::Missing { field: "Password" })
        );
        form.password = "secret".into();
        assert!(form.login_request().is_ok());
    }

    #[test]
    fn test_register_rejects_non_numeric_year() {
        let form = AuthForm {
            email: "a@b.c".into(),
            password: "pw".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            graduation_year: "last year".into(),
            field_of_study: "CS".into(),
        };
        assert!(matches!(
            form.validate_register(),
            Err(FormError::Invalid {
                field: "Graduation Year",
                ..
            })
        ));
    }

    #[test]
    fn test_job_posted_by() {
        let form = JobForm {
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            field: "Software".into(),
            description: "Build".into(),
            requirements: "Rust".into(),
            salary: "$100k".into(),
            contact_email: "hr@acme.test".into(),
            ..JobForm::default()
        };
        assert_eq!(form.to_request(Some(&ada())).unwrap().posted_by, "Ada Lovelace");
        let anon = form.to_request(None).unwrap();
        assert_eq!(anon.posted_by, "Anonymous");
        assert_eq!(anon.job_type, "Full-time");
    }

    #[test]
    fn test_event_defaults_organizer_and_contact() {
        let form = EventForm {
            title: "Gala".into(),
            description: "Annual".into(),
            date: "2025-03-15".into(),
            time: "18:00".into(),
            location: "Hall".into(),
            capacity: "50".into(),
            ..EventForm::default()
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.organizer, DEFAULT_ORGANIZER);
        assert_eq!(req.contact_email, DEFAULT_EVENT_CONTACT);
        assert_eq!(req.capacity, 50);
        assert_eq!(req.event_type, "Reunion");
    }

    #[test]
    fn test_event_capacity_must_be_positive() {
        let form = EventForm {
            title: "Gala".into(),
            description: "Annual".into(),
            date: "2025-03-15".into(),
            time: "18:00".into(),
            location: "Hall".into(),
            capacity: "0".into(),
            ..EventForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_password_mismatch() {
        let form = PasswordForm {
            current_password: "old".into(),
            new_password: "new-1".into(),
            confirm_password: "new-2".into(),
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_profile_prefill() {
        let form = ProfileForm::from_user(&ada());
        assert_eq!(form.first_name, "Ada");
        assert!(form.bio.is_empty());
        assert!(form.validate().is_ok());
    }
}
