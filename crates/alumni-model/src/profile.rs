//! Sample data for the profile dashboard.
//!
//! The dashboard is not backed by any endpoint yet; it renders this fixed
//! activity history and these statistics for every signed-in user.

use crate::options::BadgeColor;

/// Kind of activity shown in the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Donation,
    Event,
    Job,
}

impl ActivityKind {
    pub fn color(self) -> BadgeColor {
        match self {
            Self::Donation => BadgeColor(0x4CAF50),
            Self::Event => BadgeColor(0x2196F3),
            Self::Job => BadgeColor(0xFF9800),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Donation => "Donation",
            Self::Event => "Event",
            Self::Job => "Job",
        }
    }
}

/// One entry in the activity history.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub amount: Option<String>,
    pub company: Option<String>,
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub total_donations: u32,
    pub total_amount: String,
    pub events_attended: u32,
    pub jobs_applied: u32,
    /// Percent, `0..=100`.
    pub profile_completeness: u8,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            total_donations: 3,
            total_amount: "$1,250".to_string(),
            events_attended: 5,
            jobs_applied: 8,
            profile_completeness: 85,
        }
    }
}

/// Number of activities previewed in the overview section.
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

/// The fixed activity history, newest first.
pub fn sample_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Donation,
            title: "Donated to Student Scholarship Fund".to_string(),
            date: "2024-01-20".to_string(),
            description: "Supporting student scholarships".to_string(),
            amount: Some("$500".to_string()),
            company: None,
        },
        Activity {
            id: 2,
            kind: ActivityKind::Event,
            title: "Registered for Annual Alumni Reunion".to_string(),
            date: "2024-01-15".to_string(),
            description: "Looking forward to connecting with fellow alumni".to_string(),
            amount: None,
            company: None,
        },
        Activity {
            id: 3,
            kind: ActivityKind::Job,
            title: "Applied for Senior Software Engineer".to_string(),
            date: "2024-01-10".to_string(),
            description: "Application submitted successfully".to_string(),
            amount: None,
            company: Some("TechCorp".to_string()),
        },
    ]
}
