//! Closed option sets offered by the create forms and filter selects.
//!
//! The backend stores these as plain strings, so entities keep the raw value
//! and these enums are used for pickers and badge colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB badge color, stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColor(pub u32);

impl BadgeColor {
    /// Color used for values outside the known option set.
    pub const UNKNOWN: BadgeColor = BadgeColor(0x666666);

    pub fn rgb8(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

const PALETTE: [BadgeColor; 5] = [
    BadgeColor(0x4CAF50),
    BadgeColor(0x2196F3),
    BadgeColor(0xFF9800),
    BadgeColor(0x9C27B0),
    BadgeColor(0xF44336),
];

// =============================================================================
// JOB TYPE
// =============================================================================

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [Self; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }

    /// Parse a label exactly as the backend spells it.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// EVENT TYPE
// =============================================================================

/// Kind of alumni event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    Reunion,
    Networking,
    Workshop,
    Homecoming,
    Conference,
}

impl EventType {
    pub const ALL: [Self; 5] = [
        Self::Reunion,
        Self::Networking,
        Self::Workshop,
        Self::Homecoming,
        Self::Conference,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reunion => "Reunion",
            Self::Networking => "Networking",
            Self::Workshop => "Workshop",
            Self::Homecoming => "Homecoming",
            Self::Conference => "Conference",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value)
    }

    /// Badge color for a raw type string as stored by the backend.
    pub fn color_for(value: &str) -> BadgeColor {
        Self::parse(value).map_or(BadgeColor::UNKNOWN, |t| PALETTE[t as usize])
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// CAMPAIGN CATEGORY
// =============================================================================

/// Category of a fundraising campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CampaignCategory {
    #[default]
    Scholarship,
    Infrastructure,
    Sports,
    Research,
    Technology,
}

impl CampaignCategory {
    pub const ALL: [Self; 5] = [
        Self::Scholarship,
        Self::Infrastructure,
        Self::Sports,
        Self::Research,
        Self::Technology,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scholarship => "Scholarship",
            Self::Infrastructure => "Infrastructure",
            Self::Sports => "Sports",
            Self::Research => "Research",
            Self::Technology => "Technology",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == value)
    }

    /// Badge color for a raw category string as stored by the backend.
    pub fn color_for(value: &str) -> BadgeColor {
        Self::parse(value).map_or(BadgeColor::UNKNOWN, |c| PALETTE[c as usize])
    }
}

impl fmt::Display for CampaignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_colors() {
        assert_eq!(EventType::color_for("Reunion"), BadgeColor(0x4CAF50));
        assert_eq!(EventType::color_for("Conference"), BadgeColor(0xF44336));
        assert_eq!(EventType::color_for("Gala"), BadgeColor::UNKNOWN);
    }

    #[test]
    fn test_category_colors_follow_option_order() {
        assert_eq!(
            CampaignCategory::color_for("Infrastructure"),
            BadgeColor(0x2196F3)
        );
        assert_eq!(CampaignCategory::color_for("Research"), BadgeColor(0x9C27B0));
    }

    #[test]
    fn test_job_type_wire_names() {
        let json = serde_json::to_string(&JobType::PartTime).unwrap();
        assert_eq!(json, "\"Part-time\"");
        assert_eq!(JobType::default(), JobType::FullTime);
        assert_eq!(JobType::parse("Internship"), Some(JobType::Internship));
        assert_eq!(JobType::parse("full-time"), None);
    }

    #[test]
    fn test_rgb8() {
        assert_eq!(BadgeColor(0x2196F3).rgb8(), (0x21, 0x96, 0xF3));
    }
}
