//! Home tab: welcome banner, headline figures, and feature highlights.
//!
//! The figures are placeholders and carry the "demo" tag.

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::{heading, muted};
use crate::component::{SectionCard, demo_tag, panel};
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS};

const STATS: [(&str, &str); 4] = [
    ("1,250+", "Active Alumni"),
    ("50+", "Companies"),
    ("25+", "Events This Year"),
    ("$50K+", "Total Donations"),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Alumni Directory",
        "Connect with fellow graduates and expand your professional network through our comprehensive alumni directory.",
    ),
    (
        "Job Portal",
        "Find career opportunities and post job openings within the alumni network to support professional growth.",
    ),
    (
        "Events & Reunions",
        "Stay updated on upcoming events, reunions, and professional development opportunities.",
    ),
    (
        "Donations",
        "Support your alma mater through secure donation channels to contribute to institutional development.",
    ),
];

/// Render the Home tab.
pub fn view_home<'a>() -> Element<'a, Message> {
    let title = text("Welcome to Alumni Association")
        .size(28)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let stats = STATS.iter().fold(row![].spacing(SPACING_MD), |r, (figure, label)| {
        r.push(panel(
            column![
                row![text(*figure).size(26), demo_tag()]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center),
                muted(*label),
            ]
            .spacing(SPACING_XS)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        ))
    });

    let features = FEATURES
        .iter()
        .fold(column![].spacing(SPACING_MD), |c, (name, blurb)| {
            c.push(column![heading(*name), muted(*blurb)].spacing(SPACING_XS))
        });

    column![
        title,
        Space::new().height(SPACING_SM),
        stats,
        Space::new().height(SPACING_LG),
        SectionCard::new("Platform Features", features)
            .icon(lucide::wand_sparkles().size(16))
            .view(),
    ]
    .spacing(SPACING_MD)
    .width(Length::Fill)
    .into()
}
