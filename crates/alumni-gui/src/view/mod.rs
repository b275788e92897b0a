//! View module for the Alumni Portal.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `shell.rs` - Header, navigation, theme toggle, auth dialogs, alerts
//! - `home.rs` / `stories.rs` - Static tabs
//! - `directory.rs`, `jobs.rs`, `events.rs`, `donations.rs` - Backend-driven lists
//! - `profile.rs` - Profile dashboard

pub mod directory;
pub mod donations;
pub mod events;
pub mod home;
pub mod jobs;
pub mod profile;
pub mod shell;
pub mod stories;

pub use shell::view_app;

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{LoadingState, card_grid};
use crate::message::Message;
use crate::state::ListStatus;
use crate::theme::{PortalColors, SPACING_LG, SPACING_XS};

/// Muted body text.
pub(crate) fn muted<'a>(content: impl Into<String>) -> iced::widget::Text<'a> {
    text(content.into())
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.portal().text_muted),
        })
}

/// Card title text.
pub(crate) fn card_title<'a>(content: impl Into<String>) -> iced::widget::Text<'a> {
    text(content.into()).size(18)
}

/// Sub-heading inside a dialog or section.
pub(crate) fn heading<'a>(content: impl Into<String>) -> iced::widget::Text<'a> {
    text(content.into()).size(16).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

/// Body of a list tab: the loading message until the first fetch completes,
/// then the card grid with a small indicator while a refetch is pending.
pub(crate) fn list_body<'a>(
    status: &ListStatus,
    loading_label: &'static str,
    cards: Vec<Element<'a, Message>>,
    empty: Element<'a, Message>,
) -> Element<'a, Message> {
    if status.loading {
        return LoadingState::new(loading_label).view();
    }

    let grid = if cards.is_empty() {
        empty
    } else {
        card_grid(cards)
    };

    if status.in_flight == 0 {
        return grid;
    }

    let indicator = row![
        container(lucide::refresh_cw().size(12)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.portal().text_muted),
            ..Default::default()
        }),
        muted("Refreshing...").size(12),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    column![indicator, grid].spacing(SPACING_XS).into()
}

/// Standard page frame: header, then filters, then the body.
pub(crate) fn page<'a>(
    header: Element<'a, Message>,
    filters: Option<Element<'a, Message>>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut content = column![header].spacing(SPACING_LG);
    if let Some(filters) = filters {
        content = content.push(filters);
    }
    content
        .push(body)
        .push(Space::new().height(SPACING_LG))
        .width(Length::Fill)
        .into()
}
