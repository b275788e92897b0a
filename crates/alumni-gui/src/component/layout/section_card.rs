//! Section card and list card containers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use alumni_gui::component::{SectionCard, list_card};
//! use iced_fonts::lucide;
//!
//! SectionCard::new("Recent Activity", content)
//!     .icon(lucide::history().size(14))
//!     .view()
//!
//! list_card(job_content)
//! ```

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::theme::{CARD_WIDTH, SPACING_MD, SPACING_SM, container_card, container_surface};

// =============================================================================
// SECTION CARD
// =============================================================================

/// A titled section card with optional icon.
pub struct SectionCard<'a, M> {
    title: String,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    /// Create a new section card with title and content.
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content: content.into(),
        }
    }

    /// Add an icon to the header.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let Self {
            title,
            icon,
            content,
        } = self;

        let title_text = text(title).size(16).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

        let header: Element<'a, M> = match icon {
            Some(ic) => row![
                container(ic).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.extended_palette().primary.base.color),
                    ..Default::default()
                }),
                Space::new().width(SPACING_SM),
                title_text,
            ]
            .align_y(Alignment::Center)
            .into(),
            None => title_text.into(),
        };

        container(column![header, Space::new().height(SPACING_SM), content].width(Length::Fill))
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(container_card)
            .into()
    }
}

// =============================================================================
// LIST CARD
// =============================================================================

/// Fixed-width card used in the list grids.
pub fn list_card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container_card)
        .into()
}

/// Flat tinted panel for stat tiles.
pub fn panel<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_surface)
        .into()
}

/// Lay cards out left to right, wrapping onto new rows.
pub fn card_grid<'a, M: 'a>(cards: Vec<Element<'a, M>>) -> Element<'a, M> {
    let cells = cards
        .into_iter()
        .map(|card| container(card).padding(Padding::ZERO.bottom(SPACING_MD)).into());
    iced::widget::row(cells).spacing(SPACING_MD).wrap().into()
}
