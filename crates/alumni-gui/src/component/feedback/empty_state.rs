//! Empty and loading state components.
//!
//! # Usage
//!
//! ```rust,ignore
//! use alumni_gui::component::{EmptyState, LoadingState};
//! use iced_fonts::lucide;
//!
//! EmptyState::new(lucide::briefcase().size(40), "No jobs found")
//!     .description("Try a different search or location")
//!     .view()
//!
//! LoadingState::new("Loading jobs...").centered().view()
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{PortalColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_primary};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
            centered: false,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let icon = container(self.icon).style(|theme: &Theme| container::Style {
            text_color: Some(theme.portal().text_disabled),
            ..Default::default()
        });

        let title_text = text(self.title)
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.portal().text_muted),
            });

        let mut content = column![icon, Space::new().height(SPACING_MD), title_text];

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(|theme: &Theme| text::Style {
                    color: Some(theme.portal().text_muted),
                }));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        wrap(content.align_x(Alignment::Center).into(), self.centered)
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state with spinner and message.
pub struct LoadingState {
    title: String,
    centered: bool,
}

impl LoadingState {
    /// Create a new loading state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            centered: false,
        }
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        // Lucide glyphs take their color from the surrounding container.
        let icon = container(lucide::loader().size(40)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().primary.base.color),
            ..Default::default()
        });

        let title_text = text(self.title)
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            });

        let content =
            column![icon, Space::new().height(SPACING_LG), title_text].align_x(Alignment::Center);

        wrap(content.into(), self.centered)
    }
}

fn wrap<'a, M: 'a>(content: Element<'a, M>, centered: bool) -> Element<'a, M> {
    if centered {
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        container(content)
            .padding([SPACING_XL, 0.0])
            .center_x(Length::Fill)
            .into()
    }
}
