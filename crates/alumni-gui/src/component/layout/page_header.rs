//! Page header component.
//!
//! Title on the left, actions on the right.
//!
//! # Usage
//!
//! ```rust,ignore
//! use alumni_gui::component::PageHeader;
//!
//! PageHeader::new("Job Portal")
//!     .action_if(logged_in, "Post a Job", Message::Jobs(JobsMessage::OpenPostJob))
//!     .view()
//! ```

use iced::widget::{button, row, space, text};
use iced::{Alignment, Element, Theme};

use crate::theme::{SPACING_SM, button_primary};

/// Page header with title and trailing buttons.
pub struct PageHeader<'a, M> {
    title: String,
    actions: Vec<Element<'a, M>>,
}

impl<'a, M: Clone + 'a> PageHeader<'a, M> {
    /// Create a new page header with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }

    /// Add a primary action button.
    pub fn action(mut self, label: &'a str, message: M) -> Self {
        self.actions.push(
            button(text(label).size(14))
                .on_press(message)
                .padding([10.0, 20.0])
                .style(button_primary)
                .into(),
        );
        self
    }

    /// Add a primary action button only when `show` holds.
    pub fn action_if(self, show: bool, label: &'a str, message: M) -> Self {
        if show { self.action(label, message) } else { self }
    }

    /// Add arbitrary trailing content.
    pub fn trailing(mut self, content: impl Into<Element<'a, M>>) -> Self {
        self.actions.push(content.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let title = text(self.title).size(26).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

        self.actions
            .into_iter()
            .fold(row![title, space::horizontal()], |r, action| r.push(action))
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into()
    }
}
