//! Success Stories tab.

use iced::Element;
use iced_fonts::lucide;

use crate::component::EmptyState;
use crate::message::Message;

/// Render the Success Stories placeholder.
pub fn view_stories<'a>() -> Element<'a, Message> {
    EmptyState::new(lucide::book_open().size(40), "Success Stories")
        .description(
            "Success stories functionality coming soon. This will showcase alumni \
             achievements and notable contributions.",
        )
        .view()
}
