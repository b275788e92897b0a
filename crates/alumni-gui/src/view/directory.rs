//! Alumni directory tab.

use alumni_model::{AlumniProfile, initials};
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use super::{card_title, list_body, muted, page};
use crate::component::{EmptyState, PageHeader, avatar, list_card, search_input};
use crate::message::{DirectoryMessage, Message};
use crate::state::DirectoryState;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_primary};

/// Render the Directory tab.
pub fn view_directory(directory: &DirectoryState) -> Element<'_, Message> {
    let header = PageHeader::new("Alumni Directory").view();

    let filters = row![
        search_input(
            &directory.filter.search,
            "Search alumni...",
            |v| Message::Directory(DirectoryMessage::SearchChanged(v)),
            Some(Message::Directory(DirectoryMessage::SearchPressed)),
        ),
        button(text("Search").size(14))
            .on_press(Message::Directory(DirectoryMessage::SearchPressed))
            .padding([8.0, 20.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let cards = directory.alumni.iter().map(alumni_card).collect();
    let empty = EmptyState::new(lucide::users().size(40), "No alumni found").view();

    page(
        header,
        Some(filters.into()),
        list_body(&directory.status, "Loading alumni directory...", cards, empty),
    )
}

fn alumni_card(person: &AlumniProfile) -> Element<'_, Message> {
    let mut info = column![
        card_title(person.full_name()),
        muted(format!("Class of {}", person.graduation_year)),
        muted(person.field_of_study.as_str()),
    ]
    .spacing(SPACING_XS);

    if let Some(company) = person.employer() {
        info = info.push(muted(format!("Works at {company}")));
    }

    list_card(
        row![
            avatar(initials(&person.first_name, &person.last_name), None),
            info
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
}
