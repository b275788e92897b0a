//! Events & Reunions tab and its dialogs.

use alumni_model::{Event, EventType, FormError, format_event_date};
use iced::widget::{Space, button, column, pick_list, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::{card_title, heading, list_body, muted, page};
use crate::component::{
    EmptyState, PageHeader, color_badge, demo_tag, field_error, form_field, form_modal, info_row,
    info_row_with, list_card, mail_row, modal, search_input, select_field,
};
use crate::message::{EventField, EventsMessage, Message, RegistrationField};
use crate::state::{Choice, EventsModal, EventsState, Session};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_primary, button_secondary};

/// Render the Events tab.
pub fn view_events<'a>(session: &'a Session, events: &'a EventsState) -> Element<'a, Message> {
    let header = PageHeader::new("Events & Reunions")
        .action_if(
            session.logged_in,
            "Create Event",
            Message::Events(EventsMessage::OpenCreate),
        )
        .view();

    let filters = row![
        search_input(
            &events.filter.search,
            "Search events...",
            |v| Message::Events(EventsMessage::SearchChanged(v)),
            Some(Message::Events(EventsMessage::SearchPressed)),
        ),
        pick_list(
            Choice::options(EventsState::ANY_TYPE, &EventType::ALL),
            Some(events.type_choice),
            |choice| Message::Events(EventsMessage::TypeSelected(choice)),
        )
        .padding(8.0)
        .width(Length::Fixed(180.0)),
        button(text("Search").size(14))
            .on_press(Message::Events(EventsMessage::SearchPressed))
            .padding([8.0, 20.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let cards = events
        .events
        .iter()
        .map(|event| event_card(event, session.logged_in))
        .collect();
    let empty = EmptyState::new(lucide::calendar().size(40), "No events found").view();

    page(
        header,
        Some(filters.into()),
        list_body(&events.status, "Loading events...", cards, empty),
    )
}

fn type_badge(event: &Event) -> Element<'_, Message> {
    row![
        color_badge(
            event.event_type.as_str(),
            EventType::color_for(&event.event_type)
        ),
        demo_tag()
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn capacity(event: &Event) -> String {
    format!("{}/{}", event.registered_count, event.capacity)
}

fn event_card(event: &Event, logged_in: bool) -> Element<'_, Message> {
    let mut actions = row![
        button(text("View Details").size(14))
            .on_press(Message::Events(EventsMessage::ViewDetails(event.clone())))
            .padding([8.0, 16.0])
            .style(button_secondary)
    ]
    .spacing(SPACING_SM);
    if logged_in && event.has_capacity() {
        actions = actions.push(
            button(text("Register").size(14))
                .on_press(Message::Events(EventsMessage::OpenRegister(event.clone())))
                .padding([8.0, 16.0])
                .style(button_primary),
        );
    }

    list_card(
        column![
            type_badge(event),
            card_title(event.title.as_str()),
            muted(event.description.as_str()),
            column![
                info_row("Date", format_event_date(&event.date)),
                info_row("Time", event.time.as_str()),
                info_row("Location", event.location.as_str()),
                info_row("Organizer", event.organizer.as_str()),
                info_row("Capacity", capacity(event)),
            ]
            .spacing(2.0),
            Space::new().height(SPACING_XS),
            actions,
        ]
        .spacing(SPACING_SM),
    )
}

/// Overlay the open Events dialog, if any, on `base`.
pub fn events_modal<'a>(
    base: Element<'a, Message>,
    session: &'a Session,
    events: &'a EventsState,
) -> Element<'a, Message> {
    let close = Message::Events(EventsMessage::CloseModal);
    match &events.modal {
        None => base,
        Some(EventsModal::Create) => form_modal(
            base,
            "Create New Event",
            create_form(events),
            "Create Event",
            Message::Events(EventsMessage::SubmitEvent),
            close,
        ),
        Some(EventsModal::Details(event)) => {
            let mut actions: Vec<Element<'a, Message>> = Vec::new();
            if session.logged_in && event.has_capacity() {
                actions.push(
                    button(text("Register for Event"))
                        .on_press(Message::Events(EventsMessage::OpenRegister(event.clone())))
                        .padding([10.0, 20.0])
                        .style(button_primary)
                        .into(),
                );
            }
            actions.push(
                button(text("Close"))
                    .on_press(close.clone())
                    .padding([10.0, 20.0])
                    .style(button_secondary)
                    .into(),
            );
            modal(
                base,
                event.title.as_str(),
                event_details(event),
                close,
                actions,
            )
        }
        Some(EventsModal::Register(event)) => form_modal(
            base,
            format!("Register for {}", event.title),
            registration_form(events),
            "Register",
            Message::Events(EventsMessage::SubmitRegistration),
            close,
        ),
    }
}

fn event_details(event: &Event) -> Element<'_, Message> {
    column![
        info_row("Type", event.event_type.as_str()),
        info_row("Date", format_event_date(&event.date)),
        info_row("Time", event.time.as_str()),
        info_row("Location", event.location.as_str()),
        info_row_with("Organizer", event.organizer.as_str(), demo_tag()),
        mail_row("Contact", &event.contact_email, Message::OpenMail),
        info_row("Capacity", capacity(event)),
        Space::new().height(SPACING_SM),
        heading("Description"),
        text(event.description.as_str()).size(14),
    ]
    .spacing(SPACING_XS)
    .into()
}

fn create_form(events: &EventsState) -> Element<'_, Message> {
    let form = &events.event_form;
    let error = events.form_error.as_ref();

    column![
        event_input("Event Title", &form.title, "Event Title", EventField::Title, error),
        event_input(
            "Description",
            &form.description,
            "Event Description",
            EventField::Description,
            error
        ),
        event_input("Date", &form.date, "YYYY-MM-DD", EventField::Date, error),
        event_input("Time", &form.time, "HH:MM", EventField::Time, error),
        event_input("Location", &form.location, "Location", EventField::Location, error),
        select_field("Type", EventType::ALL.to_vec(), form.event_type, |t| {
            Message::Events(EventsMessage::EventTypeChanged(t))
        }),
        event_input("Capacity", &form.capacity, "Capacity", EventField::Capacity, error),
        event_input(
            "Organizer",
            &form.organizer,
            "Organizer",
            EventField::Organizer,
            error
        ),
        event_input(
            "Contact Email",
            &form.contact_email,
            "Contact Email",
            EventField::ContactEmail,
            error
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn event_input<'a>(
    label: &'static str,
    value: &'a str,
    placeholder: &'static str,
    which: EventField,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Events(EventsMessage::EventFieldChanged(which, v)),
        field_error(error, label),
    )
}

fn registration_form(events: &EventsState) -> Element<'_, Message> {
    let form = &events.registration_form;
    let error = events.form_error.as_ref();

    column![
        form_field(
            "Full Name",
            &form.attendee_name,
            "Your Name",
            |v| {
                Message::Events(EventsMessage::RegistrationFieldChanged(
                    RegistrationField::Name,
                    v,
                ))
            },
            field_error(error, "Full Name"),
        ),
        form_field(
            "Email",
            &form.attendee_email,
            "Your Email",
            |v| {
                Message::Events(EventsMessage::RegistrationFieldChanged(
                    RegistrationField::Email,
                    v,
                ))
            },
            field_error(error, "Email"),
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}
