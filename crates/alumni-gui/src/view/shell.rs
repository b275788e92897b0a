//! Application shell: header, navigation, theme toggle and overlays.
//!
//! Overlays are layered in a fixed order: the active tab's dialog, then the
//! login/register dialog, then the blocking alert on top of everything.

use iced::widget::{Space, button, column, container, row, scrollable, stack, text, tooltip};
use iced::{Alignment, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use super::directory::view_directory;
use super::donations::{donations_modal, view_donations};
use super::events::{events_modal, view_events};
use super::home::view_home;
use super::jobs::{jobs_modal, view_jobs};
use super::profile::{profile_modal, view_profile};
use super::stories::view_stories;
use crate::component::{
    TabItem, alert_modal, field_error, form_field, form_modal, secure_field, tab_bar,
};
use crate::message::{AuthField, AuthMessage, Message};
use crate::state::{AppState, AuthDialog, AuthState, Session, Tab, TabState};
use crate::theme::{
    PortalColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_floating,
    button_on_header, container_header,
};

/// Title shown in the header and on the alert dialog.
pub const APP_TITLE: &str = "Alumni Association";

/// Render the whole window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;

    let body = container(tab_body(session, &state.tab))
        .padding(Padding::from([SPACING_LG, SPACING_XL]))
        .width(Length::Fill);

    let base: Element<'_, Message> = column![
        header(state),
        scrollable(body).height(Length::Fill).width(Length::Fill),
    ]
    .into();

    let with_toggle: Element<'_, Message> = stack![base, theme_toggle(session.dark_mode)].into();

    let with_tab_modal = tab_modal(with_toggle, session, &state.tab);
    let with_auth = auth_dialog(with_tab_modal, &state.auth);

    match &state.alert {
        Some(alert) => alert_modal(with_auth, APP_TITLE, alert.as_str(), Message::DismissAlert),
        None => with_auth,
    }
}

// =============================================================================
// HEADER
// =============================================================================

fn header(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;

    let logo = text(APP_TITLE).size(22).style(|theme: &Theme| text::Style {
        color: Some(theme.portal().text_on_accent),
    });

    let account: Element<'_, Message> = if session.logged_in {
        row![
            text(format!("Welcome, {}!", session.greeting_name()))
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.portal().text_on_accent),
                }),
            header_button(lucide::log_out().size(14), "Logout", Message::Logout),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
    } else {
        row![
            header_button(
                lucide::user().size(14),
                "Login",
                Message::Auth(AuthMessage::OpenLogin)
            ),
            header_button(
                lucide::user().size(14),
                "Register",
                Message::Auth(AuthMessage::OpenRegister)
            ),
        ]
        .spacing(SPACING_SM)
        .into()
    };

    let title_row = row![logo, Space::new().width(Length::Fill), account]
        .align_y(Alignment::Center);

    let tabs: Vec<_> = Tab::visible(session.logged_in).collect();
    let active = tabs.iter().position(|tab| *tab == state.active_tab());
    let items = tabs
        .into_iter()
        .map(|tab| TabItem::new(tab.label(), Message::SelectTab(tab)))
        .collect();

    container(column![title_row, tab_bar(items, active)].spacing(SPACING_MD))
        .padding(Padding::from([SPACING_MD, SPACING_XL]).bottom(SPACING_SM))
        .width(Length::Fill)
        .style(container_header)
        .into()
}

fn header_button<'a>(
    icon: impl Into<Element<'a, Message>>,
    label: &'a str,
    message: Message,
) -> Element<'a, Message> {
    button(
        row![icon.into(), text(label).size(14)]
            .spacing(6.0)
            .align_y(Alignment::Center),
    )
    .on_press(message)
    .padding([6.0, 14.0])
    .style(button_on_header)
    .into()
}

/// Round button pinned to the bottom-right corner.
fn theme_toggle<'a>(dark_mode: bool) -> Element<'a, Message> {
    let (icon, hint) = if dark_mode {
        (lucide::sun().size(20), "Switch to Light Mode")
    } else {
        (lucide::moon().size(20), "Switch to Dark Mode")
    };

    let toggle = button(
        container(icon)
            .center_x(Length::Fixed(48.0))
            .center_y(Length::Fixed(48.0)),
    )
    .padding(0.0)
    .on_press(Message::ToggleDarkMode)
    .style(button_floating);

    container(tooltip(
        toggle,
        container(text(hint).size(12)).padding([4.0, 8.0]),
        tooltip::Position::Left,
    ))
    .padding(SPACING_LG)
    .align_right(Length::Fill)
    .align_bottom(Length::Fill)
    .into()
}

// =============================================================================
// TAB CONTENT
// =============================================================================

fn tab_body<'a>(session: &'a Session, tab: &'a TabState) -> Element<'a, Message> {
    match tab {
        TabState::Home => view_home(),
        TabState::Directory(directory) => view_directory(directory),
        TabState::Jobs(jobs) => view_jobs(session, jobs),
        TabState::Events(events) => view_events(session, events),
        TabState::Donations(donations) => view_donations(session, donations),
        TabState::Stories => view_stories(),
        TabState::Profile(profile) => view_profile(session, profile),
    }
}

fn tab_modal<'a>(
    base: Element<'a, Message>,
    session: &'a Session,
    tab: &'a TabState,
) -> Element<'a, Message> {
    match tab {
        TabState::Jobs(jobs) => jobs_modal(base, session, jobs),
        TabState::Events(events) => events_modal(base, session, events),
        TabState::Donations(donations) => donations_modal(base, donations),
        TabState::Profile(profile) => profile_modal(base, profile),
        TabState::Home | TabState::Directory(_) | TabState::Stories => base,
    }
}

// =============================================================================
// AUTH DIALOGS
// =============================================================================

fn auth_dialog<'a>(base: Element<'a, Message>, auth: &'a AuthState) -> Element<'a, Message> {
    let Some(dialog) = auth.dialog else {
        return base;
    };

    let (title, submit, content) = match dialog {
        AuthDialog::Login => ("Login", "Login", login_form(auth)),
        AuthDialog::Register => ("Register", "Register", register_form(auth)),
    };

    form_modal(
        base,
        title,
        content,
        submit,
        Message::Auth(AuthMessage::Submit),
        Message::Auth(AuthMessage::Close),
    )
}

fn login_form(auth: &AuthState) -> Element<'_, Message> {
    column![
        auth_input("Email", &auth.form.email, AuthField::Email, auth),
        auth_secure_input("Password", &auth.form.password, auth),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn register_form(auth: &AuthState) -> Element<'_, Message> {
    let form = &auth.form;
    column![
        row![
            auth_input("First Name", &form.first_name, AuthField::FirstName, auth),
            auth_input("Last Name", &form.last_name, AuthField::LastName, auth),
        ]
        .spacing(SPACING_SM),
        auth_input("Email", &form.email, AuthField::Email, auth),
        auth_secure_input("Password", &form.password, auth),
        auth_input(
            "Graduation Year",
            &form.graduation_year,
            AuthField::GraduationYear,
            auth
        ),
        auth_input(
            "Field of Study",
            &form.field_of_study,
            AuthField::FieldOfStudy,
            auth
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn auth_input<'a>(
    label: &'static str,
    value: &'a str,
    which: AuthField,
    auth: &AuthState,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        label,
        move |v| Message::Auth(AuthMessage::FieldChanged(which, v)),
        field_error(auth.error.as_ref(), label),
    )
}

fn auth_secure_input<'a>(
    label: &'static str,
    value: &'a str,
    auth: &AuthState,
) -> Element<'a, Message> {
    secure_field(
        label,
        value,
        label,
        |v| Message::Auth(AuthMessage::FieldChanged(AuthField::Password, v)),
        field_error(auth.error.as_ref(), label),
    )
}
