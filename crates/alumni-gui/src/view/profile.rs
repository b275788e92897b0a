//! Profile dashboard.
//!
//! A sidebar with the user card and section navigation, and a content pane
//! for the selected section. Activity and statistics are sample data.

use alumni_model::profile::{Activity, RECENT_ACTIVITY_LIMIT};
use alumni_model::{FormError, User, format_short_date, initials};
use iced::widget::{Space, button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::{card_title, heading, muted};
use crate::component::{
    EmptyState, PageHeader, SectionCard, avatar, checkbox_row, color_badge, field_error,
    form_field, form_modal, info_row, panel, secure_field,
};
use crate::message::{Message, PasswordField, PrivacyToggle, ProfileField, ProfileMessage};
use crate::state::{ProfileModal, ProfileSection, ProfileState, Session, Tab};
use crate::theme::{
    PROFILE_SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
    button_primary, button_secondary, container_card, progress_bar_primary,
};

/// Render the Profile tab.
pub fn view_profile<'a>(session: &'a Session, profile: &'a ProfileState) -> Element<'a, Message> {
    let Some(user) = session.user.as_ref() else {
        return EmptyState::new(lucide::user().size(40), "Profile")
            .description("Please log in to view your profile.")
            .centered()
            .view();
    };

    let header = PageHeader::new("My Profile")
        .action("Edit Profile", Message::Profile(ProfileMessage::OpenEditProfile))
        .view();

    let content = match profile.section {
        ProfileSection::Overview => overview(profile),
        ProfileSection::Activity => activity_history(profile),
        ProfileSection::Settings => settings(user, profile),
    };

    column![
        header,
        row![
            sidebar(user, profile),
            container(content).width(Length::Fill)
        ]
        .spacing(SPACING_LG),
    ]
    .spacing(SPACING_LG)
    .width(Length::Fill)
    .into()
}

// =============================================================================
// SIDEBAR
// =============================================================================

fn sidebar<'a>(user: &'a User, profile: &'a ProfileState) -> Element<'a, Message> {
    let stats = &profile.stats;

    let identity = column![
        avatar(initials(&user.first_name, &user.last_name), Some(80.0)),
        card_title(user.full_name()),
        muted(user.email.as_str()),
        muted(format!("Class of {}", user.graduation_year)),
        muted(user.field_of_study.as_str()),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let numbers = row![
        stat(stats.total_donations.to_string(), "Donations"),
        stat(stats.events_attended.to_string(), "Events"),
        stat(stats.jobs_applied.to_string(), "Applications"),
    ]
    .spacing(SPACING_SM);

    let nav = ProfileSection::ALL
        .iter()
        .fold(column![].spacing(SPACING_XS), |nav, section| {
            let style = if *section == profile.section {
                button_primary
            } else {
                button_ghost
            };
            nav.push(
                button(text(section.label()).size(14))
                    .on_press(Message::Profile(ProfileMessage::SectionSelected(*section)))
                    .width(Length::Fill)
                    .padding([8.0, 12.0])
                    .style(style),
            )
        });

    container(column![identity, numbers, nav].spacing(SPACING_MD))
        .padding(SPACING_MD)
        .width(Length::Fixed(PROFILE_SIDEBAR_WIDTH))
        .style(container_card)
        .into()
}

fn stat<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    column![text(value).size(20), muted(label).size(12)]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

// =============================================================================
// SECTIONS
// =============================================================================

fn overview(profile: &ProfileState) -> Element<'_, Message> {
    let completeness = f32::from(profile.stats.profile_completeness);

    let completeness_card = SectionCard::new(
        "Profile Completeness",
        column![
            progress_bar(0.0..=100.0, completeness)
                .girth(8.0)
                .style(progress_bar_primary),
            muted(format!("{}% Complete", profile.stats.profile_completeness)),
        ]
        .spacing(SPACING_SM),
    )
    .view();

    let recent = profile
        .activity
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .fold(column![].spacing(SPACING_SM), |list, item| {
            list.push(activity_item(item, false))
        });
    let recent_card = SectionCard::new("Recent Activity", recent)
        .icon(lucide::history().size(16))
        .view();

    let quick_actions = row![
        quick_action("Update Profile", ProfileMessage::OpenEditProfile),
        quick_action("View Donations", ProfileMessage::QuickAction(Tab::Donations)),
        quick_action("Manage Events", ProfileMessage::QuickAction(Tab::Events)),
        quick_action("Job Applications", ProfileMessage::QuickAction(Tab::Jobs)),
    ]
    .spacing(SPACING_SM)
    .wrap();
    let actions_card = SectionCard::new("Quick Actions", quick_actions).view();

    column![completeness_card, recent_card, actions_card]
        .spacing(SPACING_MD)
        .into()
}

fn quick_action(label: &str, message: ProfileMessage) -> Element<'_, Message> {
    button(text(label).size(14))
        .on_press(Message::Profile(message))
        .padding([10.0, 16.0])
        .style(button_secondary)
        .into()
}

fn activity_history(profile: &ProfileState) -> Element<'_, Message> {
    let items = profile
        .activity
        .iter()
        .fold(column![].spacing(SPACING_SM), |list, item| {
            list.push(activity_item(item, true))
        });

    SectionCard::new("Activity History", items)
        .icon(lucide::history().size(16))
        .view()
}

fn activity_item(item: &Activity, with_amount: bool) -> Element<'_, Message> {
    let mut details = column![
        row![
            color_badge(item.kind.label(), item.kind.color()),
            text(item.title.as_str()).size(14),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        muted(item.description.as_str()),
    ]
    .spacing(SPACING_XS)
    .width(Length::Fill);

    if let Some(company) = &item.company {
        details = details.push(muted(company.as_str()).size(12));
    }
    if with_amount && let Some(amount) = &item.amount {
        details = details.push(text(amount.as_str()).size(14));
    }

    panel(
        row![details, muted(format_short_date(&item.date)).size(12)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Start),
    )
}

fn settings<'a>(user: &'a User, profile: &'a ProfileState) -> Element<'a, Message> {
    let today = chrono::Local::now().format("%-m/%-d/%Y").to_string();

    let information = column![
        heading("Profile Information"),
        info_row("Email", user.email.as_str()),
        info_row("Member Since", today.clone()),
        info_row("Last Login", today),
    ]
    .spacing(SPACING_XS);

    let security = column![
        heading("Security"),
        button(text("Change Password").size(14))
            .on_press(Message::Profile(ProfileMessage::OpenChangePassword))
            .padding([8.0, 16.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM);

    let privacy = &profile.privacy;
    let privacy_options = column![
        heading("Privacy"),
        checkbox_row(
            "Show my profile in alumni directory",
            privacy.show_in_directory,
            |on| {
                Message::Profile(ProfileMessage::PrivacyToggled(
                    PrivacyToggle::ShowInDirectory,
                    on,
                ))
            },
        ),
        checkbox_row(
            "Receive email notifications",
            privacy.email_notifications,
            |on| {
                Message::Profile(ProfileMessage::PrivacyToggled(
                    PrivacyToggle::EmailNotifications,
                    on,
                ))
            },
        ),
        checkbox_row(
            "Allow contact from other alumni",
            privacy.allow_contact,
            |on| Message::Profile(ProfileMessage::PrivacyToggled(PrivacyToggle::AllowContact, on)),
        ),
    ]
    .spacing(SPACING_SM);

    SectionCard::new(
        "Account Settings",
        column![
            information,
            Space::new().height(SPACING_XS),
            security,
            Space::new().height(SPACING_XS),
            privacy_options,
        ]
        .spacing(SPACING_MD),
    )
    .icon(lucide::settings().size(16))
    .view()
}

// =============================================================================
// DIALOGS
// =============================================================================

/// Overlay the open profile dialog, if any, on `base`.
pub fn profile_modal<'a>(
    base: Element<'a, Message>,
    profile: &'a ProfileState,
) -> Element<'a, Message> {
    let close = Message::Profile(ProfileMessage::CloseModal);
    match profile.modal {
        None => base,
        Some(ProfileModal::EditProfile) => form_modal(
            base,
            "Edit Profile",
            edit_profile_form(profile),
            "Update Profile",
            Message::Profile(ProfileMessage::SubmitProfile),
            close,
        ),
        Some(ProfileModal::ChangePassword) => form_modal(
            base,
            "Change Password",
            change_password_form(profile),
            "Change Password",
            Message::Profile(ProfileMessage::SubmitPassword),
            close,
        ),
    }
}

fn edit_profile_form(profile: &ProfileState) -> Element<'_, Message> {
    let form = &profile.profile_form;
    let error = profile.form_error.as_ref();

    column![
        row![
            profile_input("First Name", &form.first_name, ProfileField::FirstName, error),
            profile_input("Last Name", &form.last_name, ProfileField::LastName, error),
        ]
        .spacing(SPACING_SM),
        profile_input("Email", &form.email, ProfileField::Email, error),
        row![
            profile_input(
                "Graduation Year",
                &form.graduation_year,
                ProfileField::GraduationYear,
                error
            ),
            profile_input(
                "Field of Study",
                &form.field_of_study,
                ProfileField::FieldOfStudy,
                error
            ),
        ]
        .spacing(SPACING_SM),
        row![
            profile_input(
                "Current Company",
                &form.current_company,
                ProfileField::CurrentCompany,
                error
            ),
            profile_input("Job Title", &form.job_title, ProfileField::JobTitle, error),
        ]
        .spacing(SPACING_SM),
        profile_input("Location", &form.location, ProfileField::Location, error),
        profile_input("Phone Number", &form.phone, ProfileField::Phone, error),
        profile_input("Bio", &form.bio, ProfileField::Bio, error),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn profile_input<'a>(
    label: &'static str,
    value: &'a str,
    which: ProfileField,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        label,
        move |v| Message::Profile(ProfileMessage::ProfileFieldChanged(which, v)),
        field_error(error, label),
    )
}

fn change_password_form(profile: &ProfileState) -> Element<'_, Message> {
    let form = &profile.password_form;
    let error = profile.form_error.as_ref();

    column![
        password_input(
            "Current Password",
            &form.current_password,
            PasswordField::Current,
            error
        ),
        password_input("New Password", &form.new_password, PasswordField::New, error),
        password_input(
            "Confirm New Password",
            &form.confirm_password,
            PasswordField::Confirm,
            error
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn password_input<'a>(
    label: &'static str,
    value: &'a str,
    which: PasswordField,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    secure_field(
        label,
        value,
        label,
        move |v| Message::Profile(ProfileMessage::PasswordFieldChanged(which, v)),
        field_error(error, label),
    )
}
