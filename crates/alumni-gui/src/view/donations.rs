//! Donations & Giving tab and its dialogs.

use alumni_model::{Campaign, CampaignCategory, FormError, format_currency, format_percent};
use iced::widget::{Space, button, column, pick_list, progress_bar, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::{card_title, heading, list_body, muted, page};
use crate::component::{
    EmptyState, PageHeader, checkbox_row, color_badge, demo_tag, field_error, form_field,
    form_modal, info_row, info_row_with, list_card, mail_row, modal, search_input, select_field,
};
use crate::message::{CampaignField, DonationField, DonationsMessage, Message};
use crate::state::{Choice, DonationsModal, DonationsState, Session};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_primary, button_secondary, progress_bar_success,
};

/// Render the Donations tab.
pub fn view_donations<'a>(
    session: &'a Session,
    donations: &'a DonationsState,
) -> Element<'a, Message> {
    let header = PageHeader::new("Donations & Giving")
        .action_if(
            session.logged_in,
            "Create Campaign",
            Message::Donations(DonationsMessage::OpenCreate),
        )
        .view();

    let filters = row![
        search_input(
            &donations.filter.search,
            "Search campaigns...",
            |v| Message::Donations(DonationsMessage::SearchChanged(v)),
            Some(Message::Donations(DonationsMessage::SearchPressed)),
        ),
        pick_list(
            Choice::options(DonationsState::ANY_CATEGORY, &CampaignCategory::ALL),
            Some(donations.category_choice),
            |choice| Message::Donations(DonationsMessage::CategorySelected(choice)),
        )
        .padding(8.0)
        .width(Length::Fixed(200.0)),
        button(text("Search").size(14))
            .on_press(Message::Donations(DonationsMessage::SearchPressed))
            .padding([8.0, 20.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let cards = donations.campaigns.iter().map(campaign_card).collect();
    let empty = EmptyState::new(lucide::heart().size(40), "No campaigns found").view();

    page(
        header,
        Some(filters.into()),
        list_body(&donations.status, "Loading campaigns...", cards, empty),
    )
}

fn funding_bar<'a>(campaign: &Campaign) -> Element<'a, Message> {
    progress_bar(0.0..=1.0, (campaign.progress() / 100.0) as f32)
        .girth(8.0)
        .style(progress_bar_success)
        .into()
}

fn campaign_card(campaign: &Campaign) -> Element<'_, Message> {
    list_card(
        column![
            row![
                color_badge(
                    campaign.category.as_str(),
                    CampaignCategory::color_for(&campaign.category)
                ),
                demo_tag()
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
            card_title(campaign.title.as_str()),
            muted(campaign.description.as_str()),
            funding_bar(campaign),
            row![
                text(format!("{} raised", format_currency(campaign.raised))).size(14),
                Space::new().width(Length::Fill),
                muted(format!("of {} goal", format_currency(campaign.goal))),
            ],
            column![
                info_row("Organizer", campaign.organizer.as_str()),
                info_row("Contact", campaign.contact_email.as_str()),
            ]
            .spacing(2.0),
            Space::new().height(SPACING_XS),
            row![
                button(text("View Details").size(14))
                    .on_press(Message::Donations(DonationsMessage::ViewDetails(campaign.clone())))
                    .padding([8.0, 16.0])
                    .style(button_secondary),
                button(text("Donate Now").size(14))
                    .on_press(Message::Donations(DonationsMessage::OpenDonate(campaign.clone())))
                    .padding([8.0, 16.0])
                    .style(button_primary),
            ]
            .spacing(SPACING_SM),
        ]
        .spacing(SPACING_SM),
    )
}

/// Overlay the open Donations dialog, if any, on `base`.
pub fn donations_modal<'a>(
    base: Element<'a, Message>,
    donations: &'a DonationsState,
) -> Element<'a, Message> {
    let close = Message::Donations(DonationsMessage::CloseModal);
    match &donations.modal {
        None => base,
        Some(DonationsModal::Create) => form_modal(
            base,
            "Create New Campaign",
            create_form(donations),
            "Create Campaign",
            Message::Donations(DonationsMessage::SubmitCampaign),
            close,
        ),
        Some(DonationsModal::Details(campaign)) => {
            let actions = vec![
                button(text("Donate to Campaign"))
                    .on_press(Message::Donations(DonationsMessage::OpenDonate(campaign.clone())))
                    .padding([10.0, 20.0])
                    .style(button_primary)
                    .into(),
                button(text("Close"))
                    .on_press(close.clone())
                    .padding([10.0, 20.0])
                    .style(button_secondary)
                    .into(),
            ];
            modal(
                base,
                campaign.title.as_str(),
                campaign_details(campaign),
                close,
                actions,
            )
        }
        Some(DonationsModal::Donate(campaign)) => form_modal(
            base,
            format!("Donate to {}", campaign.title),
            donation_form(donations),
            "Donate",
            Message::Donations(DonationsMessage::SubmitDonation),
            close,
        ),
    }
}

fn campaign_details(campaign: &Campaign) -> Element<'_, Message> {
    column![
        info_row("Category", campaign.category.as_str()),
        info_row("Goal", format_currency(campaign.goal)),
        info_row("Raised", format_currency(campaign.raised)),
        info_row("Progress", format_percent(campaign.progress())),
        info_row_with("Organizer", campaign.organizer.as_str(), demo_tag()),
        mail_row("Contact", &campaign.contact_email, Message::OpenMail),
        funding_bar(campaign),
        Space::new().height(SPACING_SM),
        heading("Description"),
        text(campaign.description.as_str()).size(14),
    ]
    .spacing(SPACING_XS)
    .into()
}

fn create_form(donations: &DonationsState) -> Element<'_, Message> {
    let form = &donations.campaign_form;
    let error = donations.form_error.as_ref();

    column![
        campaign_input(
            "Campaign Title",
            &form.title,
            "Campaign Title",
            CampaignField::Title,
            error
        ),
        campaign_input(
            "Description",
            &form.description,
            "Campaign Description",
            CampaignField::Description,
            error
        ),
        campaign_input(
            "Goal Amount",
            &form.goal,
            "Fundraising Goal ($)",
            CampaignField::Goal,
            error
        ),
        select_field("Category", CampaignCategory::ALL.to_vec(), form.category, |c| {
            Message::Donations(DonationsMessage::CampaignCategoryChanged(c))
        }),
        campaign_input(
            "Organizer",
            &form.organizer,
            "Organizer",
            CampaignField::Organizer,
            error
        ),
        campaign_input(
            "Contact Email",
            &form.contact_email,
            "Contact Email",
            CampaignField::ContactEmail,
            error
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn campaign_input<'a>(
    label: &'static str,
    value: &'a str,
    placeholder: &'static str,
    which: CampaignField,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Donations(DonationsMessage::CampaignFieldChanged(which, v)),
        field_error(error, label),
    )
}

fn donation_form(donations: &DonationsState) -> Element<'_, Message> {
    let form = &donations.donation_form;
    let error = donations.form_error.as_ref();

    column![
        form_field(
            "Donation Amount",
            &form.amount,
            "Donation Amount ($)",
            |v| {
                Message::Donations(DonationsMessage::DonationFieldChanged(
                    DonationField::Amount,
                    v,
                ))
            },
            field_error(error, "Donation Amount"),
        ),
        form_field(
            "Message",
            &form.message,
            "Message (Optional)",
            |v| {
                Message::Donations(DonationsMessage::DonationFieldChanged(
                    DonationField::Message,
                    v,
                ))
            },
            None,
        ),
        checkbox_row("Make donation anonymous", form.is_anonymous, |checked| {
            Message::Donations(DonationsMessage::AnonymousToggled(checked))
        }),
    ]
    .spacing(SPACING_MD)
    .into()
}
