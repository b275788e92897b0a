//! Job portal tab and its dialogs.

use alumni_model::{FormError, JobPosting, JobType, format_short_date, job_summary};
use iced::widget::{Space, button, column, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::{card_title, heading, list_body, muted, page};
use crate::component::{
    EmptyState, PageHeader, demo_tag, field_error, form_field, form_modal, info_row,
    info_row_with, list_card, mail_row, modal, search_input, select_field,
};
use crate::message::{ApplicationField, JobField, JobsMessage, Message};
use crate::state::{Choice, JobFilterChange, JobsModal, JobsState, Session};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_primary, button_secondary, text_input_default,
};

/// Render the Jobs tab.
pub fn view_jobs<'a>(session: &'a Session, jobs: &'a JobsState) -> Element<'a, Message> {
    let header = PageHeader::new("Job Portal")
        .action_if(session.logged_in, "Post a Job", Message::Jobs(JobsMessage::OpenPostJob))
        .view();

    let cards = jobs
        .jobs
        .iter()
        .map(|job| job_card(job, session.logged_in))
        .collect();
    let empty = EmptyState::new(lucide::search_x().size(40), "No jobs found")
        .description("Try a different search, location, type, or field")
        .view();

    page(
        header,
        Some(filters(jobs)),
        list_body(&jobs.status, "Loading jobs...", cards, empty),
    )
}

/// Every control refetches immediately.
fn filters(jobs: &JobsState) -> Element<'_, Message> {
    let on_change = |change: JobFilterChange| Message::Jobs(JobsMessage::FilterChanged(change));

    row![
        search_input(
            &jobs.filter.search,
            "Search jobs...",
            move |v| on_change(JobFilterChange::Search(v)),
            None,
        ),
        text_input("Location", &jobs.filter.location)
            .on_input(move |v| on_change(JobFilterChange::Location(v)))
            .padding(8.0)
            .width(Length::Fill)
            .style(text_input_default),
        pick_list(
            Choice::options(JobsState::ANY_TYPE, &JobType::ALL),
            Some(jobs.type_choice),
            move |choice| on_change(JobFilterChange::Type(choice)),
        )
        .padding(8.0)
        .width(Length::Fixed(160.0)),
        text_input("Field", &jobs.filter.field)
            .on_input(move |v| on_change(JobFilterChange::Field(v)))
            .padding(8.0)
            .width(Length::Fill)
            .style(text_input_default),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

fn job_card(job: &JobPosting, logged_in: bool) -> Element<'_, Message> {
    let mut actions = row![
        button(text("View Details").size(14))
            .on_press(Message::Jobs(JobsMessage::ViewDetails(job.clone())))
            .padding([8.0, 16.0])
            .style(button_secondary)
    ]
    .spacing(SPACING_SM);
    if logged_in {
        actions = actions.push(
            button(text("Apply Now").size(14))
                .on_press(Message::Jobs(JobsMessage::OpenApply(job.clone())))
                .padding([8.0, 16.0])
                .style(button_primary),
        );
    }

    list_card(
        column![
            card_title(job.title.as_str()),
            row![muted(job.company.as_str()), demo_tag()]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            row![
                muted(job.location.as_str()),
                muted(job.job_type.as_str()),
                muted(job.salary.as_str())
            ]
            .spacing(SPACING_MD),
            text(job_summary(&job.description)).size(14),
            Space::new().height(SPACING_XS),
            actions,
        ]
        .spacing(SPACING_SM),
    )
}

/// Overlay the open Jobs dialog, if any, on `base`.
pub fn jobs_modal<'a>(
    base: Element<'a, Message>,
    session: &'a Session,
    jobs: &'a JobsState,
) -> Element<'a, Message> {
    let close = Message::Jobs(JobsMessage::CloseModal);
    match &jobs.modal {
        None => base,
        Some(JobsModal::PostJob) => form_modal(
            base,
            "Post a Job",
            post_job_form(jobs),
            "Post Job",
            Message::Jobs(JobsMessage::SubmitJob),
            close,
        ),
        Some(JobsModal::Details(job)) => {
            let mut actions: Vec<Element<'a, Message>> = Vec::new();
            if session.logged_in {
                actions.push(
                    button(text("Apply Now"))
                        .on_press(Message::Jobs(JobsMessage::OpenApply(job.clone())))
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
            modal(base, job.title.as_str(), job_details(job), close, actions)
        }
        Some(JobsModal::Apply(job)) => form_modal(
            base,
            format!("Apply for {}", job.title),
            application_form(jobs),
            "Submit Application",
            Message::Jobs(JobsMessage::SubmitApplication),
            close,
        ),
    }
}

fn job_details(job: &JobPosting) -> Element<'_, Message> {
    let posted = job
        .posted_date
        .as_deref()
        .map(format_short_date)
        .unwrap_or_default();

    column![
        info_row_with("Company", job.company.as_str(), demo_tag()),
        info_row("Location", job.location.as_str()),
        info_row("Type", job.job_type.as_str()),
        info_row("Field", job.field.as_str()),
        info_row("Salary", job.salary.as_str()),
        info_row_with("Posted by", job.posted_by.as_str(), demo_tag()),
        info_row("Posted", posted),
        mail_row("Contact", &job.contact_email, Message::OpenMail),
        Space::new().height(SPACING_SM),
        heading("Description"),
        text(job.description.as_str()).size(14),
        heading("Requirements"),
        text(job.requirements.as_str()).size(14),
    ]
    .spacing(SPACING_XS)
    .into()
}

fn post_job_form(jobs: &JobsState) -> Element<'_, Message> {
    let form = &jobs.job_form;
    let error = jobs.form_error.as_ref();

    column![
        job_input("Job Title", &form.title, JobField::Title, error),
        job_input("Company", &form.company, JobField::Company, error),
        job_input("Location", &form.location, JobField::Location, error),
        select_field("Type", JobType::ALL.to_vec(), form.job_type, |t| {
            Message::Jobs(JobsMessage::JobTypeSelected(t))
        }),
        job_input("Field", &form.field, JobField::Field, error),
        job_input("Job Description", &form.description, JobField::Description, error),
        job_input("Requirements", &form.requirements, JobField::Requirements, error),
        job_input("Salary Range", &form.salary, JobField::Salary, error),
        job_input("Contact Email", &form.contact_email, JobField::ContactEmail, error),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn job_input<'a>(
    label: &'static str,
    value: &'a str,
    which: JobField,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        label,
        move |v| Message::Jobs(JobsMessage::JobFieldChanged(which, v)),
        field_error(error, label),
    )
}

fn application_form(jobs: &JobsState) -> Element<'_, Message> {
    let form = &jobs.application_form;
    let error = jobs.form_error.as_ref();

    column![
        form_field(
            "Cover Letter",
            &form.cover_letter,
            "Cover Letter",
            |v| {
                Message::Jobs(JobsMessage::ApplicationFieldChanged(
                    ApplicationField::CoverLetter,
                    v,
                ))
            },
            field_error(error, "Cover Letter"),
        ),
        form_field(
            "Resume/CV",
            &form.resume,
            "Resume/Experience Summary",
            |v| Message::Jobs(JobsMessage::ApplicationFieldChanged(ApplicationField::Resume, v)),
            field_error(error, "Resume/CV"),
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}
