//! Job portal handler.
//!
//! Handles:
//! - Filter changes (each one fetches immediately)
//! - The Post a Job, View Details and Apply dialogs
//! - Backend responses for posting and applying

use alumni_client::ApiError;
use alumni_model::{ApplicationForm, JobForm};
use iced::Task;

use super::MessageHandler;
use crate::message::{JobsMessage, Message};
use crate::service;
use crate::state::{AppState, JobsModal, TabInstance};

const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// Handler for the Jobs tab.
pub struct JobsHandler;

impl MessageHandler<JobsMessage> for JobsHandler {
    fn handle(&self, state: &mut AppState, msg: JobsMessage) -> Task<Message> {
        match msg {
            // List
            JobsMessage::FilterChanged(change) => {
                let Some(jobs) = state.jobs_mut() else {
                    return Task::none();
                };
                jobs.apply_filter(change);
                refresh(state)
            }

            JobsMessage::Loaded { instance, result } => {
                let Some(jobs) = state.jobs_for(instance) else {
                    tracing::debug!("Dropping job list for a closed tab");
                    return Task::none();
                };
                jobs.status.finish_fetch();
                match result {
                    Ok(list) => {
                        tracing::info!(count = list.len(), "Loaded jobs");
                        jobs.jobs = list;
                    }
                    Err(e) => tracing::error!("Error fetching jobs: {e}"),
                }
                Task::none()
            }

            // Dialogs
            JobsMessage::OpenPostJob => open(state, JobsModal::PostJob),
            JobsMessage::ViewDetails(job) => open(state, JobsModal::Details(job)),
            JobsMessage::OpenApply(job) => open(state, JobsModal::Apply(job)),

            JobsMessage::CloseModal => {
                if let Some(jobs) = state.jobs_mut() {
                    jobs.close_modal();
                }
                Task::none()
            }

            // Post a job
            JobsMessage::JobFieldChanged(field, value) => {
                if let Some(jobs) = state.jobs_mut() {
                    field.apply(&mut jobs.job_form, value);
                    jobs.form_error = None;
                }
                Task::none()
            }

            JobsMessage::JobTypeSelected(job_type) => {
                if let Some(jobs) = state.jobs_mut() {
                    jobs.job_form.job_type = job_type;
                }
                Task::none()
            }

            JobsMessage::SubmitJob => submit_job(state),

            JobsMessage::JobPosted { instance, result } => job_posted(state, instance, result),

            // Apply
            JobsMessage::ApplicationFieldChanged(field, value) => {
                if let Some(jobs) = state.jobs_mut() {
                    field.apply(&mut jobs.application_form, value);
                    jobs.form_error = None;
                }
                Task::none()
            }

            JobsMessage::SubmitApplication => submit_application(state),

            JobsMessage::ApplicationSent { instance, result } => {
                application_sent(state, instance, result)
            }
        }
    }
}

/// Fetch jobs with the current filter.
pub(super) fn refresh(state: &mut AppState) -> Task<Message> {
    let Some(jobs) = state.jobs_mut() else {
        return Task::none();
    };
    jobs.status.begin_fetch();
    let instance = jobs.status.instance;
    let filter = jobs.filter.clone();
    service::fetch_jobs(&state.client, instance, filter)
}

fn open(state: &mut AppState, modal: JobsModal) -> Task<Message> {
    if let Some(jobs) = state.jobs_mut() {
        jobs.open(modal);
    }
    Task::none()
}

fn submit_job(state: &mut AppState) -> Task<Message> {
    let poster = state.session.user.clone();
    let Some(jobs) = state.jobs_mut() else {
        return Task::none();
    };
    let request = match jobs.job_form.to_request(poster.as_ref()) {
        Ok(request) => request,
        Err(e) => {
            jobs.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = jobs.status.instance;
    service::post_job(&state.client, instance, request)
}

fn job_posted(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Job posted");
            let task = match state.jobs_for(instance) {
                Some(jobs) => {
                    jobs.close_modal();
                    jobs.job_form = JobForm::default();
                    refresh(state)
                }
                None => Task::none(),
            };
            state.alert("Job posted successfully!");
            task
        }
        Err(e) => {
            tracing::warn!("Error posting job: {e}");
            state.alert(if e.is_server_error() {
                "Error posting job"
            } else {
                CONNECTION_ERROR
            });
            Task::none()
        }
    }
}

fn submit_application(state: &mut AppState) -> Task<Message> {
    let applicant = state.session.user.clone();
    let Some(jobs) = state.jobs_mut() else {
        return Task::none();
    };
    let Some(JobsModal::Apply(job)) = &jobs.modal else {
        return Task::none();
    };
    let job_id = job.id.clone();

    if let Err(e) = jobs.application_form.validate() {
        jobs.form_error = Some(e);
        return Task::none();
    }
    let Some(applicant) = applicant else {
        state.alert("Please login to apply for jobs");
        return Task::none();
    };
    let request = match jobs.application_form.to_request(&applicant) {
        Ok(request) => request,
        Err(e) => {
            jobs.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = jobs.status.instance;
    service::apply_to_job(&state.client, instance, job_id, request)
}

fn application_sent(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Application submitted");
            if let Some(jobs) = state.jobs_for(instance) {
                jobs.close_modal();
                jobs.application_form = ApplicationForm::default();
            }
            state.alert("Application submitted successfully!");
        }
        Err(e) => {
            tracing::warn!("Error submitting application: {e}");
            state.alert(if e.is_server_error() {
                "Error submitting application"
            } else {
                CONNECTION_ERROR
            });
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::select_tab;
    use crate::message::{ApplicationField, JobField};
    use crate::state::test_support::{test_state, test_user};
    use crate::state::{Choice, JobFilterChange, Tab};
    use alumni_model::{JobPosting, JobType, RecordId};

    fn jobs_state(dir: &tempfile::TempDir) -> AppState {
        let mut state = test_state(dir);
        let _ = select_tab(&mut state, Tab::Jobs);
        state
    }

    fn posting() -> JobPosting {
        JobPosting {
            id: RecordId::Int(4),
            title: "Backend Engineer".into(),
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_filter_change_issues_exactly_one_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        assert_eq!(state.jobs_mut().unwrap().status.in_flight, 1);

        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::FilterChanged(JobFilterChange::Location("Remote".into())),
        );
        let jobs = state.jobs_mut().unwrap();
        assert_eq!(jobs.status.in_flight, 2);
        assert_eq!(
            jobs.filter.query_params(),
            vec![("location", "Remote".to_string())]
        );

        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::FilterChanged(JobFilterChange::Type(Choice::Only(JobType::Internship))),
        );
        let jobs = state.jobs_mut().unwrap();
        assert_eq!(jobs.status.in_flight, 3);
        assert_eq!(
            jobs.filter.query_params(),
            vec![
                ("location", "Remote".to_string()),
                ("type", "Internship".to_string())
            ]
        );
    }

    #[test]
    fn test_incomplete_job_form_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        let _ = JobsHandler.handle(&mut state, JobsMessage::OpenPostJob);
        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::JobFieldChanged(JobField::Title, "Engineer".into()),
        );
        let _ = JobsHandler.handle(&mut state, JobsMessage::SubmitJob);

        let jobs = state.jobs_mut().unwrap();
        assert_eq!(jobs.form_error.as_ref().and_then(|e| e.field()), Some("Company"));
        assert_eq!(jobs.modal, Some(JobsModal::PostJob));
    }

    #[test]
    fn test_job_posted_resets_form_and_refetches() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        let _ = JobsHandler.handle(&mut state, JobsMessage::OpenPostJob);
        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::JobFieldChanged(JobField::Title, "Engineer".into()),
        );
        let instance = state.jobs_mut().unwrap().status.instance;

        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::JobPosted {
                instance,
                result: Ok(()),
            },
        );
        let jobs = state.jobs_mut().unwrap();
        assert_eq!(jobs.modal, None);
        assert_eq!(jobs.job_form, JobForm::default());
        assert_eq!(jobs.status.in_flight, 2);
        assert_eq!(state.alert.as_deref(), Some("Job posted successfully!"));
    }

    #[test]
    fn test_post_failures_use_fixed_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        let instance = state.jobs_mut().unwrap().status.instance;

        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::JobPosted {
                instance,
                result: Err(ApiError::Server {
                    status: 500,
                    message: Some("boom".into()),
                }),
            },
        );
        assert_eq!(state.alert.as_deref(), Some("Error posting job"));

        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::JobPosted {
                instance,
                result: Err(ApiError::Network("refused".into())),
            },
        );
        assert_eq!(state.alert.as_deref(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn test_apply_from_details_replaces_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        let _ = JobsHandler.handle(&mut state, JobsMessage::ViewDetails(posting()));
        let _ = JobsHandler.handle(&mut state, JobsMessage::OpenApply(posting()));
        assert_eq!(
            state.jobs_mut().unwrap().modal,
            Some(JobsModal::Apply(posting()))
        );
    }

    fn fill_application(state: &mut AppState) {
        let _ = JobsHandler.handle(state, JobsMessage::OpenApply(posting()));
        let _ = JobsHandler.handle(
            state,
            JobsMessage::ApplicationFieldChanged(ApplicationField::CoverLetter, "Hello".into()),
        );
        let _ = JobsHandler.handle(
            state,
            JobsMessage::ApplicationFieldChanged(ApplicationField::Resume, "10 years".into()),
        );
    }

    #[test]
    fn test_apply_without_user_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        fill_application(&mut state);
        let _ = JobsHandler.handle(&mut state, JobsMessage::SubmitApplication);
        assert_eq!(state.alert.as_deref(), Some("Please login to apply for jobs"));
        assert_eq!(
            state.jobs_mut().unwrap().modal,
            Some(JobsModal::Apply(posting()))
        );
    }

    #[test]
    fn test_application_sent_closes_without_refetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = jobs_state(&dir);
        state.login(test_user());
        fill_application(&mut state);
        let _ = JobsHandler.handle(&mut state, JobsMessage::SubmitApplication);
        assert!(state.alert.is_none());

        let instance = state.jobs_mut().unwrap().status.instance;
        let _ = JobsHandler.handle(
            &mut state,
            JobsMessage::ApplicationSent {
                instance,
                result: Ok(()),
            },
        );
        let jobs = state.jobs_mut().unwrap();
        assert_eq!(jobs.modal, None);
        assert_eq!(jobs.application_form, ApplicationForm::default());
        assert_eq!(jobs.status.in_flight, 1);
        assert_eq!(
            state.alert.as_deref(),
            Some("Application submitted successfully!")
        );
    }
}
