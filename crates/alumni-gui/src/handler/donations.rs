//! Donations tab handler.

use alumni_client::ApiError;
use alumni_model::{CampaignForm, DonationForm};
use iced::Task;

use super::MessageHandler;
use crate::message::{DonationsMessage, Message};
use crate::service;
use crate::state::{AppState, DonationsModal, TabInstance};

/// Handler for the Donations tab.
pub struct DonationsHandler;

impl MessageHandler<DonationsMessage> for DonationsHandler {
    fn handle(&self, state: &mut AppState, msg: DonationsMessage) -> Task<Message> {
        match msg {
            DonationsMessage::SearchChanged(value) => {
                if let Some(donations) = state.donations_mut() {
                    donations.filter.search = value;
                }
                Task::none()
            }

            DonationsMessage::CategorySelected(choice) => {
                if let Some(donations) = state.donations_mut() {
                    donations.select_category(choice);
                }
                Task::none()
            }

            DonationsMessage::SearchPressed => refresh(state),

            DonationsMessage::Loaded { instance, result } => {
                let Some(donations) = state.donations_for(instance) else {
                    tracing::debug!("Dropping campaign list for a closed tab");
                    return Task::none();
                };
                donations.status.finish_fetch();
                match result {
                    Ok(list) => {
                        tracing::info!(count = list.len(), "Loaded campaigns");
                        donations.campaigns = list;
                    }
                    Err(e) => tracing::error!("Error fetching campaigns: {e}"),
                }
                Task::none()
            }

            DonationsMessage::OpenCreate => open(state, DonationsModal::Create),
            DonationsMessage::ViewDetails(campaign) => {
                open(state, DonationsModal::Details(campaign))
            }
            DonationsMessage::OpenDonate(campaign) => open(state, DonationsModal::Donate(campaign)),

            DonationsMessage::CloseModal => {
                if let Some(donations) = state.donations_mut() {
                    donations.close_modal();
                }
                Task::none()
            }

            DonationsMessage::CampaignFieldChanged(field, value) => {
                if let Some(donations) = state.donations_mut() {
                    field.apply(&mut donations.campaign_form, value);
                    donations.form_error = None;
                }
                Task::none()
            }

            DonationsMessage::CampaignCategoryChanged(category) => {
                if let Some(donations) = state.donations_mut() {
                    donations.campaign_form.category = category;
                }
                Task::none()
            }

            DonationsMessage::SubmitCampaign => submit_campaign(state),

            DonationsMessage::CampaignCreated { instance, result } => {
                campaign_created(state, instance, result)
            }

            DonationsMessage::DonationFieldChanged(field, value) => {
                if let Some(donations) = state.donations_mut() {
                    field.apply(&mut donations.donation_form, value);
                    donations.form_error = None;
                }
                Task::none()
            }

            DonationsMessage::AnonymousToggled(is_anonymous) => {
                if let Some(donations) = state.donations_mut() {
                    donations.donation_form.is_anonymous = is_anonymous;
                }
                Task::none()
            }

            DonationsMessage::SubmitDonation => submit_donation(state),

            DonationsMessage::Donated { instance, result } => donated(state, instance, result),
        }
    }
}

/// Fetch campaigns with the current filter.
pub(super) fn refresh(state: &mut AppState) -> Task<Message> {
    let Some(donations) = state.donations_mut() else {
        return Task::none();
    };
    donations.status.begin_fetch();
    let instance = donations.status.instance;
    let filter = donations.filter.clone();
    service::fetch_campaigns(&state.client, instance, filter)
}

fn open(state: &mut AppState, modal: DonationsModal) -> Task<Message> {
    if let Some(donations) = state.donations_mut() {
        donations.open(modal);
    }
    Task::none()
}

fn submit_campaign(state: &mut AppState) -> Task<Message> {
    let Some(donations) = state.donations_mut() else {
        return Task::none();
    };
    let request = match donations.campaign_form.to_request() {
        Ok(request) => request,
        Err(e) => {
            donations.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = donations.status.instance;
    service::create_campaign(&state.client, instance, request)
}

fn campaign_created(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Campaign created");
            match state.donations_for(instance) {
                Some(donations) => {
                    donations.close_modal();
                    donations.campaign_form = CampaignForm::default();
                    refresh(state)
                }
                None => Task::none(),
            }
        }
        Err(e) => {
            tracing::warn!("Error creating campaign: {e}");
            state.alert(e.user_message("Error creating campaign. Please try again."));
            Task::none()
        }
    }
}

fn submit_donation(state: &mut AppState) -> Task<Message> {
    let donor = state.session.user.clone();
    let Some(donations) = state.donations_mut() else {
        return Task::none();
    };
    let Some(DonationsModal::Donate(campaign)) = &donations.modal else {
        return Task::none();
    };
    let campaign_id = campaign.id.clone();
    let request = match donations.donation_form.to_request(donor.as_ref()) {
        Ok(request) => request,
        Err(e) => {
            donations.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = donations.status.instance;
    service::donate(&state.client, instance, campaign_id, request)
}

fn donated(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Donation recorded");
            let task = match state.donations_for(instance) {
                Some(donations) => {
                    donations.close_modal();
                    donations.donation_form = DonationForm::default();
                    refresh(state)
                }
                None => Task::none(),
            };
            state.alert("Thank you for your donation!");
            task
        }
        Err(e) => {
            tracing::warn!("Error processing donation: {e}");
            state.alert(e.user_message("Error processing donation. Please try again."));
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::select_tab;
    use crate::message::{CampaignField, DonationField};
    use crate::state::test_support::test_state;
    use crate::state::{Choice, Tab};
    use alumni_model::{Campaign, CampaignCategory, FormError, RecordId};

    fn donations_state(dir: &tempfile::TempDir) -> AppState {
        let mut state = test_state(dir);
        let _ = select_tab(&mut state, Tab::Donations);
        state
    }

    fn scholarship() -> Campaign {
        Campaign {
            id: RecordId::Text("abc123".into()),
            title: "Scholarship Fund".into(),
            goal: 10_000.0,
            raised: 2_500.0,
            ..Campaign::default()
        }
    }

    #[test]
    fn test_category_filter_applies_on_search() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let _ = DonationsHandler.handle(
            &mut state,
            DonationsMessage::CategorySelected(Choice::Only(CampaignCategory::Research)),
        );
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::SearchPressed);

        let donations = state.donations_mut().unwrap();
        assert_eq!(donations.status.in_flight, 2);
        assert_eq!(
            donations.filter.query_params(),
            vec![("category", "Research".to_string())]
        );
    }

    #[test]
    fn test_empty_donation_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::OpenDonate(scholarship()));
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::SubmitDonation);

        let donations = state.donations_mut().unwrap();
        assert_eq!(
            donations.form_error,
            Some(FormError::Missing {
                field: "Donation Amount"
            })
        );
        assert_eq!(donations.status.in_flight, 1);
    }

    #[test]
    fn test_valid_donation_is_sent() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::OpenDonate(scholarship()));
        let _ = DonationsHandler.handle(
            &mut state,
            DonationsMessage::DonationFieldChanged(DonationField::Amount, "50".into()),
        );
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::AnonymousToggled(true));
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::SubmitDonation);

        let donations = state.donations_mut().unwrap();
        assert!(donations.form_error.is_none());
        assert!(donations.donation_form.is_anonymous);
    }

    #[test]
    fn test_donated_resets_and_thanks() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::OpenDonate(scholarship()));
        let _ = DonationsHandler.handle(
            &mut state,
            DonationsMessage::DonationFieldChanged(DonationField::Amount, "50".into()),
        );
        let instance = state.donations_mut().unwrap().status.instance;

        let _ = DonationsHandler.handle(
            &mut state,
            DonationsMessage::Donated {
                instance,
                result: Ok(()),
            },
        );
        let donations = state.donations_mut().unwrap();
        assert_eq!(donations.modal, None);
        assert_eq!(donations.donation_form, DonationForm::default());
        assert_eq!(donations.status.in_flight, 2);
        assert_eq!(state.alert.as_deref(), Some("Thank you for your donation!"));
    }

    #[test]
    fn test_invalid_goal_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::OpenCreate);
        for (field, value) in [
            (CampaignField::Title, "Library"),
            (CampaignField::Description, "New books"),
            (CampaignField::Goal, "-5"),
        ] {
            let _ = DonationsHandler.handle(
                &mut state,
                DonationsMessage::CampaignFieldChanged(field, value.into()),
            );
        }
        let _ = DonationsHandler.handle(&mut state, DonationsMessage::SubmitCampaign);
        let donations = state.donations_mut().unwrap();
        assert!(matches!(
            donations.form_error,
            Some(FormError::Invalid {
                field: "Goal Amount",
                ..
            })
        ));
    }

    #[test]
    fn test_donation_network_failure_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = donations_state(&dir);
        let instance = state.donations_mut().unwrap().status.instance;
        let _ = DonationsHandler.handle(
            &mut state,
            DonationsMessage::Donated {
                instance,
                result: Err(ApiError::Decode("bad json".into())),
            },
        );
        assert_eq!(
            state.alert.as_deref(),
            Some("Error processing donation. Please try again.")
        );
    }
}
