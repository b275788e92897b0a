//! Events tab handler.

use alumni_client::ApiError;
use alumni_model::{EventForm, RegistrationForm};
use iced::Task;

use super::MessageHandler;
use crate::message::{EventsMessage, Message};
use crate::service;
use crate::state::{AppState, EventsModal, TabInstance};

/// Handler for the Events tab.
pub struct EventsHandler;

impl MessageHandler<EventsMessage> for EventsHandler {
    fn handle(&self, state: &mut AppState, msg: EventsMessage) -> Task<Message> {
        match msg {
            EventsMessage::SearchChanged(value) => {
                if let Some(events) = state.events_mut() {
                    events.filter.search = value;
                }
                Task::none()
            }

            EventsMessage::TypeSelected(choice) => {
                if let Some(events) = state.events_mut() {
                    events.select_type(choice);
                }
                Task::none()
            }

            EventsMessage::SearchPressed => refresh(state),

            EventsMessage::Loaded { instance, result } => {
                let Some(events) = state.events_for(instance) else {
                    tracing::debug!("Dropping event list for a closed tab");
                    return Task::none();
                };
                events.status.finish_fetch();
                match result {
                    Ok(list) => {
                        tracing::info!(count = list.len(), "Loaded events");
                        events.events = list;
                    }
                    Err(e) => tracing::error!("Error fetching events: {e}"),
                }
                Task::none()
            }

            EventsMessage::OpenCreate => open(state, EventsModal::Create),
            EventsMessage::ViewDetails(event) => open(state, EventsModal::Details(event)),

            EventsMessage::OpenRegister(event) => {
                let form = RegistrationForm::for_user(state.session.user.as_ref());
                if let Some(events) = state.events_mut() {
                    events.registration_form = form;
                    events.open(EventsModal::Register(event));
                }
                Task::none()
            }

            EventsMessage::CloseModal => {
                if let Some(events) = state.events_mut() {
                    events.close_modal();
                }
                Task::none()
            }

            EventsMessage::EventFieldChanged(field, value) => {
                if let Some(events) = state.events_mut() {
                    field.apply(&mut events.event_form, value);
                    events.form_error = None;
                }
                Task::none()
            }

            EventsMessage::EventTypeChanged(event_type) => {
                if let Some(events) = state.events_mut() {
                    events.event_form.event_type = event_type;
                }
                Task::none()
            }

            EventsMessage::SubmitEvent => submit_event(state),

            EventsMessage::EventCreated { instance, result } => {
                event_created(state, instance, result)
            }

            EventsMessage::RegistrationFieldChanged(field, value) => {
                if let Some(events) = state.events_mut() {
                    field.apply(&mut events.registration_form, value);
                    events.form_error = None;
                }
                Task::none()
            }

            EventsMessage::SubmitRegistration => submit_registration(state),

            EventsMessage::Registered { instance, result } => registered(state, instance, result),
        }
    }
}

/// Fetch events with the current filter.
pub(super) fn refresh(state: &mut AppState) -> Task<Message> {
    let Some(events) = state.events_mut() else {
        return Task::none();
    };
    events.status.begin_fetch();
    let instance = events.status.instance;
    let filter = events.filter.clone();
    service::fetch_events(&state.client, instance, filter)
}

fn open(state: &mut AppState, modal: EventsModal) -> Task<Message> {
    if let Some(events) = state.events_mut() {
        events.open(modal);
    }
    Task::none()
}

fn submit_event(state: &mut AppState) -> Task<Message> {
    let Some(events) = state.events_mut() else {
        return Task::none();
    };
    let request = match events.event_form.to_request() {
        Ok(request) => request,
        Err(e) => {
            events.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = events.status.instance;
    service::create_event(&state.client, instance, request)
}

fn event_created(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Event created");
            match state.events_for(instance) {
                Some(events) => {
                    events.close_modal();
                    events.event_form = EventForm::default();
                    refresh(state)
                }
                None => Task::none(),
            }
        }
        Err(e) => {
            tracing::warn!("Error creating event: {e}");
            state.alert(e.user_message("Error creating event. Please try again."));
            Task::none()
        }
    }
}

fn submit_registration(state: &mut AppState) -> Task<Message> {
    let user = state.session.user.clone();
    let Some(events) = state.events_mut() else {
        return Task::none();
    };
    let Some(EventsModal::Register(event)) = &events.modal else {
        return Task::none();
    };
    let event_id = event.id.clone();
    let request = match events.registration_form.to_request(user.as_ref()) {
        Ok(request) => request,
        Err(e) => {
            events.form_error = Some(e);
            return Task::none();
        }
    };
    let instance = events.status.instance;
    service::register_for_event(&state.client, instance, event_id, request)
}

fn registered(
    state: &mut AppState,
    instance: TabInstance,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!("Registered for event");
            let task = match state.events_for(instance) {
                Some(events) => {
                    events.close_modal();
                    events.registration_form = RegistrationForm::default();
                    refresh(state)
                }
                None => Task::none(),
            };
            state.alert("Registration successful!");
            task
        }
        Err(e) => {
            tracing::warn!("Error registering for event: {e}");
            state.alert(e.user_message("Error registering for event. Please try again."));
            Task::none()
        }
    }
}
