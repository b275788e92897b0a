//! Alumni directory handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{DirectoryMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for the Directory tab.
pub struct DirectoryHandler;

impl MessageHandler<DirectoryMessage> for DirectoryHandler {
    fn handle(&self, state: &mut AppState, msg: DirectoryMessage) -> Task<Message> {
        match msg {
            DirectoryMessage::SearchChanged(value) => {
                if let Some(directory) = state.directory_mut() {
                    directory.filter.search = value;
                }
                Task::none()
            }

            DirectoryMessage::SearchPressed => refresh(state),

            DirectoryMessage::Loaded { instance, result } => {
                let Some(directory) = state.directory_for(instance) else {
                    tracing::debug!("Dropping alumni list for a closed tab");
                    return Task::none();
                };
                directory.status.finish_fetch();
                match result {
                    Ok(alumni) => {
                        tracing::info!(count = alumni.len(), "Loaded alumni directory");
                        directory.alumni = alumni;
                    }
                    Err(e) => tracing::error!("Error fetching alumni: {e}"),
                }
                Task::none()
            }
        }
    }
}

/// Fetch the directory with the current filter.
pub(super) fn refresh(state: &mut AppState) -> Task<Message> {
    let Some(directory) = state.directory_mut() else {
        return Task::none();
    };
    directory.status.begin_fetch();
    let instance = directory.status.instance;
    let filter = directory.filter.clone();
    service::fetch_alumni(&state.client, instance, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::select_tab;
    use crate::state::Tab;
    use crate::state::test_support::test_state;
    use alumni_client::ApiError;
    use alumni_model::AlumniProfile;

    #[test]
    fn test_loaded_list_replaces_and_failure_keeps() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        let _ = select_tab(&mut state, Tab::Directory);
        let instance = state.directory_mut().unwrap().status.instance;

        let alumni = vec![AlumniProfile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..AlumniProfile::default()
        }];
        let _ = DirectoryHandler.handle(
            &mut state,
            DirectoryMessage::Loaded {
                instance,
                result: Ok(alumni),
            },
        );
        let directory = state.directory_mut().unwrap();
        assert!(!directory.status.loading);
        assert_eq!(directory.alumni.len(), 1);

        let _ = DirectoryHandler.handle(&mut state, DirectoryMessage::SearchPressed);
        let _ = DirectoryHandler.handle(
            &mut state,
            DirectoryMessage::Loaded {
                instance,
                result: Err(ApiError::Network("refused".into())),
            },
        );
        let directory = state.directory_mut().unwrap();
        assert_eq!(directory.alumni.len(), 1);
        assert_eq!(directory.status.in_flight, 0);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        let _ = select_tab(&mut state, Tab::Directory);
        let stale = state.directory_mut().unwrap().status.instance;
        let _ = select_tab(&mut state, Tab::Home);
        let _ = select_tab(&mut state, Tab::Directory);

        let _ = DirectoryHandler.handle(
            &mut state,
            DirectoryMessage::Loaded {
                instance: stale,
                result: Ok(vec![AlumniProfile::default()]),
            },
        );
        let directory = state.directory_mut().unwrap();
        assert!(directory.alumni.is_empty());
        assert!(directory.status.loading);
    }
}
