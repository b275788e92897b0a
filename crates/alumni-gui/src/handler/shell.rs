//! Shell-level actions: tab switching and external links.

use iced::Task;

use super::{directory, donations, events, jobs};
use crate::error::{GuiError, log_error};
use crate::message::Message;
use crate::state::{AppState, Tab};

/// Switch to `tab`, mounting fresh state and issuing its initial fetch.
///
/// Selecting the tab that is already active does nothing.
pub fn select_tab(state: &mut AppState, tab: Tab) -> Task<Message> {
    if state.select_tab(tab).is_none() {
        return Task::none();
    }
    match tab {
        Tab::Directory => directory::refresh(state),
        Tab::Jobs => jobs::refresh(state),
        Tab::Events => events::refresh(state),
        Tab::Donations => donations::refresh(state),
        Tab::Home | Tab::Stories | Tab::Profile => Task::none(),
    }
}

/// Open `email` in the system mail client.
pub fn open_mail(email: &str) -> Task<Message> {
    let target = format!("mailto:{email}");
    if let Err(e) = open::that(&target) {
        log_error(&GuiError::OpenLink {
            target,
            reason: e.to_string(),
        });
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;

    #[test]
    fn test_select_list_tab_issues_one_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);

        let _ = select_tab(&mut state, Tab::Jobs);
        let jobs = state.jobs_mut().unwrap();
        assert!(jobs.status.loading);
        assert_eq!(jobs.status.in_flight, 1);

        // Reselecting keeps the mount and does not fetch again.
        let _ = select_tab(&mut state, Tab::Jobs);
        assert_eq!(state.jobs_mut().unwrap().status.in_flight, 1);
    }

    #[test]
    fn test_select_static_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);

        let _ = select_tab(&mut state, Tab::Stories);
        assert_eq!(state.active_tab(), Tab::Stories);
        let _ = select_tab(&mut state, Tab::Profile);
        assert!(state.profile_mut().is_some());
    }
}
