//! Builds the full widget tree for every tab and dialog.
//!
//! Nothing is drawn; these tests make sure each state combination renders
//! without panicking.

use alumni_client::PortalClient;
use alumni_gui::app::App;
use alumni_gui::message::{AuthMessage, JobsMessage, Message, ProfileMessage};
use alumni_gui::state::{AppState, ProfileSection, Settings, Tab};
use alumni_model::User;
use alumni_storage::LocalStore;

fn app(dir: &tempfile::TempDir) -> App {
    let store = LocalStore::load_or_empty(dir.path().join("storage.toml"));
    let client = PortalClient::new("http://127.0.0.1:9").unwrap();
    App::from_state(AppState::new(Settings::default(), store, client))
}

fn user() -> User {
    User {
        id: None,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        graduation_year: "1835".to_string(),
        field_of_study: "Mathematics".to_string(),
        token: Some("tok".to_string()),
    }
}

#[test]
fn every_tab_renders_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);

    for tab in Tab::ALL {
        let _ = app.update(Message::SelectTab(tab));
        let _ = app.view();
    }
}

#[test]
fn every_tab_renders_logged_in() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);
    app.state.login(user());

    for tab in Tab::ALL {
        let _ = app.update(Message::SelectTab(tab));
        let _ = app.view();
    }
    let _ = app.update(Message::ToggleDarkMode);
    let _ = app.view();
}

#[test]
fn dialogs_render() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(&dir);

    let _ = app.update(Message::Auth(AuthMessage::OpenLogin));
    let _ = app.view();
    let _ = app.update(Message::Auth(AuthMessage::OpenRegister));
    let _ = app.view();
    let _ = app.update(Message::Auth(AuthMessage::Close));

    app.state.login(user());
    let _ = app.update(Message::SelectTab(Tab::Jobs));
    let _ = app.update(Message::Jobs(JobsMessage::OpenPostJob));
    let _ = app.view();

    let _ = app.update(Message::SelectTab(Tab::Profile));
    for section in ProfileSection::ALL {
        let _ = app.update(Message::Profile(ProfileMessage::SectionSelected(section)));
        let _ = app.view();
    }
    let _ = app.update(Message::Profile(ProfileMessage::OpenChangePassword));
    app.state.alert("Something went wrong");
    let _ = app.view();
}
