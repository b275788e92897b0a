//! Message handler architecture.
//!
//! Message handling lives outside the `App` struct, grouped by feature:
//!
//! - Better code organization (one handler per tab)
//! - Easier testing (handlers run against an `AppState` without the iced runtime)
//!
//! # Architecture
//!
//! Each handler implements [`MessageHandler`] for a specific message type:
//!
//! ```ignore
//! pub struct JobsHandler;
//!
//! impl MessageHandler<JobsMessage> for JobsHandler {
//!     fn handle(&self, state: &mut AppState, msg: JobsMessage) -> Task<Message> {
//!         match msg {
//!             JobsMessage::OpenPostJob => { /* ... */ }
//!             // ...
//!         }
//!     }
//! }
//! ```
//!
//! The main `App::update()` dispatches to the appropriate handler:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Jobs(msg) => JobsHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod auth;
mod directory;
mod donations;
mod events;
mod jobs;
mod profile;
mod shell;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use auth::AuthHandler;
pub use directory::DirectoryHandler;
pub use donations::DonationsHandler;
pub use events::EventsHandler;
pub use jobs::JobsHandler;
pub use profile::ProfileHandler;
pub use shell::{open_mail, select_tab};

/// Trait for handling messages in the iced architecture.
///
/// Each handler is responsible for one message type and can access the full
/// application state.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// # Arguments
    ///
    /// * `state` - Mutable reference to the application state
    /// * `msg` - The message to handle
    ///
    /// # Returns
    ///
    /// A `Task<Message>` for any async follow-up work, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
