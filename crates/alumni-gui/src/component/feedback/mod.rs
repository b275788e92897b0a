//! Feedback components for user notifications.
//!
//! - **Modal**: Dialog overlays (forms, details, blocking alerts)
//! - **EmptyState** / **LoadingState**: placeholders for list tabs

mod empty_state;
mod modal;

pub use empty_state::{EmptyState, LoadingState};
pub use modal::{alert_modal, form_modal, modal};
