//! Reusable UI components for the Alumni Portal.
//!
//! This module provides building blocks for constructing views:
//!
//! - **Layout**: `tab_bar`, `PageHeader`, `SectionCard`, `list_card`, `card_grid`
//! - **Feedback**: `modal`, `form_modal`, `alert_modal`, `EmptyState`, `LoadingState`
//! - **Inputs**: `form_field`, `secure_field`, `select_field`, `search_input`
//! - **Display**: `color_badge`, `demo_tag`, `avatar`, `info_row`, `mail_row`
//! - **Icons**: Use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern or plain functions and return
//! `Element<M>`, generic over the message type.

pub mod display;
pub mod feedback;
pub mod inputs;
pub mod layout;

pub use display::{avatar, color_badge, demo_tag, info_row, info_row_with, mail_row};
pub use feedback::{EmptyState, LoadingState, alert_modal, form_modal, modal};
pub use inputs::{
    checkbox_row, field_error, form_field, search_input, secure_field, select_field,
};
pub use layout::{PageHeader, SectionCard, TabItem, card_grid, list_card, panel, tab_bar};
