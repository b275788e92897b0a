//! Display components for data presentation.
//!
//! - **Badge**: colored pills and the "demo" tag
//! - **Avatar**: initials avatar
//! - **InfoRow**: label/value and mail-link rows

mod avatar;
mod badge;
mod info_row;

pub use avatar::avatar;
pub use badge::{color_badge, demo_tag};
pub use info_row::{info_row, info_row_with, mail_row};
