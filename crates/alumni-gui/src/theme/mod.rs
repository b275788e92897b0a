//! Theme module for the Alumni Portal.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - Portal-specific colors as a `Theme` extension (`colors`)
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`portal`)
//!
//! The active theme is derived from the session's dark-mode flag on every
//! frame, so toggling applies immediately.

pub mod colors;
pub mod palette;
pub mod portal;
pub mod spacing;

pub use colors::{PortalColorSet, PortalColors, badge_color};

pub use portal::{
    button_floating, button_ghost, button_on_header, button_primary, button_secondary,
    container_card, container_header, container_modal, container_surface, portal_theme,
    progress_bar_primary, progress_bar_success, text_input_default, text_input_error,
};

pub use spacing::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM,
    BORDER_WIDTH_THIN, CARD_WIDTH, MODAL_WIDTH_MD, MODAL_WIDTH_SM, PROFILE_SIDEBAR_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, TAB_PADDING_X, TAB_PADDING_Y,
};
