//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - modals, dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - tags, badges, avatars
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - focused inputs
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Avatar diameter on directory and profile cards
pub const AVATAR_SIZE: f32 = 56.0;

/// Width of list cards in the grids
pub const CARD_WIDTH: f32 = 340.0;

/// Width of the profile sidebar
pub const PROFILE_SIDEBAR_WIDTH: f32 = 280.0;

/// Small modal width - alerts
pub const MODAL_WIDTH_SM: f32 = 400.0;

/// Medium modal width - forms
pub const MODAL_WIDTH_MD: f32 = 520.0;

/// Tab horizontal padding
pub const TAB_PADDING_X: f32 = 16.0;

/// Tab vertical padding
pub const TAB_PADDING_Y: f32 = 10.0;
