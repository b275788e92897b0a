//! Portal theme implementation.
//!
//! This module provides the custom theme and the widget style functions
//! shared by every view.
//!
//! # Usage
//!
//! Style functions receive `&Theme` and use it to access colors:
//!
//! ```rust,ignore
//! use crate::theme::{PortalColors, button_primary};
//!
//! button(text("Post a Job")).style(button_primary)
//! ```

use iced::widget::{button, container, progress_bar, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::PortalColors;
use super::palette::portal_palette;
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the portal theme for the requested appearance.
pub fn portal_theme(dark_mode: bool) -> Theme {
    let name = if dark_mode {
        "Alumni Portal Dark"
    } else {
        "Alumni Portal Light"
    };
    Theme::custom(name.to_string(), portal_palette(dark_mode))
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    let (background, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            Shadow {
                color: portal.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            portal.accent_hover,
            Shadow {
                color: portal.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (portal.accent_pressed, Shadow::default()),
        button::Status::Disabled => (portal.accent_disabled, Shadow::default()),
    };

    button::Style {
        background: Some(background.into()),
        text_color: if matches!(status, button::Status::Disabled) {
            portal.text_muted
        } else {
            portal.text_on_accent
        },
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - alternative actions (Cancel, View Details).
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            portal.background_elevated,
            portal.text_secondary,
            portal.border_default,
        ),
        button::Status::Hovered => (
            palette.background.base.color,
            portal.text_secondary,
            portal.text_disabled,
        ),
        button::Status::Pressed => (
            portal.background_secondary,
            portal.text_secondary,
            portal.border_default,
        ),
        button::Status::Disabled => (
            portal.background_secondary,
            portal.text_disabled,
            portal.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button style - minimal visual weight.
///
/// Transparent background with text-only appearance.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(portal.accent_primary_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            Some(portal.accent_primary_medium.into()),
            portal.accent_pressed,
        ),
        button::Status::Disabled => (None, portal.text_disabled),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Header button style - Login and Register on the dark header band.
pub fn button_on_header(theme: &Theme, status: button::Status) -> button::Style {
    let portal = theme.portal();

    let alpha = match status {
        button::Status::Hovered => 0.25,
        button::Status::Pressed => 0.35,
        button::Status::Active | button::Status::Disabled => 0.12,
    };

    button::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, alpha).into()),
        text_color: portal.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.4),
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Floating round button style - the dark-mode toggle.
pub fn button_floating(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button_primary(theme, status);
    style.border.radius = spacing::BORDER_RADIUS_FULL.into();
    style.shadow = Shadow {
        color: theme.portal().shadow_strong,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
    style
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface for list items.
pub fn container_card(theme: &Theme) -> container::Style {
    let portal = theme.portal();

    container::Style {
        background: Some(portal.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: portal.border_subtle,
        },
        shadow: Shadow {
            color: portal.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Modal container style - dialog overlay.
pub fn container_modal(theme: &Theme) -> container::Style {
    let portal = theme.portal();

    container::Style {
        background: Some(portal.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: portal.border_subtle,
        },
        shadow: Shadow {
            color: portal.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Header band style.
pub fn container_header(theme: &Theme) -> container::Style {
    let portal = theme.portal();

    container::Style {
        background: Some(portal.header.into()),
        text_color: Some(portal.text_on_accent),
        ..Default::default()
    }
}

/// Surface container style - stat tiles and panels.
pub fn container_surface(theme: &Theme) -> container::Style {
    let portal = theme.portal();

    container::Style {
        background: Some(portal.background_secondary.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    let (background, border_width, border_color, value) = match status {
        text_input::Status::Active => (
            portal.background_elevated,
            spacing::BORDER_WIDTH_THIN,
            portal.border_default,
            palette.background.base.text,
        ),
        text_input::Status::Hovered => (
            portal.background_elevated,
            spacing::BORDER_WIDTH_THIN,
            portal.text_disabled,
            palette.background.base.text,
        ),
        text_input::Status::Focused { .. } => (
            portal.background_elevated,
            spacing::BORDER_WIDTH_MEDIUM,
            portal.border_focused,
            palette.background.base.text,
        ),
        text_input::Status::Disabled => (
            portal.background_secondary,
            spacing::BORDER_WIDTH_THIN,
            portal.border_default,
            portal.text_muted,
        ),
    };

    text_input::Style {
        background: background.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: portal.text_muted,
        placeholder: portal.text_disabled,
        value,
        selection: portal.accent_primary_medium,
    }
}

/// Text input style for a field with a validation error.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = theme.portal().border_error;
    style
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style - profile completeness.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    progress_bar::Style {
        background: portal.border_subtle.into(),
        bar: palette.primary.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Success progress bar style - campaign funding.
pub fn progress_bar_success(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let portal = theme.portal();

    progress_bar::Style {
        background: portal.border_subtle.into(),
        bar: palette.success.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}
