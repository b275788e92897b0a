//! Derived colors for the portal widgets.
//!
//! Iced's `ExtendedPalette` covers the base roles. `PortalColors` adds the
//! handful of surface, text and overlay shades the portal styles need, each
//! derived from the active palette so light and dark mode stay in step.

use alumni_model::BadgeColor;
use iced::{Color, Theme};

/// Shades read by the widget styles in [`super::portal`] and the components.
#[derive(Debug, Clone, Copy)]
pub struct PortalColorSet {
    /// Hover wash behind ghost buttons and inactive tabs.
    pub accent_primary_light: Color,
    /// Selected tab and avatar fill.
    pub accent_primary_medium: Color,
    /// Background of the "demo" tag.
    pub status_warning_light: Color,

    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,
    pub border_error: Color,

    pub background_secondary: Color,
    /// Cards and dialogs.
    pub background_elevated: Color,
    /// Band behind the title and the tab bar.
    pub header: Color,

    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,

    pub shadow: Color,
    pub shadow_strong: Color,
    /// Dims the page behind a dialog.
    pub backdrop: Color,
}

/// Access to [`PortalColorSet`] from a style closure's `&Theme`.
pub trait PortalColors {
    fn portal(&self) -> PortalColorSet;
}

impl PortalColors for Theme {
    fn portal(&self) -> PortalColorSet {
        let palette = self.extended_palette();
        let dark = palette.is_dark;
        let primary = palette.primary.base.color;
        let warning = palette.warning.base.color;

        // Dark mode tints by transparency, light mode by mixing toward white.
        let tint = |color: Color, alpha: f32, toward_white: f32| {
            if dark {
                Color { a: alpha, ..color }
            } else {
                blend_color(color, Color::WHITE, toward_white)
            }
        };
        let grey = |dark_level: f32, light_level: f32| {
            let level = if dark { dark_level } else { light_level };
            Color::from_rgb(level, level + 0.01, level + 0.04)
        };
        let black = |dark_alpha: f32, light_alpha: f32| {
            Color::from_rgba(0.0, 0.0, 0.0, if dark { dark_alpha } else { light_alpha })
        };

        PortalColorSet {
            accent_primary_light: tint(primary, 0.15, 0.88),
            accent_primary_medium: tint(primary, 0.25, 0.70),
            status_warning_light: tint(warning, 0.15, 0.85),

            border_default: palette.background.strong.color,
            border_subtle: grey(0.20, 0.89),
            border_focused: primary,
            border_error: palette.danger.base.color,

            background_secondary: palette.background.weak.color,
            background_elevated: if dark {
                Color::from_rgb(0.14, 0.15, 0.18)
            } else {
                Color::WHITE
            },
            header: if dark {
                Color::from_rgb(0.11, 0.15, 0.25)
            } else {
                blend_color(primary, Color::BLACK, 0.25)
            },

            text_secondary: grey(0.80, 0.30),
            text_muted: grey(0.60, 0.47),
            text_disabled: grey(0.40, 0.65),
            text_on_accent: Color::WHITE,

            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(primary, Color::BLACK, if dark { 0.20 } else { 0.15 }),
            accent_disabled: grey(0.30, 0.82),

            shadow: black(0.25, 0.08),
            shadow_strong: black(0.40, 0.16),
            backdrop: black(0.70, 0.50),
        }
    }
}

/// Iced color for a model badge.
pub fn badge_color(badge: BadgeColor) -> Color {
    let (r, g, b) = badge.rgb8();
    Color::from_rgb8(r, g, b)
}

/// Linear mix: `factor` 0.0 keeps `base`, 1.0 yields `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::portal_theme;

    #[test]
    fn test_badge_color_conversion() {
        let green = badge_color(BadgeColor(0x4CAF50));
        assert_eq!(green, Color::from_rgb8(0x4C, 0xAF, 0x50));
    }

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.0, 0.5, 1.0);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(blend_color(base, Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_dark_mode_tints_by_transparency() {
        let light = portal_theme(false).portal();
        let dark = portal_theme(true).portal();

        assert_eq!(light.accent_primary_light.a, 1.0);
        assert_eq!(dark.accent_primary_light.a, 0.15);
        assert!(dark.backdrop.a > light.backdrop.a);
        assert_eq!(light.background_elevated, Color::WHITE);
    }
}
