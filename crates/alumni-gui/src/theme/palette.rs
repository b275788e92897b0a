//! Portal color palettes.
//!
//! One light and one dark palette, integrated with Iced's theme system via
//! the `Palette` type.

use iced::Color;
use iced::theme::Palette;

/// Create the Iced Palette for the requested appearance.
pub fn portal_palette(dark_mode: bool) -> Palette {
    if dark_mode { dark() } else { light() }
}

/// Light palette - navy accent on near-white.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.97, 0.98),
        text: Color::from_rgb(0.13, 0.14, 0.17),
        primary: Color::from_rgb(0.16, 0.36, 0.70), // Association navy
        success: Color::from_rgb(0.30, 0.69, 0.31), // #4CAF50
        warning: Color::from_rgb(1.00, 0.60, 0.00), // #FF9800
        danger: Color::from_rgb(0.96, 0.26, 0.21),  // #F44336
    }
}

/// Dark palette.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.10, 0.12),
        text: Color::from_rgb(0.93, 0.94, 0.96),
        primary: Color::from_rgb(0.38, 0.58, 0.92),
        success: Color::from_rgb(0.40, 0.76, 0.42),
        warning: Color::from_rgb(1.00, 0.68, 0.20),
        danger: Color::from_rgb(0.94, 0.40, 0.36),
    }
}
