//! Badge components.
//!
//! Pill-shaped labels for event types, campaign categories, activity kinds,
//! and the "demo" marker on sample figures.

use alumni_model::BadgeColor;
use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::theme::{BORDER_RADIUS_FULL, PortalColors, badge_color};

/// Creates a solid badge filled with `color`.
///
/// # Example
///
/// ```rust,ignore
/// use alumni_gui::component::color_badge;
///
/// color_badge(&event.event_type, EventType::color_for(&event.event_type))
/// ```
pub fn color_badge<'a, M: 'a>(label: impl Into<String>, color: BadgeColor) -> Element<'a, M> {
    let fill = badge_color(color);

    container(text(label.into()).size(12).style(|theme: &Theme| text::Style {
        color: Some(theme.portal().text_on_accent),
    }))
    .padding([4.0, 10.0])
    .style(move |_theme: &Theme| container::Style {
        background: Some(fill.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// The small "demo" tag placed next to figures that are placeholder data.
pub fn demo_tag<'a, M: 'a>() -> Element<'a, M> {
    container(text("demo").size(10).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().warning.base.color),
    }))
    .padding([2.0, 6.0])
    .style(|theme: &Theme| container::Style {
        background: Some(theme.portal().status_warning_light.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
