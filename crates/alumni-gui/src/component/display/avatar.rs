//! Initials avatar.

use iced::widget::{container, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{AVATAR_SIZE, BORDER_RADIUS_FULL, PortalColors};

/// Round avatar showing up to two initials.
pub fn avatar<'a, M: 'a>(initials: String, size: Option<f32>) -> Element<'a, M> {
    let size = size.unwrap_or(AVATAR_SIZE);

    container(text(initials).size(size * 0.38).style(|theme: &Theme| text::Style {
        color: Some(theme.portal().text_on_accent),
    }))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
