//! Search input component.
//!
//! A text input with a search icon prefix. Pressing Enter sends the same
//! message as the Search button next to it.

use iced::widget::{container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, PortalColors, text_input_default};

/// Creates a search input.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_submit` - Message sent when Enter is pressed, if any
pub fn search_input<'a, M: Clone + 'a>(
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: Option<M>,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.portal().text_muted),
            ..Default::default()
        });

    let mut input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(8.0).left(4.0))
        .width(Length::Fill)
        .style(|theme: &Theme, status| {
            let mut style = text_input_default(theme, status);
            style.border.width = 0.0;
            style
        });
    if let Some(message) = on_submit {
        input = input.on_submit(message);
    }

    container(
        row![
            container(search_icon).padding(Padding::new(0.0).left(10.0)),
            input
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let portal = theme.portal();
        container::Style {
            background: Some(portal.background_elevated.into()),
            border: Border {
                color: portal.border_default,
                width: 1.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
