//! Label/value rows used on cards and in detail dialogs.

use iced::widget::{button, row, text};
use iced::{Alignment, Element, Theme};

use crate::theme::{PortalColors, SPACING_XS, button_ghost};

/// "Label: value" on one line, label in bold-ish muted text.
///
/// # Example
/// ```ignore
/// info_row("Location", &job.location)
/// ```
pub fn info_row<'a, M: 'a>(label: &'a str, value: impl Into<String>) -> Element<'a, M> {
    row![label_text(label), text(value.into()).size(14)]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}

/// Like [`info_row`] with trailing content, such as a demo tag.
pub fn info_row_with<'a, M: 'a>(
    label: &'a str,
    value: impl Into<String>,
    trailing: Element<'a, M>,
) -> Element<'a, M> {
    row![label_text(label), text(value.into()).size(14), trailing]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}

/// "Label: address" where the address opens the mail client.
pub fn mail_row<'a, M: Clone + 'a>(
    label: &'a str,
    address: &'a str,
    on_open: impl Fn(String) -> M,
) -> Element<'a, M> {
    let link = button(text(address).size(14))
        .on_press_maybe((!address.trim().is_empty()).then(|| on_open(address.to_string())))
        .padding(0.0)
        .style(button_ghost);

    row![label_text(label), link]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}

fn label_text(label: &str) -> iced::widget::Text<'static> {
    text(format!("{label}:"))
        .size(14)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..iced::Font::DEFAULT
        })
        .style(|theme: &Theme| text::Style {
            color: Some(theme.portal().text_secondary),
        })
}
