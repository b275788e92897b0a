//! Form field components.
//!
//! Input fields with labels, validation, and error display. Each dialog keeps
//! a single `FormError`; [`field_error`] picks out the message for one field.

use alumni_model::FormError;
use iced::widget::{checkbox, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{PortalColors, SPACING_SM, SPACING_XS, text_input_default, text_input_error};

/// Message for `label`, if `error` is about that field.
pub fn field_error(error: Option<&FormError>, label: &str) -> Option<String> {
    error
        .filter(|e| e.field() == Some(label))
        .map(ToString::to_string)
}

/// Creates a form field with label and optional error message.
///
/// # Example
///
/// ```rust,ignore
/// use alumni_gui::component::form_field;
///
/// let field = form_field(
///     "Job Title",
///     &form.title,
///     "Job Title",
///     |v| Message::Jobs(JobsMessage::JobFieldChanged(JobField::Title, v)),
///     field_error(error, "Job Title"),
/// );
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    labelled_input(label, value, placeholder, on_change, error, false)
}

/// Same as [`form_field`] with the value masked.
pub fn secure_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    labelled_input(label, value, placeholder, on_change, error, true)
}

fn labelled_input<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
    secure: bool,
) -> Element<'a, M> {
    let has_error = error.is_some();

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .secure(secure)
        .padding(10.0)
        .width(Length::Fill)
        .style(if has_error {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![field_label(label), input].spacing(SPACING_XS);

    if let Some(err) = error {
        content = content.push(text(err).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }));
    }

    container(content).width(Length::Fill).into()
}

/// Labelled drop-down over a closed option set.
pub fn select_field<'a, T, M>(
    label: &'a str,
    options: Vec<T>,
    selected: T,
    on_select: impl Fn(T) -> M + 'a,
) -> Element<'a, M>
where
    T: ToString + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    let picker = pick_list(options, Some(selected), on_select)
        .padding(10.0)
        .width(Length::Fill);

    column![field_label(label), picker]
        .spacing(SPACING_XS)
        .into()
}

/// A checkbox with its label to the right.
pub fn checkbox_row<'a, M: Clone + 'a>(
    label: &'a str,
    checked: bool,
    on_toggle: impl Fn(bool) -> M + 'a,
) -> Element<'a, M> {
    row![checkbox(checked).on_toggle(on_toggle), text(label).size(14)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn field_label(label: &str) -> iced::widget::Text<'_> {
    text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.portal().text_muted),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_matches_label() {
        let error = FormError::Missing { field: "Job Title" };
        assert_eq!(
            field_error(Some(&error), "Job Title"),
            Some(error.to_string())
        );
        assert_eq!(field_error(Some(&error), "Company"), None);
        assert_eq!(field_error(None, "Job Title"), None);
    }

    #[test]
    fn test_mismatch_points_at_confirmation() {
        let error = FormError::PasswordMismatch;
        assert_eq!(
            field_error(Some(&error), "Confirm New Password").as_deref(),
            Some("New passwords do not match.")
        );
        assert_eq!(field_error(Some(&error), "New Password"), None);
    }
}
