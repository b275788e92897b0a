//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{button, center, column, container, opaque, row, scrollable, space, stack, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    MODAL_WIDTH_MD, MODAL_WIDTH_SM, PortalColors, SPACING_LG, SPACING_MD, SPACING_SM,
    button_ghost, button_primary, button_secondary, container_modal,
};

/// Tallest a dialog body may grow before it scrolls.
const MODAL_BODY_MAX_HEIGHT: f32 = 520.0;

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a semi-transparent
/// backdrop. Clicking the backdrop does NOT close the modal - use the close button.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message to send when close button is clicked
/// * `actions` - Footer buttons, right-aligned
///
/// # Example
///
/// ```rust,ignore
/// use alumni_gui::component::modal;
///
/// let view = modal(
///     base_content,
///     "Reunion Gala",
///     details.into(),
///     Message::Events(EventsMessage::CloseModal),
///     vec![close_button],
/// );
/// ```
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: impl Into<String>,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    dialog(base, title.into(), content, on_close, actions, MODAL_WIDTH_MD)
}

fn dialog<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: String,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
    width: f32,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.portal().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        }),
        space::horizontal(),
        button(
            container(lucide::x().size(20)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.portal().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let body = container(scrollable(container(content).padding([0.0, SPACING_SM])))
        .max_height(MODAL_BODY_MAX_HEIGHT)
        .padding([SPACING_SM, 0.0]);

    let dialog = container(column![header, body, action_row].spacing(SPACING_MD))
        .width(Length::Fixed(width))
        .padding(SPACING_LG)
        .style(container_modal);

    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a form dialog with Cancel and a primary submit button.
///
/// The close button and Cancel both send `on_cancel`.
pub fn form_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: impl Into<String>,
    content: Element<'a, M>,
    submit_label: &'a str,
    on_submit: M,
    on_cancel: M,
) -> Element<'a, M> {
    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let submit_btn: Element<'a, M> = button(text(submit_label))
        .on_press(on_submit)
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(base, title, content, on_cancel, vec![cancel_btn, submit_btn])
}

/// Creates an info/alert modal with a single OK button.
///
/// Used for every blocking notification; nothing else is interactive until
/// it is dismissed.
pub fn alert_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: impl Into<String>,
    on_close: M,
) -> Element<'a, M> {
    let content = text(message.into()).size(14).into();

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    dialog(
        base,
        title.to_string(),
        content,
        on_close,
        vec![ok_btn],
        MODAL_WIDTH_SM,
    )
}
