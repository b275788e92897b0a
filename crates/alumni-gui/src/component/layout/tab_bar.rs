//! Tab bar navigation component.
//!
//! Horizontal tab navigation drawn on the header band.

use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, PortalColors, SPACING_XS, TAB_PADDING_X, TAB_PADDING_Y};

// =============================================================================
// TAB DEFINITION
// =============================================================================

/// A tab item for the tab bar.
pub struct TabItem<M> {
    /// Tab label text
    pub label: String,
    /// Message to send when tab is clicked
    pub message: M,
}

impl<M> TabItem<M> {
    /// Create a new tab.
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// TAB BAR COMPONENT
// =============================================================================

/// Creates a horizontal tab bar.
///
/// # Arguments
///
/// * `tabs` - List of tabs to display
/// * `active_index` - Index of the currently active tab, if it is listed
///
/// # Example
///
/// ```rust,ignore
/// use alumni_gui::component::{TabItem, tab_bar};
///
/// let tabs = Tab::visible(logged_in)
///     .map(|tab| TabItem::new(tab.label(), Message::SelectTab(tab)))
///     .collect();
///
/// let bar = tab_bar(tabs, active);
/// ```
pub fn tab_bar<'a, M: Clone + 'a>(
    tabs: Vec<TabItem<M>>,
    active_index: Option<usize>,
) -> Element<'a, M> {
    let mut tab_row = row![].spacing(SPACING_XS);

    for (index, tab) in tabs.into_iter().enumerate() {
        let is_active = Some(index) == active_index;

        let tab_button = button(
            container(text(tab.label).size(14))
                .padding([TAB_PADDING_Y, TAB_PADDING_X])
                .center_x(Length::Shrink),
        )
        .padding(0.0)
        .on_press(tab.message)
        .style(move |theme: &Theme, status| {
            let portal = theme.portal();
            let background = if is_active {
                Some(Color::from_rgba(1.0, 1.0, 1.0, 0.22).into())
            } else {
                match status {
                    button::Status::Hovered => Some(Color::from_rgba(1.0, 1.0, 1.0, 0.1).into()),
                    _ => None,
                }
            };
            button::Style {
                background,
                text_color: if is_active {
                    portal.text_on_accent
                } else {
                    Color {
                        a: 0.8,
                        ..portal.text_on_accent
                    }
                },
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

        tab_row = tab_row.push(tab_button);
    }

    container(tab_row).width(Length::Fill).into()
}
