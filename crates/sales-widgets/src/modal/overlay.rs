//! Modal overlay building utilities

use iced::widget::{center, container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length};

use super::panel::modal_panel;
use super::ModalHeader;
use crate::theme::ModalTheme;

/// Build a backdrop that closes the modal on click
///
/// Creates a full-screen overlay in the given color that intercepts clicks
/// and sends the specified close message.
pub fn build_backdrop<'a, Message: Clone + 'a>(
    color: Color,
    close_message: Message,
) -> Element<'a, Message> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(color.into()),
                ..Default::default()
            }),
    )
    .on_press(close_message)
    .into()
}

/// Build a modal dialog: backdrop plus centered panel
///
/// Returns `None` when `open` is false; `body` is only built for an open
/// modal. Clicks on the backdrop send `on_close`. The panel is wrapped in
/// `opaque`, so clicks inside it never reach the backdrop.
///
/// # Example
/// ```ignore
/// let modal = modal_shell(
///     state.report_open,
///     &ReportFormState::header(),
///     || report_form_view(&state.report_form, &theme),
///     ReportFormMessage::Backdrop,
///     &theme,
/// );
/// ```
pub fn modal_shell<'a, Message: Clone + 'a>(
    open: bool,
    header: &ModalHeader,
    body: impl FnOnce() -> Element<'a, Message>,
    on_close: Message,
    theme: &ModalTheme,
) -> Option<Element<'a, Message>> {
    if !open {
        return None;
    }

    let backdrop = build_backdrop(theme.backdrop, on_close);

    let panel = center(opaque(modal_panel(header, body(), theme)))
        .width(Length::Fill)
        .height(Length::Fill);

    Some(stack![backdrop, panel].into())
}

/// Stack an optional modal above the base content
///
/// With `None` the base content is returned unchanged.
pub fn with_modal_overlay<'a, Message: 'a>(
    base: Element<'a, Message>,
    modal: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    match modal {
        Some(modal) => stack![base, modal].into(),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Close,
    }

    #[test]
    fn test_closed_shell_renders_nothing() {
        let mut built = false;
        let modal = modal_shell(
            false,
            &ModalHeader::new("Hidden"),
            || {
                built = true;
                text("body").into()
            },
            TestMessage::Close,
            &ModalTheme::default(),
        );
        assert!(modal.is_none());
        assert!(!built);
    }

    #[test]
    fn test_open_shell_builds_body() {
        let mut built = false;
        let modal: Option<Element<'_, TestMessage>> = modal_shell(
            true,
            &ModalHeader::new("Shown").with_subtitle("Subtitle"),
            || {
                built = true;
                text("body").into()
            },
            TestMessage::Close,
            &ModalTheme::default(),
        );
        assert!(modal.is_some());
        assert!(built);
    }
}
