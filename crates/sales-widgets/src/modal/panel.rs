//! Modal panel layout

use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::ModalHeader;
use crate::theme::{ModalTheme, TEXT_SECONDARY};

/// Lay out a modal panel: title, optional subtitle, then the body
pub fn modal_panel<'a, Message: 'a>(
    header: &ModalHeader,
    body: Element<'a, Message>,
    theme: &ModalTheme,
) -> Element<'a, Message> {
    let mut heading = column![text(header.title.clone()).size(22)].spacing(4);
    if let Some(subtitle) = header.visible_subtitle() {
        heading = heading.push(text(subtitle.to_string()).size(13).color(TEXT_SECONDARY));
    }

    let content = column![heading, body]
        .spacing(20)
        .width(Length::Fixed(theme.panel_width));

    container(content)
        .padding(30)
        .style(container::rounded_box)
        .into()
}
