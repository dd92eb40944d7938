//! Dashboard base view
//!
//! The page the dialogs open on top of: action buttons and the list of
//! requests submitted this session.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use super::message::Message;
use crate::activity::RecentActivity;

/// Render the dashboard page
pub fn view(activity: &RecentActivity) -> Element<'_, Message> {
    let report_btn = button(text("Generate Report"))
        .on_press(Message::OpenReport)
        .padding([8, 16])
        .style(button::secondary);

    let order_btn = button(text("New Order"))
        .on_press(Message::OpenOrder)
        .padding([8, 16])
        .style(button::primary);

    let header = row![
        text("Sales Dashboard").size(28),
        Space::new().width(Length::Fill),
        report_btn,
        order_btn,
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let activity_title = text("Recent activity").size(18);

    let entries: Element<Message> = if activity.is_empty() {
        text("No reports or orders submitted yet.")
            .size(14)
            .color(iced::Color::from_rgb(0.5, 0.5, 0.5))
            .into()
    } else {
        let items: Vec<Element<Message>> = activity
            .iter()
            .map(|entry| text(format!("• {}", entry.summary())).size(14).into())
            .collect();
        scrollable(column(items).spacing(6)).height(Length::Fill).into()
    };

    let activity_panel = container(column![activity_title, entries].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box);

    column![header, activity_panel].spacing(24).into()
}
