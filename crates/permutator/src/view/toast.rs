//! Bottom-right notification toast.

use iced::widget::{container, mouse_area, text};
use iced::{Element, Length};
use permutator_core::{Notification, NotificationKind};

use crate::message::Message;
use crate::style::widgets;

type ToastStyle = fn(&iced::Theme) -> container::Style;

/// Renders `notification` pinned to the bottom-right corner.
///
/// Clicking the toast dismisses it.
pub fn view_toast(notification: &Notification) -> Element<'_, Message> {
    let style: ToastStyle = match notification.kind {
        NotificationKind::Success => widgets::toast_success_style,
        NotificationKind::Error => widgets::toast_error_style,
    };

    let toast = mouse_area(
        container(text(notification.message.as_str()).size(14))
            .padding([8, 16])
            .max_width(420.0)
            .style(style),
    )
    .on_press(Message::DismissNotification);

    container(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .into()
}
