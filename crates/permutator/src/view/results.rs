//! The results card: generated list, count, Gmail link and copy button.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use permutator_core::Session;

use crate::message::Message;
use crate::style::widgets::{self, palette};

/// Renders the read-only list of generated addresses.
pub fn view_results(session: &Session) -> Element<'_, Message> {
    let p = palette::current();
    let candidates = session.candidates();

    let list: Element<'_, Message> = if candidates.is_empty() {
        container(
            text("Generated emails will appear here")
                .size(14)
                .color(p.text_muted),
        )
        .padding(12)
        .into()
    } else {
        let lines: Vec<Element<'_, Message>> = candidates
            .iter()
            .map(|email| text(email.as_str()).size(14).color(p.text_primary).into())
            .collect();
        scrollable(Column::with_children(lines).spacing(4).padding(12))
            .height(Length::Fill)
            .width(Length::Fill)
            .style(widgets::scrollable_style)
            .into()
    };

    let list_frame = container(list)
        .width(Length::Fill)
        .height(Length::Fixed(256.0))
        .style(widgets::results_style);

    let summary = row![
        text("This tool generated ").size(14).color(p.text_secondary),
        text(format!("{} emails", session.count()))
            .size(14)
            .color(p.accent_green)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
        text(".").size(14).color(p.text_secondary),
    ];

    let gmail = button(text("Open in Gmail").size(14))
        .padding(0)
        .style(widgets::link_button_style)
        .on_press(Message::OpenInGmail);

    let copy_label = container(text("Copy to clipboard \u{1F4CB}").size(15)).center_x(Length::Fill);
    let copy = button(copy_label)
        .width(Length::Fill)
        .padding(12)
        .style(widgets::primary_button_style)
        .on_press(Message::CopyToClipboard);

    container(column![list_frame, summary, gmail, copy].spacing(16))
        .padding(32)
        .width(Length::Fixed(384.0))
        .style(widgets::card_style)
        .into()
}
