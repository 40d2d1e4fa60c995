//! Page header: product title, tagline and theme toggle.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{self, palette, palette::ThemeMode};

/// Renders the header above the form and results cards.
pub fn view_header(theme_mode: ThemeMode) -> Element<'static, Message> {
    let p = palette::current();

    let bold = iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    };

    let title = row![
        text("Free").size(36).font(bold).color(p.text_primary),
        container(
            text("Email Permutator")
                .size(36)
                .font(bold)
                .color(p.accent_green)
        )
        .padding([2, 8])
        .style(widgets::badge_style),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let tagline = text("to find the right email")
        .size(22)
        .color(p.text_primary);

    let features = row![
        feature("Find email combinations in seconds"),
        feature("Easy copy/paste"),
        feature("100% Free"),
    ]
    .spacing(16);

    let theme_label = match theme_mode {
        ThemeMode::Light => "\u{263E} Dark",
        ThemeMode::Dark => "\u{2600} Light",
    };
    let theme_toggle = button(text(theme_label).size(13))
        .padding([6, 12])
        .style(widgets::ghost_button_style)
        .on_press(Message::ToggleTheme);

    let top_bar = row![Space::new().width(Length::Fill), theme_toggle].width(Length::Fill);

    column![
        top_bar,
        title,
        tagline,
        Space::new().height(Length::Fixed(8.0)),
        features
    ]
    .spacing(6)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// One check-marked selling point.
fn feature(label: &'static str) -> Element<'static, Message> {
    let p = palette::current();

    row![
        text("\u{2714}").size(14).color(p.accent_green),
        text(label).size(14).color(p.text_secondary),
    ]
    .spacing(6)
    .align_y(iced::Alignment::Center)
    .into()
}
