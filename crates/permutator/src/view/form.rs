//! The permutation form card.

use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};
use permutator_core::{Field, Session};

use crate::message::{FormMessage, Message};
use crate::style::widgets::{self, palette};

type InputStyle = fn(&iced::Theme, text_input::Status) -> text_input::Style;

/// Renders the form: required inputs, optional inputs and the two buttons.
pub fn view_form(session: &Session) -> Element<'_, Message> {
    let p = palette::current();
    let person = &session.person;

    let title = text("Email permutator")
        .size(24)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);

    let mut fields = column![
        title,
        field(
            "First Name",
            "e.g. Kevin",
            &person.first_name,
            session.is_field_invalid(Field::FirstName),
            |s| Message::Form(FormMessage::FirstNameChanged(s)),
        ),
        field(
            "Last Name",
            "e.g. Doe",
            &person.last_name,
            session.is_field_invalid(Field::LastName),
            |s| Message::Form(FormMessage::LastNameChanged(s)),
        ),
        field(
            "Domain",
            "e.g. google.com",
            &person.domain,
            session.is_field_invalid(Field::Domain),
            |s| Message::Form(FormMessage::DomainChanged(s)),
        ),
    ]
    .spacing(16);

    if session.show_more_settings {
        fields = fields
            .push(field(
                "Nickname",
                "e.g. Kev",
                &person.nickname,
                session.is_field_invalid(Field::Nickname),
                |s| Message::Form(FormMessage::NicknameChanged(s)),
            ))
            .push(field(
                "Middle Name",
                "e.g. John",
                &person.middle_name,
                session.is_field_invalid(Field::MiddleName),
                |s| Message::Form(FormMessage::MiddleNameChanged(s)),
            ));
    }

    let submit = button(container(text("Permutate \u{2192}").size(15)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(widgets::primary_button_style)
        .on_press(Message::Submit);

    let toggle_label = if session.show_more_settings {
        "Hide Settings"
    } else {
        "More Settings"
    };
    let toggle = button(container(text(toggle_label).size(15)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(widgets::accent_button_style)
        .on_press(Message::ToggleMoreSettings);

    container(fields.push(submit).push(toggle))
        .padding(32)
        .width(Length::Fixed(384.0))
        .style(widgets::card_style)
        .into()
}

/// Creates a labeled input; Enter submits the form.
fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    invalid: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let p = palette::current();
    let style: InputStyle = if invalid {
        widgets::invalid_input_style
    } else {
        widgets::field_input_style
    };

    let label_text = text(label).size(13).color(p.primary);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(Message::Submit)
        .padding(12)
        .size(14)
        .width(Length::Fill)
        .style(style);

    column![label_text, input].spacing(6).into()
}
