//! Inbox list pane with loading, error, and empty states.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use foldmail_data::{Email, EmailId};

use crate::message::Message;
use crate::model::HomeState;
use crate::style::widgets::{
    list_pane_style, palette, row_button_selected_style, row_button_style, scrollable_style,
    search_placeholder_style,
};

use super::shared;

/// Renders the inbox list pane for the current snapshot.
pub fn view_email_list(home: &HomeState) -> Element<'static, Message> {
    // Show loading spinner before the first snapshot
    if home.loading {
        return view_notice("\u{23F3}", "Loading inbox...");
    }

    // A stream failure leaves only the error to show
    if let Some(error) = &home.error {
        return view_notice("\u{26A0}", error);
    }

    if home.emails.is_empty() {
        return view_notice("\u{1F4ED}", "Inbox is empty");
    }

    let opened = home.selected.as_ref().map(|email| email.id);

    let mut rows: Vec<Element<'static, Message>> = vec![view_search_placeholder()];
    rows.extend(
        home.emails
            .iter()
            .map(|email| view_email_row(email, opened)),
    );

    let list = Column::with_children(rows).spacing(8).padding([12, 16]);

    container(scrollable(list).height(Length::Fill).style(scrollable_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(list_pane_style)
        .into()
}

/// Centered icon-and-text notice filling the pane.
fn view_notice(glyph: &'static str, message: &str) -> Element<'static, Message> {
    container(
        column![
            text(glyph).size(48),
            text(message.to_string()).size(16).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(list_pane_style)
    .into()
}

/// Decorative search affordance pinned above the rows.
fn view_search_placeholder() -> Element<'static, Message> {
    let p = palette::current();

    container(
        row![
            text("\u{1F50D}").size(14),
            text("Search mail").size(14).color(p.text_muted),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(search_placeholder_style)
    .into()
}

/// One email row: avatar, sender, timestamp, subject, preview, star.
fn view_email_row(email: &Email, opened: Option<EmailId>) -> Element<'static, Message> {
    let p = palette::current();
    let is_opened = opened == Some(email.id);

    let sender = text(email.sender.first_name.clone())
        .size(14)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);
    let stamp = text(shared::relative_time(email.created_at))
        .size(12)
        .color(p.text_muted);

    let header = row![
        shared::avatar(&email.sender.full_name, 36.0),
        column![sender, stamp].spacing(2),
        iced::widget::Space::new().width(Length::Fill),
        shared::star_button(email),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let subject = text(email.subject.clone()).size(15).color(p.text_primary);
    let preview = text(shared::preview(&email.body, 120))
        .size(13)
        .color(p.text_secondary);

    let style = if is_opened {
        row_button_selected_style
    } else {
        row_button_style
    };

    button(
        column![header, subject, preview]
            .spacing(6)
            .padding(16)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(0)
    .style(style)
    .on_press(Message::EmailSelected(email.id))
    .into()
}
