//! Thread pane showing the opened email and its replies.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use foldmail_data::Email;

use crate::message::Message;
use crate::style::widgets::{
    card_style, content_pane_style, palette, scrollable_style, secondary_button_style,
};

use super::shared;

/// Renders the opened email followed by its reply thread.
pub fn view_thread(email: &Email) -> Element<'static, Message> {
    let mut items: Vec<Element<'static, Message>> = vec![view_thread_item(email)];
    items.extend(email.replies.iter().map(view_thread_item));

    let thread = Column::with_children(items).spacing(12).padding([12, 16]);

    container(
        scrollable(thread)
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(content_pane_style)
    .into()
}

/// One thread item card with star and reply actions.
fn view_thread_item(email: &Email) -> Element<'static, Message> {
    let p = palette::current();

    let sender = text(email.sender.full_name.clone())
        .size(14)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);
    let address = text(email.sender.address.clone())
        .size(12)
        .color(p.text_muted);
    let stamp = text(shared::relative_time(email.created_at))
        .size(12)
        .color(p.text_muted);

    let header = row![
        shared::avatar(&email.sender.full_name, 40.0),
        column![sender, address].spacing(2),
        iced::widget::Space::new().width(Length::Fill),
        stamp,
        shared::star_button(email),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let subject = text(email.subject.clone()).size(14).color(p.text_secondary);
    let body = text(email.body.clone()).size(14).color(p.text_primary);

    let actions = row![
        reply_action("Reply", Message::ReplyRequested(email.id)),
        reply_action("Reply All", Message::ReplyAllRequested(email.id)),
    ]
    .spacing(8);

    container(
        column![header, subject, body, actions]
            .spacing(10)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(20)
    .style(card_style)
    .into()
}

/// Half-width tonal action button at the bottom of a thread item.
fn reply_action(label: &'static str, on_press: Message) -> Element<'static, Message> {
    button(
        container(text(label).size(14))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([8, 0])
    .style(secondary_button_style)
    .on_press(on_press)
    .into()
}
