//! Reply composer pane.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use foldmail_data::Email;

use crate::message::Message;
use crate::model::{ReplyDraft, recipient_line};
use crate::style::widgets::{
    composer_style, draft_input_style, palette, primary_button_style, secondary_button_style,
};

/// Renders the composer for the current reply target.
pub fn view_composer(
    email: &Email,
    reply_all: bool,
    draft: &ReplyDraft,
) -> Element<'static, Message> {
    let p = palette::current();

    let recipients = recipient_line(email, reply_all);
    let heading = text(format!("Replying to: {recipients}"))
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);

    let subject = text(format!("Re: {}", email.subject))
        .size(13)
        .color(p.text_muted);

    let input = text_input("Write your reply...", &draft.body)
        .on_input(Message::DraftChanged)
        .padding(12)
        .size(14)
        .width(Length::Fill)
        .style(draft_input_style);

    // No on_press while the draft is blank, which renders it disabled
    let send_label = text("Send").size(14);
    let send = if draft.is_blank() {
        button(send_label)
            .padding([10, 24])
            .style(primary_button_style)
    } else {
        button(send_label)
            .padding([10, 24])
            .style(primary_button_style)
            .on_press(Message::SendReply)
    };

    let cancel = button(text("Cancel").size(14))
        .padding([10, 24])
        .style(secondary_button_style)
        .on_press(Message::CancelReply);

    let actions = row![
        iced::widget::Space::new().width(Length::Fill),
        send,
        cancel,
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(
        column![heading, subject, input, actions]
            .spacing(16)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(20)
    .style(composer_style)
    .into()
}
