//! Navigation chrome and pane composition.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{
    Destination, HomeState, LayoutMode, NARROW_PORTION, PaneArrangement, ReplyDraft,
    WIDE_PORTION, route,
};
use crate::style::widgets::{
    bottom_bar_style, destination_button_selected_style, destination_button_style, palette,
    rail_style, shell_style,
};

use super::{composer, email_list, thread};

/// Renders the whole application: navigation chrome around routed content.
pub fn view_shell(
    home: &HomeState,
    destination: Destination,
    layout: LayoutMode,
    draft: &ReplyDraft,
) -> Element<'static, Message> {
    let content = container(view_content(home, layout, draft))
        .width(Length::Fill)
        .height(Length::Fill);

    let arranged: Element<'static, Message> = match layout {
        LayoutMode::Compact => column![content, view_bottom_bar(destination)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        LayoutMode::Expanded => row![view_side_rail(destination), content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    container(arranged)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(shell_style)
        .into()
}

/// Applies the pane router to the current snapshot.
fn view_content(
    home: &HomeState,
    layout: LayoutMode,
    draft: &ReplyDraft,
) -> Element<'static, Message> {
    match route(home, layout) {
        PaneArrangement::List => email_list::view_email_list(home),
        PaneArrangement::Detail => view_detail(home),
        PaneArrangement::Reply => view_reply(home, draft),
        PaneArrangement::ListDetail => row![
            container(email_list::view_email_list(home))
                .width(Length::FillPortion(NARROW_PORTION)),
            container(view_detail(home)).width(Length::FillPortion(WIDE_PORTION)),
        ]
        .into(),
        PaneArrangement::DetailReply => row![
            container(view_detail(home)).width(Length::FillPortion(NARROW_PORTION)),
            container(view_reply(home, draft)).width(Length::FillPortion(WIDE_PORTION)),
        ]
        .into(),
    }
}

/// Thread pane for the opened email, falling back to the reply target so the
/// pane is never blank beside a composer.
fn view_detail(home: &HomeState) -> Element<'static, Message> {
    let Some(email) = home.selected.as_ref().or(home.reply_to.as_ref()) else {
        return email_list::view_email_list(home);
    };
    thread::view_thread(email)
}

fn view_reply(home: &HomeState, draft: &ReplyDraft) -> Element<'static, Message> {
    let Some(email) = home.reply_to.as_ref() else {
        return email_list::view_email_list(home);
    };
    composer::view_composer(email, home.reply_all, draft)
}

/// Bottom destination bar for the compact layout.
fn view_bottom_bar(active: Destination) -> Element<'static, Message> {
    let mut bar = row![].spacing(4).padding([6, 8]).width(Length::Fill);
    for destination in Destination::ALL {
        bar = bar.push(view_destination(destination, active, true));
    }

    container(bar)
        .width(Length::Fill)
        .style(bottom_bar_style)
        .into()
}

/// Side destination rail for the expanded layout.
fn view_side_rail(active: Destination) -> Element<'static, Message> {
    let p = palette::current();

    let brand = container(
        text("Foldmail")
            .size(16)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.primary),
    )
    .padding([16, 16]);

    let mut items = column![].spacing(2).padding([0, 8]);
    for destination in Destination::ALL {
        items = items.push(view_destination(destination, active, false));
    }

    container(column![brand, items].spacing(8))
        .width(Length::Fixed(200.0))
        .height(Length::Fill)
        .style(rail_style)
        .into()
}

/// One destination control; stacked for the bottom bar, inline for the rail.
fn view_destination(
    destination: Destination,
    active: Destination,
    stacked: bool,
) -> Element<'static, Message> {
    let is_active = destination == active;

    let icon = text(destination.icon()).size(16);
    let label = text(destination.label()).size(12).style(move |_theme| {
        let p = palette::current();
        let color = if is_active {
            p.primary
        } else {
            p.text_secondary
        };
        text::Style { color: Some(color) }
    });

    let body: Element<'static, Message> = if stacked {
        column![icon, label]
            .spacing(2)
            .align_x(iced::Alignment::Center)
            .width(Length::Fill)
            .into()
    } else {
        row![icon, label]
            .spacing(10)
            .align_y(iced::Alignment::Center)
            .width(Length::Fill)
            .into()
    };

    let style = if is_active {
        destination_button_selected_style
    } else {
        destination_button_style
    };

    let width = if stacked {
        Length::FillPortion(1)
    } else {
        Length::Fill
    };

    button(body)
        .width(width)
        .padding([8, 12])
        .style(style)
        .on_press(Message::DestinationSelected(destination))
        .into()
}
