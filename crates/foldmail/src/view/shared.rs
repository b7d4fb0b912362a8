//! Small builders shared by the panes.

use chrono::{DateTime, Duration, Utc};
use iced::widget::{button, container, text};
use iced::{Background, Border, Element, Length};

use foldmail_data::Email;

use crate::message::Message;
use crate::style::widgets::{palette, star_button_starred_style, star_button_style};

/// Renders a round avatar circle with initials.
pub(super) fn avatar(name: &str, avatar_size: f32) -> Element<'static, Message> {
    let p = palette::current();
    let initials = initials(name);
    let color = avatar_color(name);

    // Scale text size proportionally to avatar
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let avatar_text_size = (avatar_size * 0.36) as u32;

    container(
        text(initials)
            .size(avatar_text_size)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.text_on_primary),
    )
    .width(Length::Fixed(avatar_size))
    .height(Length::Fixed(avatar_size))
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .style(move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: (avatar_size / 2.0).into(), // Perfect circle
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Star toggle shown on list rows and thread items.
pub(super) fn star_button(email: &Email) -> Element<'static, Message> {
    let glyph = if email.starred { "\u{2605}" } else { "\u{2606}" };
    let style = if email.starred {
        star_button_starred_style
    } else {
        star_button_style
    };

    button(text(glyph).size(16))
        .padding([4, 8])
        .style(style)
        .on_press(Message::StarToggled(email.id))
        .into()
}

/// Gets initials from a name.
fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.len() {
        0 => "?".to_string(),
        1 => parts[0]
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string(),
        _ => {
            let first = parts[0].chars().next().unwrap_or('?');
            let last = parts[parts.len() - 1].chars().next().unwrap_or('?');
            format!("{}{}", first.to_uppercase(), last.to_uppercase())
        }
    }
}

/// Gets avatar color based on name hash (consistent color per sender).
fn avatar_color(name: &str) -> iced::Color {
    let p = palette::current();
    let colors = [
        p.primary,
        p.primary_dark,
        p.primary_light,
        p.accent_red,
        p.accent_yellow,
    ];

    let hash: usize = name.bytes().map(usize::from).sum();
    colors[hash % colors.len()]
}

/// Collapses a body into a short single-line preview.
pub(super) fn preview(body: &str, max_len: usize) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&flat, max_len)
}

/// Truncates a string to a maximum length, adding ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Formats a timestamp relative to now ("12m ago", "3h ago").
pub(super) fn relative_time(at: DateTime<Utc>) -> String {
    relative_to(at, Utc::now())
}

fn relative_to(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - at;
    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed < Duration::days(7) {
        format!("{}d ago", elapsed.num_days())
    } else {
        at.format("%b %d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_full_name() {
        assert_eq!(initials("Maya Lindqvist"), "ML");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_initials_skip_middle_names() {
        assert_eq!(initials("Ana de la Cruz"), "AC");
    }

    #[test]
    fn test_preview_collapses_newlines() {
        assert_eq!(preview("line one\nline two", 40), "line one line two");
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let long = "word ".repeat(50);
        let short = preview(&long, 20);
        assert!(short.ends_with("..."));
        assert!(short.chars().count() <= 20);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_to(now - Duration::seconds(20), now), "just now");
        assert_eq!(relative_to(now - Duration::minutes(25), now), "25m ago");
        assert_eq!(relative_to(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_to(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = Utc::now();
        let old = now - Duration::days(30);
        let formatted = relative_to(old, now);
        assert!(!formatted.ends_with("ago"));
    }
}
