//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Application canvas behind every pane.
pub fn shell_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Side destination rail for the expanded layout.
pub fn rail_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Bottom destination bar for the compact layout.
pub fn bottom_bar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Inbox list pane.
pub fn list_pane_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Thread pane behind the opened email.
pub fn content_pane_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        ..Default::default()
    }
}

/// Thread item card.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Reply composer surface.
pub fn composer_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::XLARGE.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}

/// Decorative search pill at the top of the list.
pub fn search_placeholder_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}
