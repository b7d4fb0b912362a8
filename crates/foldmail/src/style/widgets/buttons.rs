//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary action button with a glow effect (Send).
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(p.primary),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            shadow: shadows::glow_strong(p.primary),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            shadow: shadows::subtle(), // Pressed down feel
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.text_muted)),
            text_color: p.surface,
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Tonal button for lesser actions (Cancel, Reply, Reply All).
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_medium,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Destination control in its resting state.
pub fn destination_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Destination control for the active destination.
pub fn destination_button_selected_style(
    _theme: &iced::Theme,
    status: button::Status,
) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.selected)),
        text_color: p.primary,
        border: Border {
            color: p.primary,
            width: 2.0,
            radius: radius::SMALL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        _ => base,
    }
}

/// Email row card - normal state.
pub fn row_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_medium,
                width: 1.0,
                radius: radius::LARGE.into(),
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Email row card for the opened email.
pub fn row_button_selected_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.selected)),
        text_color: p.text_primary,
        border: Border {
            color: p.selected_border,
            width: 2.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        _ => base,
    }
}

/// Star toggle in its unstarred state.
pub fn star_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_muted,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Star toggle once the email is starred.
pub fn star_button_starred_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.accent_yellow,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        _ => base,
    }
}
