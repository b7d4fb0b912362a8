//! Widget styles with shadows and rounded corners.

#![allow(dead_code)] // Style variants for themeable components
#![allow(unused_imports)] // Re-exports for external theming use
#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export palette for external access
pub use palette::*;

// Re-export radius constants
pub use shadows::radius;

// Re-export shadow functions
pub use shadows::{
    large as shadow_large, medium as shadow_medium, none as shadow_none, small as shadow_small,
    subtle as shadow_subtle,
};

// Re-export container styles
pub use containers::{
    bottom_bar_style, card_style, composer_style, content_pane_style, list_pane_style, rail_style,
    search_placeholder_style, shell_style,
};

// Re-export button styles
pub use buttons::{
    destination_button_selected_style, destination_button_style, primary_button_style,
    row_button_selected_style, row_button_style, secondary_button_style,
    star_button_starred_style, star_button_style,
};

// Re-export input styles
pub use inputs::{draft_input_style, scrollable_style};
