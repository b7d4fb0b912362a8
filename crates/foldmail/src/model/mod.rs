//! Data models for the adaptive mail client.

mod destination;
mod draft;
mod home;
mod layout;
mod routing;
mod settings;

pub use destination::Destination;
pub use draft::{ReplyDraft, recipient_line};
pub use home::HomeState;
pub use layout::{LayoutMode, WidthClass};
pub use routing::{NARROW_PORTION, PaneArrangement, WIDE_PORTION, route};
pub use settings::AppSettings;
