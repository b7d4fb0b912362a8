//! UI rendering: navigation chrome and the three content panes.

mod composer;
mod email_list;
mod shared;
mod shell;
mod thread;

pub use shell::view_shell;
