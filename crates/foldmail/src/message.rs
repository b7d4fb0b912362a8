//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use foldmail_data::{Email, EmailId};

use crate::model::{AppSettings, Destination};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Activate a top-level destination in the chrome.
    DestinationSelected(Destination),

    // Inbox Operations
    /// Open an email in the detail pane.
    EmailSelected(EmailId),
    /// Toggle the starred flag on an email.
    StarToggled(EmailId),
    /// Close the open email and any composer, back to the list root.
    EmailClosed,

    // Reply Operations
    /// Open the composer addressing one email's sender.
    ReplyRequested(EmailId),
    /// Open the composer addressing every thread participant.
    ReplyAllRequested(EmailId),
    /// Draft body changed.
    DraftChanged(String),
    /// Send the draft and dismiss the composer.
    SendReply,
    /// Dismiss the composer without sending.
    CancelReply,

    // Data Events
    /// Inbox snapshot or failure arrived from the email stream.
    InboxEvent(Result<Vec<Email>, String>),

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Toggle between light and dark palettes.
    ThemeToggled,

    // UI Events
    /// Window resized.
    WindowResized(f32, f32),
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Reply to the open email (Ctrl+R).
    Reply,
    /// Reply all to the open email (Ctrl+Shift+R).
    ReplyAll,
    /// Send the open draft (Ctrl+Enter).
    Send,
    /// Dismiss the composer, or close the open email (Escape).
    Cancel,
    /// Toggle between light and dark palettes (Ctrl+T).
    ToggleTheme,
}
