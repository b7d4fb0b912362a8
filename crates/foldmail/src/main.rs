//! `Foldmail` - Adaptive desktop email client
//!
//! A list-detail inbox that reflows between phone and tablet arrangements,
//! built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::futures::{SinkExt, Stream, StreamExt};
use iced::keyboard::{self, Key, Modifiers};
use iced::{Element, Subscription, Task, window};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::path::PathBuf;

use foldmail_data::{EmailRepository, FixtureRepository};

use message::{KeyboardAction, Message};
use model::{AppSettings, Destination, HomeState, LayoutMode, ReplyDraft, recipient_line};
use style::widgets::palette::ThemeMode;

fn main() -> iced::Result {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foldmail=info,foldmail_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting foldmail");

    iced::application(Foldmail::new, Foldmail::update, Foldmail::view)
        .title("Foldmail")
        .subscription(Foldmail::subscription)
        .run()
}

/// Main application state.
struct Foldmail {
    /// Content snapshot every pane renders from.
    home: HomeState,
    /// Active chrome destination.
    destination: Destination,
    /// Arrangement mode from the last window measurement.
    layout: LayoutMode,
    /// Ephemeral composer draft.
    draft: ReplyDraft,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl Default for Foldmail {
    fn default() -> Self {
        Self {
            home: HomeState::initial(),
            destination: Destination::default(),
            layout: LayoutMode::default(),
            draft: ReplyDraft::default(),
            theme_mode: AppSettings::default().theme_mode,
        }
    }
}

impl Foldmail {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(
            async { load_settings().await.map_err(|error| error.to_string()) },
            Message::SettingsLoaded,
        );
        (app, settings_task)
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DestinationSelected(destination) => {
                self.destination = destination;
                // Coming home to Inbox also closes whatever email is open
                if destination == Destination::Inbox {
                    return Task::done(Message::EmailClosed);
                }
            }
            Message::EmailSelected(id) => {
                self.home = self.home.select_email(id);
            }
            Message::StarToggled(id) => {
                self.home = self.home.star_email(id);
            }
            Message::EmailClosed => {
                self.home = self.home.clear_email();
                self.draft.clear();
            }
            Message::ReplyRequested(id) => {
                self.home = self.home.set_replying(id, false);
            }
            Message::ReplyAllRequested(id) => {
                self.home = self.home.set_replying(id, true);
            }
            Message::DraftChanged(body) => {
                self.draft.body = body;
            }
            Message::SendReply => {
                if let Some(email) = self.home.reply_to.as_ref() {
                    let recipients = recipient_line(email, self.home.reply_all);
                    info!(to = %recipients, chars = self.draft.body.len(), "reply sent");
                    self.home = self.home.clear_replying();
                    self.draft.clear();
                }
            }
            Message::CancelReply => {
                self.home = self.home.clear_replying();
                self.draft.clear();
            }
            Message::InboxEvent(result) => match result {
                Ok(emails) => {
                    info!(count = emails.len(), "inbox snapshot received");
                    self.home = HomeState::loaded(emails);
                    self.draft.clear();
                }
                Err(error) => {
                    warn!(%error, "email stream failed");
                    self.home = HomeState::failed(error);
                    self.draft.clear();
                }
            },
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    debug!(mode = ?settings.theme_mode, "settings loaded");
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(error) => {
                    warn!(%error, "settings unreadable, keeping defaults");
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(error) = result {
                    warn!(%error, "settings not saved");
                }
            }
            Message::ThemeToggled => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(
                    async move { save_settings(settings).await.map_err(|error| error.to_string()) },
                    Message::SettingsSaved,
                );
            }
            Message::WindowResized(width, _height) => {
                self.layout = LayoutMode::from_width(width);
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
        }
        Task::none()
    }

    /// Resolves a keyboard shortcut against the current state.
    fn handle_keyboard_action(&self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Reply => {
                if let Some(email) = self.home.selected.as_ref() {
                    return Task::done(Message::ReplyRequested(email.id));
                }
            }
            KeyboardAction::ReplyAll => {
                if let Some(email) = self.home.selected.as_ref() {
                    return Task::done(Message::ReplyAllRequested(email.id));
                }
            }
            KeyboardAction::Send => {
                if self.home.reply_to.is_some() && !self.draft.is_blank() {
                    return Task::done(Message::SendReply);
                }
            }
            KeyboardAction::Cancel => {
                // Escape peels one layer: composer first, then the open email
                if self.home.reply_to.is_some() {
                    return Task::done(Message::CancelReply);
                }
                if self.home.selected.is_some() {
                    return Task::done(Message::EmailClosed);
                }
            }
            KeyboardAction::ToggleTheme => {
                return Task::done(Message::ThemeToggled);
            }
        }
        Task::none()
    }

    /// Render the current state as UI.
    fn view(&self) -> Element<'_, Message> {
        view::view_shell(&self.home, self.destination, self.layout, &self.draft)
    }

    /// Event sources: the email feed, window resizes, keyboard shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            Subscription::run(email_feed),
            window::resize_events()
                .map(|(_id, size)| Message::WindowResized(size.width, size.height)),
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, modifiers, .. } => {
                    handle_key_press(key, modifiers)
                }
                _ => None,
            }),
        ])
    }
}

/// Bridges the email repository stream into application messages.
fn email_feed() -> impl Stream<Item = Message> {
    iced::stream::channel(
        1,
        |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
            let repository = FixtureRepository::new();
            let mut events = repository.all_emails();
            while let Some(event) = events.next().await {
                let message = Message::InboxEvent(event.map_err(|error| error.to_string()));
                if output.send(message).await.is_err() {
                    break;
                }
            }
        },
    )
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS
    let shift = modifiers.shift();

    match key {
        // Ctrl+Shift+R: Reply All (shift may uppercase the character)
        Key::Character(c) if ctrl && shift && c.as_str().eq_ignore_ascii_case("r") => {
            Some(Message::KeyPressed(KeyboardAction::ReplyAll))
        }
        // Ctrl+R: Reply
        Key::Character(c) if ctrl && !shift && c.as_str() == "r" => {
            Some(Message::KeyPressed(KeyboardAction::Reply))
        }
        // Ctrl+T: Toggle theme
        Key::Character(c) if ctrl && !shift && c.as_str() == "t" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        // Ctrl+Enter: Send draft
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: dismiss composer / close email
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        _ => None,
    }
}

/// Platform path of the persisted settings document.
fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foldmail")
        .join("settings.json")
}

/// Load application settings from file; a missing file yields defaults.
async fn load_settings() -> anyhow::Result<AppSettings> {
    let path = settings_path();
    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> anyhow::Result<()> {
    let path = settings_path();
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let contents = serde_json::to_string_pretty(&settings)?;
    tokio::fs::write(&path, contents).await?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
