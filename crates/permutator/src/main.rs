//! `Permutator` - Desktop email permutator
//!
//! Guesses a person's email address from their name and company domain.
//! Built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod clipboard;
mod message;
mod settings;
mod style;
mod view;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, scrollable, stack};
use iced::{Element, Length, Subscription, Task};
use permutator_core::{
    FileStore, KeyValueStore, MemoryStore, NOTIFICATION_TIMEOUT, NotificationId, Session,
    SubmitOutcome,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{FormMessage, KeyboardAction, Message};
use style::widgets::{self, palette::ThemeMode};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "permutator=debug,permutator_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Permutator");

    iced::application(Permutator::new, Permutator::update, Permutator::view)
        .title("Email Permutator")
        .subscription(Permutator::subscription)
        .run()
}

/// Main application state.
struct Permutator {
    /// Form, results and notification state.
    session: Session,
    /// Where generated lists are mirrored.
    store: Box<dyn KeyValueStore + Send>,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl Permutator {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let store = open_store();
        let app = Self {
            session: Session::restore(&*store),
            theme_mode: settings::load_theme_mode(&*store),
            store,
        };
        app.apply_theme();
        (app, Task::none())
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        widgets::palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(msg) => self.handle_form(msg),
            Message::Submit => {
                let outcome = self.session.submit(&mut *self.store);
                if let SubmitOutcome::Generated { count, .. } = outcome {
                    info!("Showing {} generated emails", count);
                }
                return schedule_dismiss(outcome.notification());
            }
            Message::ToggleMoreSettings => self.session.toggle_more_settings(),
            Message::CopyToClipboard => {
                return Task::perform(
                    clipboard::write_text(self.session.clipboard_text()),
                    Message::Copied,
                );
            }
            Message::Copied(result) => {
                let id = match result {
                    Ok(()) => self.session.copy_succeeded(),
                    Err(e) => self.session.copy_failed(&e),
                };
                return schedule_dismiss(id);
            }
            Message::OpenInGmail => {
                let url = self.session.compose_url();
                return Task::perform(open_compose(url), Message::GmailOpened);
            }
            Message::GmailOpened(result) => {
                if let Err(e) = result {
                    return schedule_dismiss(self.session.compose_failed(&e));
                }
            }
            Message::NotificationExpired(id) => {
                self.session.expire_notification(id);
            }
            Message::DismissNotification => self.session.dismiss_notification(),
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                info!("Theme changed to {:?}", self.theme_mode);
                if let Err(e) = settings::save_theme_mode(&mut *self.store, self.theme_mode) {
                    warn!("Failed to save theme: {}", e);
                }
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle form input messages.
    fn handle_form(&mut self, msg: FormMessage) {
        match msg {
            FormMessage::FirstNameChanged(value) => self.session.set_first_name(value),
            FormMessage::LastNameChanged(value) => self.session.set_last_name(value),
            FormMessage::DomainChanged(value) => self.session.set_domain(value),
            FormMessage::NicknameChanged(value) => self.session.set_nickname(value),
            FormMessage::MiddleNameChanged(value) => self.session.set_middle_name(value),
        }
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Copy => Task::done(Message::CopyToClipboard),
            KeyboardAction::ToggleMoreSettings => Task::done(Message::ToggleMoreSettings),
            KeyboardAction::Dismiss => {
                self.session.dismiss_notification();
                Task::none()
            }
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let cards = row![
            view::view_form(&self.session),
            view::view_results(&self.session)
        ]
        .spacing(32);

        let content = column![view::view_header(self.theme_mode), cards]
            .spacing(32)
            .padding(24)
            .align_x(iced::Alignment::Center);

        let page = container(scrollable(container(content).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(iced::alignment::Vertical::Center)
            .style(widgets::background_style);

        match self.session.notification() {
            Some(notification) => stack![page, view::view_toast(notification)].into(),
            None => page.into(),
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS
    let shift = modifiers.shift();

    match key {
        // Ctrl+Shift+C: Copy the generated list
        Key::Character(c) if ctrl && shift && c.as_str().eq_ignore_ascii_case("c") => {
            Some(Message::KeyPressed(KeyboardAction::Copy))
        }
        // Ctrl+,: Toggle optional inputs
        Key::Character(c) if ctrl && c.as_str() == "," => {
            Some(Message::KeyPressed(KeyboardAction::ToggleMoreSettings))
        }
        // Escape: Dismiss notification
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Dismiss))
        }
        _ => None,
    }
}

/// Schedules the automatic dismissal of notification `id`.
fn schedule_dismiss(id: NotificationId) -> Task<Message> {
    Task::perform(tokio::time::sleep(NOTIFICATION_TIMEOUT), move |()| {
        Message::NotificationExpired(id)
    })
}

/// Opens the persistent store, falling back to memory if there is no data
/// directory.
fn open_store() -> Box<dyn KeyValueStore + Send> {
    match FileStore::open_default() {
        Ok(store) => {
            info!("Using store at {:?}", store.path());
            Box::new(store)
        }
        Err(e) => {
            warn!("Generated emails will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Opens the Gmail composer in the default browser.
async fn open_compose(url: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || opener::open_browser(url).map_err(|e| e.to_string()))
        .await
        .map_err(|e| e.to_string())?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers::COMMAND
    }

    #[test]
    fn test_copy_shortcut() {
        let message = handle_key_press(Key::Character("c".into()), ctrl() | Modifiers::SHIFT);
        assert!(matches!(
            message,
            Some(Message::KeyPressed(KeyboardAction::Copy))
        ));
    }

    #[test]
    fn test_plain_copy_is_not_intercepted() {
        assert!(handle_key_press(Key::Character("c".into()), ctrl()).is_none());
    }

    #[test]
    fn test_escape_dismisses() {
        let message = handle_key_press(
            Key::Named(keyboard::key::Named::Escape),
            Modifiers::default(),
        );
        assert!(matches!(
            message,
            Some(Message::KeyPressed(KeyboardAction::Dismiss))
        ));
    }
}
