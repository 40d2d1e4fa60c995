//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use permutator_core::NotificationId;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    /// A form input changed.
    Form(FormMessage),
    /// Validate the form and generate the list.
    Submit,
    /// Show or hide the nickname and middle name inputs.
    ToggleMoreSettings,

    // Results
    /// Copy the list to the clipboard.
    CopyToClipboard,
    /// Clipboard write finished.
    Copied(Result<(), String>),
    /// Open the Gmail composer with the list in Bcc.
    OpenInGmail,
    /// Browser launch finished.
    GmailOpened(Result<(), String>),

    // Notifications
    /// The dismissal timer for a notification fired.
    NotificationExpired(NotificationId),
    /// Dismiss the visible notification now.
    DismissNotification,

    // Settings
    /// Switch between light and dark themes.
    ToggleTheme,

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no effect.
    Ignored,
}

/// Edits to the permutation form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// First name changed.
    FirstNameChanged(String),
    /// Last name changed.
    LastNameChanged(String),
    /// Domain changed.
    DomainChanged(String),
    /// Nickname changed.
    NicknameChanged(String),
    /// Middle name changed.
    MiddleNameChanged(String),
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Copy the list (Ctrl+Shift+C).
    Copy,
    /// Toggle the optional inputs (Ctrl+,).
    ToggleMoreSettings,
    /// Dismiss the notification (Escape).
    Dismiss,
}
