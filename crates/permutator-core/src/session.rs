//! The submission workflow.
//!
//! A [`Session`] is the explicit state behind the permutator form: the entered
//! fragments, the current candidate list, the visible notification and the
//! "more settings" flag. Every user action is a method that moves the session
//! from one snapshot to the next.

use tracing::{info, warn};

use crate::compose::gmail_compose_url;
use crate::notification::{Notification, NotificationId, Notifications};
use crate::permutation::CandidateList;
use crate::person::Person;
use crate::storage::{self, KeyValueStore};
use crate::validation::{
    Field, INVALID_INPUT_MESSAGE, ValidationError, is_field_valid, validate_person,
};

/// Shown after a successful generation.
pub const GENERATED_MESSAGE: &str = "Emails generated successfully!";

/// Shown after the list was copied.
pub const COPIED_MESSAGE: &str = "Emails copied to clipboard!";

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the list was replaced.
    Generated {
        /// Number of candidates generated.
        count: usize,
        /// Success notification to dismiss later.
        notification: NotificationId,
    },
    /// Validation failed; the previous list is untouched.
    Invalid {
        /// Every failing field.
        errors: Vec<ValidationError>,
        /// Error notification to dismiss later.
        notification: NotificationId,
    },
}

impl SubmitOutcome {
    /// The notification raised by this submission.
    #[must_use]
    pub const fn notification(&self) -> NotificationId {
        match self {
            Self::Generated { notification, .. } | Self::Invalid { notification, .. } => {
                *notification
            }
        }
    }
}

/// State of one running permutator.
#[derive(Debug, Default)]
pub struct Session {
    /// Form contents.
    pub person: Person,
    /// Whether the nickname and middle name inputs are shown.
    pub show_more_settings: bool,
    candidates: CandidateList,
    notifications: Notifications,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with the list stored by a previous run.
    ///
    /// A missing or unreadable value starts with an empty list.
    #[must_use]
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let mut session = Self::new();
        match storage::load_candidates(store) {
            Ok(Some(candidates)) => {
                info!("Restored {} generated emails", candidates.len());
                session.candidates = candidates;
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring stored emails: {}", e),
        }
        session
    }

    /// Sets the first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.person.first_name = value.into();
    }

    /// Sets the last name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.person.last_name = value.into();
    }

    /// Sets the domain.
    pub fn set_domain(&mut self, value: impl Into<String>) {
        self.person.domain = value.into();
    }

    /// Sets the nickname.
    pub fn set_nickname(&mut self, value: impl Into<String>) {
        self.person.nickname = value.into();
    }

    /// Sets the middle name.
    pub fn set_middle_name(&mut self, value: impl Into<String>) {
        self.person.middle_name = value.into();
    }

    /// Shows or hides the optional inputs.
    pub const fn toggle_more_settings(&mut self) {
        self.show_more_settings = !self.show_more_settings;
    }

    /// Validates the form and, if it passes, regenerates and persists the list.
    ///
    /// A failed persist is logged; the new list is still shown.
    pub fn submit(&mut self, store: &mut dyn KeyValueStore) -> SubmitOutcome {
        if let Err(errors) = validate_person(&self.person) {
            info!("Rejected input: {:?}", errors);
            let notification = self.notifications.error(INVALID_INPUT_MESSAGE);
            return SubmitOutcome::Invalid {
                errors,
                notification,
            };
        }

        self.candidates = self.person.permutations();
        let count = self.candidates.len();
        info!("Generated {} emails for domain {}", count, self.person.domain);

        if let Err(e) = storage::save_candidates(store, &self.candidates) {
            warn!("Failed to persist generated emails: {}", e);
        }

        let notification = self.notifications.success(GENERATED_MESSAGE);
        SubmitOutcome::Generated {
            count,
            notification,
        }
    }

    /// Records a successful clipboard write.
    pub fn copy_succeeded(&mut self) -> NotificationId {
        self.notifications.success(COPIED_MESSAGE)
    }

    /// Records a failed clipboard write.
    pub fn copy_failed(&mut self, reason: &str) -> NotificationId {
        warn!("Clipboard write failed: {}", reason);
        self.notifications.error(format!("Failed to copy emails: {reason}"))
    }

    /// Records a failure to open the compose link.
    pub fn compose_failed(&mut self, reason: &str) -> NotificationId {
        warn!("Opening compose link failed: {}", reason);
        self.notifications.error(format!("Failed to open Gmail: {reason}"))
    }

    /// Dismisses `id` if it is still visible.
    pub fn expire_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.expire(id)
    }

    /// Dismisses the visible notification early.
    pub fn dismiss_notification(&mut self) {
        self.notifications.clear();
    }

    /// The current candidate list.
    #[must_use]
    pub const fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Number of candidates.
    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    /// Text for the results footer.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("This tool generated {} emails.", self.count())
    }

    /// Text to place on the clipboard.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.candidates.clipboard_text()
    }

    /// Gmail compose link for the current list.
    #[must_use]
    pub fn compose_url(&self) -> String {
        gmail_compose_url(&self.candidates)
    }

    /// The visible notification.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Whether `field` should be drawn as invalid.
    ///
    /// The field's current value is checked, and only while an error
    /// notification is visible.
    #[must_use]
    pub fn is_field_invalid(&self, field: Field) -> bool {
        self.notification().is_some_and(Notification::is_error)
            && !is_field_valid(&self.person, field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;
    use crate::storage::{GENERATED_EMAILS_KEY, MemoryStore};
    use crate::{Error, Result};

    fn filled() -> Session {
        let mut session = Session::new();
        session.set_first_name("Kevin");
        session.set_last_name("Doe");
        session.set_domain("example.com");
        session
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<serde_json::Value>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: serde_json::Value) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_submit_generates_and_persists() {
        let mut store = MemoryStore::new();
        let mut session = filled();

        let outcome = session.submit(&mut store);
        assert!(matches!(outcome, SubmitOutcome::Generated { count: 30, .. }));
        assert_eq!(session.count(), 30);
        assert_eq!(session.summary(), "This tool generated 30 emails.");

        let stored = storage::load_candidates(&store).unwrap().unwrap();
        assert_eq!(&stored, session.candidates());

        let notification = session.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, GENERATED_MESSAGE);
        assert_eq!(notification.id, outcome.notification());
    }

    #[test]
    fn test_invalid_submit_keeps_previous_list() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.submit(&mut store);
        let before = session.candidates().clone();

        session.set_first_name("Kevin1");
        let outcome = session.submit(&mut store);

        match outcome {
            SubmitOutcome::Invalid { ref errors, .. } => {
                assert_eq!(errors, &[ValidationError::InvalidFirstName]);
            }
            SubmitOutcome::Generated { .. } => panic!("expected validation failure"),
        }
        assert_eq!(session.candidates(), &before);
        assert_eq!(storage::load_candidates(&store).unwrap(), Some(before));

        let notification = session.notification().unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.message, INVALID_INPUT_MESSAGE);
        assert!(session.is_field_invalid(Field::FirstName));
        assert!(!session.is_field_invalid(Field::LastName));
    }

    #[test]
    fn test_invalid_highlight_clears_with_notification() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.set_domain("example");
        let outcome = session.submit(&mut store);
        assert!(session.is_field_invalid(Field::Domain));

        assert!(session.expire_notification(outcome.notification()));
        assert!(!session.is_field_invalid(Field::Domain));
    }

    #[test]
    fn test_corrected_field_is_no_longer_flagged() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.set_first_name("Kevin1");
        session.submit(&mut store);
        assert!(session.is_field_invalid(Field::FirstName));

        session.set_first_name("Kevin");
        assert!(session.notification().unwrap().is_error());
        assert!(!session.is_field_invalid(Field::FirstName));
    }

    #[test]
    fn test_unrelated_error_flags_only_current_values() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.set_first_name("Kevin1");
        session.submit(&mut store);
        session.set_first_name("Kevin");

        session.copy_failed("no clipboard");
        assert!(!session.is_field_invalid(Field::FirstName));

        session.set_domain("example");
        assert!(session.is_field_invalid(Field::Domain));
        assert!(!session.is_field_invalid(Field::Nickname));
    }

    #[test]
    fn test_optional_fields_only_checked_when_present() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.set_nickname("");
        assert!(matches!(
            session.submit(&mut store),
            SubmitOutcome::Generated { .. }
        ));

        session.set_nickname("K3v");
        assert!(matches!(
            session.submit(&mut store),
            SubmitOutcome::Invalid { .. }
        ));
        assert!(session.is_field_invalid(Field::Nickname));
    }

    #[test]
    fn test_persist_failure_still_generates() {
        let mut session = filled();
        let outcome = session.submit(&mut ReadOnlyStore);
        assert!(matches!(outcome, SubmitOutcome::Generated { .. }));
        assert!(!session.candidates().is_empty());
        assert!(!session.notification().unwrap().is_error());
    }

    #[test]
    fn test_restore_from_store() {
        let mut store = MemoryStore::new();
        filled().submit(&mut store);

        let restored = Session::restore(&store);
        assert_eq!(restored.count(), 30);
        assert!(restored.notification().is_none());
        assert_eq!(restored.person, Person::default());
    }

    #[test]
    fn test_restore_ignores_corrupt_value() {
        let mut store = MemoryStore::new();
        store
            .set(GENERATED_EMAILS_KEY, serde_json::json!("garbage"))
            .unwrap();
        let restored = Session::restore(&store);
        assert!(restored.candidates().is_empty());
    }

    #[test]
    fn test_copy_notification_supersedes_generation() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        let generated = session.submit(&mut store).notification();
        let copied = session.copy_succeeded();

        // The timer scheduled for the first notification fires late.
        assert!(!session.expire_notification(generated));
        assert_eq!(session.notification().unwrap().message, COPIED_MESSAGE);
        assert!(session.expire_notification(copied));
        assert!(session.notification().is_none());
    }

    #[test]
    fn test_copy_failure_is_error() {
        let mut session = Session::new();
        session.copy_failed("no clipboard");
        let notification = session.notification().unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.message, "Failed to copy emails: no clipboard");
    }

    #[test]
    fn test_toggle_more_settings() {
        let mut session = Session::new();
        assert!(!session.show_more_settings);
        session.toggle_more_settings();
        assert!(session.show_more_settings);
        session.toggle_more_settings();
        assert!(!session.show_more_settings);
    }

    #[test]
    fn test_clipboard_and_compose() {
        let mut store = MemoryStore::new();
        let mut session = filled();
        session.submit(&mut store);
        assert!(session.clipboard_text().starts_with("kevin@example.com\ndoe@example.com\n"));
        assert!(
            session
                .compose_url()
                .starts_with("https://mail.google.com/mail/?view=cm&fs=1&bcc=kevin%40example.com%2C")
        );
    }
}
