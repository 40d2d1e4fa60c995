//! # permutator-core
//!
//! Core logic for `Permutator`, a tool that guesses a person's email address.
//!
//! This crate provides:
//! - Name and domain validation
//! - The email permutation generator and its template catalogue
//! - The submission workflow (`Session`) behind the desktop UI
//! - Auto-dismissing notifications
//! - Key-value persistence of the last generated list
//! - The Gmail compose deep link
//!
//! ## Example
//!
//! ```
//! use permutator_core::generate;
//!
//! let emails = generate("Kevin", "Doe", "example.com", "", "");
//! assert_eq!(emails[0], "kevin@example.com");
//! assert!(emails.contains(&"k.doe@example.com".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod compose;
mod error;
pub mod notification;
pub mod permutation;
pub mod person;
pub mod session;
pub mod storage;
pub mod validation;

pub use compose::gmail_compose_url;
pub use error::{Error, Result};
pub use notification::{
    NOTIFICATION_TIMEOUT, Notification, NotificationId, NotificationKind, Notifications,
};
pub use permutation::{CandidateList, Template, Tier, generate};
pub use person::Person;
pub use session::{Session, SubmitOutcome};
pub use storage::{FileStore, GENERATED_EMAILS_KEY, KeyValueStore, MemoryStore, load, save};
pub use validation::{
    Field, ValidationError, ValidationResult, is_field_valid, is_valid_domain, is_valid_name,
    validate_person,
};
