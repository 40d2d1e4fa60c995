//! Name and domain validation.

use crate::person::Person;

/// Message shown when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid names (letters, hyphens, apostrophes) and a valid domain.";

/// Form field a validation error relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First name input.
    FirstName,
    /// Last name input.
    LastName,
    /// Domain input.
    Domain,
    /// Nickname input.
    Nickname,
    /// Middle name input.
    MiddleName,
}

/// Validation error for the permutation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// First name is empty or contains disallowed characters.
    InvalidFirstName,
    /// Last name is empty or contains disallowed characters.
    InvalidLastName,
    /// Domain does not look like `label.tld`.
    InvalidDomain,
    /// Nickname was entered but contains disallowed characters.
    InvalidNickname,
    /// Middle name was entered but contains disallowed characters.
    InvalidMiddleName,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidFirstName => "First name may only contain letters, hyphens and apostrophes",
            Self::InvalidLastName => "Last name may only contain letters, hyphens and apostrophes",
            Self::InvalidDomain => "Domain must look like example.com",
            Self::InvalidNickname => "Nickname may only contain letters, hyphens and apostrophes",
            Self::InvalidMiddleName => {
                "Middle name may only contain letters, hyphens and apostrophes"
            }
        }
    }

    /// Get the field this error relates to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidFirstName => Field::FirstName,
            Self::InvalidLastName => Field::LastName,
            Self::InvalidDomain => Field::Domain,
            Self::InvalidNickname => Field::Nickname,
            Self::InvalidMiddleName => Field::MiddleName,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a person.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Returns true if `name` is non-empty and made only of ASCII letters,
/// hyphens and apostrophes.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'')
}

/// Returns true if `domain` has the shape `label.tld`.
///
/// The label is one or more ASCII letters, digits or hyphens and the suffix is
/// at least two ASCII letters. Subdomains are rejected.
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    let Some((label, suffix)) = domain.split_once('.') else {
        return false;
    };

    !label.is_empty()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && suffix.len() >= 2
        && suffix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns true if the current value of `field` passes validation.
///
/// An empty optional field is valid.
#[must_use]
pub fn is_field_valid(person: &Person, field: Field) -> bool {
    match field {
        Field::FirstName => is_valid_name(&person.first_name),
        Field::LastName => is_valid_name(&person.last_name),
        Field::Domain => is_valid_domain(&person.domain),
        Field::Nickname => person.nickname().is_none_or(is_valid_name),
        Field::MiddleName => person.middle_name().is_none_or(is_valid_name),
    }
}

/// Validate every field of the form.
///
/// Optional fields are only checked when they are non-empty.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_person(person: &Person) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_valid_name(&person.first_name) {
        errors.push(ValidationError::InvalidFirstName);
    }
    if !is_valid_name(&person.last_name) {
        errors.push(ValidationError::InvalidLastName);
    }
    if person.middle_name().is_some_and(|m| !is_valid_name(m)) {
        errors.push(ValidationError::InvalidMiddleName);
    }
    if person.nickname().is_some_and(|n| !is_valid_name(n)) {
        errors.push(ValidationError::InvalidNickname);
    }
    if !is_valid_domain(&person.domain) {
        errors.push(ValidationError::InvalidDomain);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
