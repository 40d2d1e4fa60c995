//! Identity fragments entered for one person.

use crate::permutation::{self, CandidateList};

/// The name fragments and domain used to guess a person's email address.
///
/// Optional fragments are represented by empty strings, matching the way the
/// form fields are edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// First name (required).
    pub first_name: String,
    /// Last name (required).
    pub last_name: String,
    /// Email domain, e.g. `example.com` (required).
    pub domain: String,
    /// Nickname (optional).
    pub nickname: String,
    /// Middle name (optional).
    pub middle_name: String,
}

impl Person {
    /// Creates a person from the required fragments.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Sets the nickname.
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the middle name.
    #[must_use]
    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = middle_name.into();
        self
    }

    /// Returns the middle name if one was entered.
    #[must_use]
    pub fn middle_name(&self) -> Option<&str> {
        non_empty(&self.middle_name)
    }

    /// Returns the nickname if one was entered.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        non_empty(&self.nickname)
    }

    /// Generates the deduplicated candidate list for this person.
    #[must_use]
    pub fn permutations(&self) -> CandidateList {
        CandidateList::from(permutation::generate(
            &self.first_name,
            &self.last_name,
            &self.domain,
            &self.nickname,
            &self.middle_name,
        ))
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fragments() {
        let person = Person::new("Kevin", "Doe", "example.com");
        assert_eq!(person.middle_name(), None);
        assert_eq!(person.nickname(), None);

        let person = person.with_middle_name("James").with_nickname("Kev");
        assert_eq!(person.middle_name(), Some("James"));
        assert_eq!(person.nickname(), Some("Kev"));
    }

    #[test]
    fn test_permutations_match_generate() {
        let person = Person::new("Kevin", "Doe", "example.com").with_nickname("Kev");
        let list = person.permutations();
        assert_eq!(
            list.as_slice(),
            permutation::generate("Kevin", "Doe", "example.com", "Kev", "").as_slice()
        );
    }
}
