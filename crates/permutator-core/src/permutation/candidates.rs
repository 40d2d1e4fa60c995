//! The generated candidate list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of candidate email addresses.
///
/// Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidates in generation order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the candidates.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Text written to the clipboard: one address per line.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.0.join("\n")
    }

    /// Comma-separated recipient list.
    #[must_use]
    pub fn bcc(&self) -> String {
        self.0.join(",")
    }
}

/// Drops empty strings and repeated entries, keeping the first occurrence.
impl From<Vec<String>> for CandidateList {
    fn from(emails: Vec<String>) -> Self {
        let mut seen = HashSet::with_capacity(emails.len());
        Self(
            emails
                .into_iter()
                .filter(|email| !email.is_empty() && seen.insert(email.clone()))
                .collect(),
        )
    }
}

impl From<CandidateList> for Vec<String> {
    fn from(list: CandidateList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> CandidateList {
        CandidateList::from(items.iter().map(ToString::to_string).collect::<Vec<_>>())
    }

    #[test]
    fn test_from_vec_deduplicates() {
        let candidates = list(&["a@x.io", "", "b@x.io", "a@x.io"]);
        assert_eq!(candidates.as_slice(), ["a@x.io", "b@x.io"]);
    }

    #[test]
    fn test_clipboard_and_bcc() {
        let candidates = list(&["a@x.io", "b@x.io"]);
        assert_eq!(candidates.clipboard_text(), "a@x.io\nb@x.io");
        assert_eq!(candidates.bcc(), "a@x.io,b@x.io");
        assert_eq!(CandidateList::new().clipboard_text(), "");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let candidates = list(&["a@x.io", "b@x.io"]);
        let json = serde_json::to_string(&candidates).unwrap();
        assert_eq!(json, r#"["a@x.io","b@x.io"]"#);
        let back: CandidateList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidates);
    }
}
