//! Gmail compose deep link.

use tracing::warn;
use url::Url;

use crate::permutation::CandidateList;

/// Gmail's compose endpoint.
const GMAIL_BASE: &str = "https://mail.google.com/mail/";

/// Builds a link that opens Gmail's composer with every candidate in Bcc.
///
/// The recipients are joined with commas and percent-encoded into the `bcc`
/// query parameter.
#[must_use]
pub fn gmail_compose_url(candidates: &CandidateList) -> String {
    match Url::parse_with_params(
        GMAIL_BASE,
        [("view", "cm"), ("fs", "1"), ("bcc", candidates.bcc().as_str())],
    ) {
        Ok(url) => url.into(),
        Err(e) => {
            warn!("Failed to build compose link, opening an empty draft: {}", e);
            GMAIL_BASE.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_url() {
        let candidates = CandidateList::from(vec![
            "kevin@example.com".to_string(),
            "k.doe@example.com".to_string(),
        ]);
        assert_eq!(
            gmail_compose_url(&candidates),
            "https://mail.google.com/mail/?view=cm&fs=1&bcc=kevin%40example.com%2Ck.doe%40example.com"
        );
    }

    #[test]
    fn test_compose_url_empty_list() {
        assert_eq!(
            gmail_compose_url(&CandidateList::new()),
            "https://mail.google.com/mail/?view=cm&fs=1&bcc="
        );
    }

    #[test]
    fn test_compose_url_uses_form_encoding() {
        let candidates = CandidateList::from(vec!["o'brien@example.com".to_string()]);
        assert_eq!(
            gmail_compose_url(&candidates),
            "https://mail.google.com/mail/?view=cm&fs=1&bcc=o%27brien%40example.com"
        );
    }

    #[test]
    fn test_compose_url_roundtrips_recipients() {
        let candidates = CandidateList::from(vec!["o'brien@example.com".to_string()]);
        let url = Url::parse(&gmail_compose_url(&candidates)).unwrap();
        let bcc = url
            .query_pairs()
            .find(|(k, _)| k == "bcc")
            .map(|(_, v)| v.into_owned());
        assert_eq!(bcc.as_deref(), Some("o'brien@example.com"));
    }
}
