//! Email permutation generation.
//!
//! Expands a fixed template catalogue over a person's name fragments and a
//! domain, then deduplicates the result while keeping first-occurrence order.

mod candidates;
mod template;

use std::collections::HashSet;

pub use candidates::CandidateList;
pub use template::{CATALOGUE, Part, Template, Tier, templates_in};

/// Normalized fragments substituted into templates.
struct Fragments {
    first: String,
    last: String,
    first_initial: String,
    last_initial: String,
    capital_first: String,
    capital_last: String,
    middle: Option<String>,
    nickname: Option<String>,
    domain: String,
}

impl Fragments {
    fn new(
        first_name: &str,
        last_name: &str,
        domain: &str,
        nickname: &str,
        middle_name: &str,
    ) -> Self {
        Self {
            first: first_name.to_ascii_lowercase(),
            last: last_name.to_ascii_lowercase(),
            first_initial: initial(first_name),
            last_initial: initial(last_name),
            capital_first: capitalize(first_name),
            capital_last: capitalize(last_name),
            middle: (!middle_name.is_empty()).then(|| middle_name.to_ascii_lowercase()),
            nickname: (!nickname.is_empty()).then(|| nickname.to_ascii_lowercase()),
            domain: domain.to_ascii_lowercase(),
        }
    }

    /// Whether the templates of `tier` apply to these fragments.
    const fn includes(&self, tier: Tier) -> bool {
        match tier {
            Tier::Base => true,
            Tier::MiddleName => self.middle.is_some(),
            Tier::Nickname => self.nickname.is_some(),
        }
    }

    fn part(&self, part: Part) -> &str {
        match part {
            Part::First => &self.first,
            Part::Last => &self.last,
            Part::FirstInitial => &self.first_initial,
            Part::LastInitial => &self.last_initial,
            Part::Middle => self.middle.as_deref().unwrap_or_default(),
            Part::Nickname => self.nickname.as_deref().unwrap_or_default(),
            Part::CapitalFirst => &self.capital_first,
            Part::CapitalLast => &self.capital_last,
            Part::Sep(sep) => sep,
        }
    }

    fn render(&self, template: &Template) -> String {
        let mut email = String::with_capacity(64);
        for part in template.parts {
            email.push_str(self.part(*part));
        }
        email.push('@');
        email.push_str(&self.domain);
        email
    }
}

/// Generates the deduplicated, ordered list of candidate addresses.
///
/// Returns an empty list if `first_name`, `last_name` or `domain` is empty.
/// The middle-name and nickname tiers are skipped entirely when the
/// corresponding fragment is empty. Case folding is ASCII only, so the output
/// does not depend on locale.
#[must_use]
pub fn generate(
    first_name: &str,
    last_name: &str,
    domain: &str,
    nickname: &str,
    middle_name: &str,
) -> Vec<String> {
    if first_name.is_empty() || last_name.is_empty() || domain.is_empty() {
        return Vec::new();
    }

    let fragments = Fragments::new(first_name, last_name, domain, nickname, middle_name);
    let mut seen = HashSet::with_capacity(CATALOGUE.len());

    CATALOGUE
        .iter()
        .filter(|template| fragments.includes(template.tier))
        .map(|template| fragments.render(template))
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

/// First character, lower-cased.
fn initial(s: &str) -> String {
    s.chars()
        .next()
        .map(|c| c.to_ascii_lowercase().to_string())
        .unwrap_or_default()
}

/// First character upper-cased, the remainder unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(s.len());
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
        out
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn contains(list: &[String], email: &str) -> bool {
        list.iter().any(|e| e == email)
    }

    #[test]
    fn test_required_fragments() {
        assert!(generate("", "Doe", "example.com", "", "").is_empty());
        assert!(generate("Kevin", "", "example.com", "", "").is_empty());
        assert!(generate("Kevin", "Doe", "", "", "").is_empty());
        assert!(generate("", "", "", "Kev", "James").is_empty());
    }

    #[test]
    fn test_basic_scenario() {
        let list = generate("Kevin", "Doe", "example.com", "", "");
        for expected in [
            "kevin@example.com",
            "doe@example.com",
            "kevin.doe@example.com",
            "kdoe@example.com",
            "k.doe@example.com",
        ] {
            assert!(contains(&list, expected), "missing {expected}");
        }
        assert!(!list.iter().any(|e| e.contains("kev@") || e.contains("james")));
    }

    #[test]
    fn test_exact_order_without_optional_fragments() {
        let list = generate("Kevin", "Doe", "example.com", "", "");
        let expected = [
            "kevin",
            "doe",
            "kevindoe",
            "kevin.doe",
            "kdoe",
            "k.doe",
            "kevind",
            "kevin.d",
            "kd",
            "k.d",
            "kevin-doe",
            "k-doe",
            "kevin-d",
            "doe-kevin",
            "kevin_doe",
            "k_doe",
            "kevin_d",
            "doe_kevin",
            "doekevin",
            "doe.kevin",
            "doek",
            "doe.k",
            "dkevin",
            "d.kevin",
            "Kevin.Doe",
            "KevinDoe",
            "Kevin_Doe",
            "Kevin-Doe",
            "k-d",
            "k_d",
        ]
        .map(|local| format!("{local}@example.com"));
        assert_eq!(list, expected);
    }

    #[test]
    fn test_optional_tiers() {
        let list = generate("Kevin", "Doe", "example.com", "Kev", "James");
        for expected in [
            "kev@example.com",
            "kev.doe@example.com",
            "kevin.kev@example.com",
            "kevinkev@example.com",
            "kevinjames@example.com",
            "kevin.james.doe@example.com",
            "kevin-james-doe@example.com",
            "kevin_james@example.com",
            "kjames@example.com",
        ] {
            assert!(contains(&list, expected), "missing {expected}");
        }
        // Middle tier sits before the nickname tier in the catalogue.
        let middle = list.iter().position(|e| e == "kevinjames@example.com");
        let nick = list.iter().position(|e| e == "kev@example.com");
        assert!(middle.unwrap() < nick.unwrap());
    }

    #[test]
    fn test_domain_is_lowercased() {
        let list = generate("Kevin", "Doe", "Example.COM", "", "");
        assert!(list.iter().all(|e| e.ends_with("@example.com")));
    }

    #[test]
    fn test_capitalize_keeps_remainder() {
        assert_eq!(capitalize("kEVIN"), "KEVIN");
        assert_eq!(capitalize("o'brien"), "O'brien");
        assert_eq!(capitalize(""), "");
        let list = generate("mcDonald", "o'neil", "example.com", "", "");
        assert!(contains(&list, "McDonald.O'neil@example.com"));
        assert!(contains(&list, "mcdonald.o'neil@example.com"));
    }

    #[test]
    fn test_single_letter_names_collapse() {
        let list = generate("K", "D", "example.com", "", "");
        assert_eq!(list.first().map(String::as_str), Some("k@example.com"));
        assert!(contains(&list, "kd@example.com"));
        assert!(contains(&list, "K.D@example.com"));
        let unique: HashSet<_> = list.iter().collect();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn test_nickname_equal_to_first_name_deduplicates() {
        let list = generate("Kevin", "Doe", "example.com", "kevin", "");
        let count = list.iter().filter(|e| *e == "kevin@example.com").count();
        assert_eq!(count, 1);
        assert!(contains(&list, "kevin.kevin@example.com"));
    }
}
