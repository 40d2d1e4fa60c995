//! The fixed template catalogue.
//!
//! Order matters: it determines the insertion order of the deduplicated
//! candidate list.

/// A piece of an email local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Lower-cased first name.
    First,
    /// Lower-cased last name.
    Last,
    /// Lower-cased first character of the first name.
    FirstInitial,
    /// Lower-cased first character of the last name.
    LastInitial,
    /// Lower-cased middle name.
    Middle,
    /// Lower-cased nickname.
    Nickname,
    /// First name with its first character upper-cased.
    CapitalFirst,
    /// Last name with its first character upper-cased.
    CapitalLast,
    /// A literal separator.
    Sep(&'static str),
}

/// Group of templates gated on an optional fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Always generated.
    Base,
    /// Generated only when a middle name is present.
    MiddleName,
    /// Generated only when a nickname is present.
    Nickname,
}

/// One entry of the catalogue: a local-part pattern and the tier gating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Tier this template belongs to.
    pub tier: Tier,
    /// Local-part pieces, concatenated in order.
    pub parts: &'static [Part],
}

impl Template {
    const fn base(parts: &'static [Part]) -> Self {
        Self {
            tier: Tier::Base,
            parts,
        }
    }

    const fn middle(parts: &'static [Part]) -> Self {
        Self {
            tier: Tier::MiddleName,
            parts,
        }
    }

    const fn nickname(parts: &'static [Part]) -> Self {
        Self {
            tier: Tier::Nickname,
            parts,
        }
    }
}

use Part::{
    CapitalFirst as CF, CapitalLast as CL, First as F, FirstInitial as FI, Last as L,
    LastInitial as LI, Middle as M, Nickname as N,
};

const DOT: Part = Part::Sep(".");
const DASH: Part = Part::Sep("-");
const UNDER: Part = Part::Sep("_");

/// Every template, in output order.
pub const CATALOGUE: &[Template] = &[
    // Basic
    Template::base(&[F]),
    Template::base(&[L]),
    Template::base(&[F, L]),
    Template::base(&[F, DOT, L]),
    Template::base(&[FI, L]),
    Template::base(&[FI, DOT, L]),
    Template::base(&[F, LI]),
    Template::base(&[F, DOT, LI]),
    Template::base(&[FI, LI]),
    Template::base(&[FI, DOT, LI]),
    // Middle name
    Template::middle(&[F, M]),
    Template::middle(&[F, DOT, M]),
    Template::middle(&[FI, M]),
    Template::middle(&[FI, DOT, M]),
    Template::middle(&[F, M, L]),
    Template::middle(&[F, DOT, M, DOT, L]),
    // Nickname
    Template::nickname(&[N]),
    Template::nickname(&[N, DOT, L]),
    Template::nickname(&[F, DOT, N]),
    Template::nickname(&[F, N]),
    // Hyphens
    Template::base(&[F, DASH, L]),
    Template::base(&[FI, DASH, L]),
    Template::base(&[F, DASH, LI]),
    Template::base(&[L, DASH, F]),
    Template::middle(&[F, DASH, M]),
    Template::middle(&[F, DASH, M, DASH, L]),
    // Underscores
    Template::base(&[F, UNDER, L]),
    Template::base(&[FI, UNDER, L]),
    Template::base(&[F, UNDER, LI]),
    Template::base(&[L, UNDER, F]),
    Template::middle(&[F, UNDER, M]),
    Template::middle(&[F, UNDER, M, UNDER, L]),
    // Reverse order
    Template::base(&[L, F]),
    Template::base(&[L, DOT, F]),
    Template::base(&[L, FI]),
    Template::base(&[L, DOT, FI]),
    Template::base(&[LI, F]),
    Template::base(&[LI, DOT, F]),
    // Capitalized full name
    Template::base(&[CF, DOT, CL]),
    Template::base(&[CF, CL]),
    Template::base(&[CF, UNDER, CL]),
    Template::base(&[CF, DASH, CL]),
    // Initials
    Template::base(&[FI, LI]),
    Template::base(&[FI, DOT, LI]),
    Template::base(&[FI, DASH, LI]),
    Template::base(&[FI, UNDER, LI]),
];

/// Returns the templates belonging to `tier`, in catalogue order.
pub fn templates_in(tier: Tier) -> impl Iterator<Item = &'static Template> {
    CATALOGUE.iter().filter(move |t| t.tier == tier)
}
