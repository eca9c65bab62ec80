// src/catalog/mod.rs
//! Credential catalog
//!
//! The fixed table of mock credentials the showcase can display. Entries are
//! `'static` and `Copy`; the selection, the coach and the carousel all work
//! on descriptors by value.

mod entries;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use entries::CATALOG;

/// Program track a credential belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Youth,
    Vanguard,
    Web3,
    Specialized,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[Youth, Vanguard, Web3, Specialized]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Youth => "Youth / Pioneer",
            Self::Vanguard => "Vanguard / Adult",
            Self::Web3 => "Web3 & Blockchain",
            Self::Specialized => "Specialized Programs",
        }
    }

    /// First word of the display name, used as the card badge
    pub fn badge(&self) -> &'static str {
        self.display_name()
            .split(' ')
            .next()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered skill level: Beginner < Intermediate < Advanced < Architect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Architect,
}

impl SkillLevel {
    pub fn all() -> &'static [SkillLevel] {
        use SkillLevel::*;
        &[Beginner, Intermediate, Advanced, Architect]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Architect => "Architect",
        }
    }

    /// 1-based rank, drives the level bar
    pub fn rank(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Architect => 4,
        }
    }

    /// Short level code shown on the card footer, e.g. `CLVL 03`
    pub fn code(&self) -> String {
        format!("CLVL {:02}", self.rank())
    }

    /// Segments of a four-segment level bar that are lit
    pub fn bar(&self) -> [bool; 4] {
        let rank = self.rank() as usize;
        std::array::from_fn(|i| i < rank)
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Styling hints carried through from the catalog. Opaque class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColors {
    pub gradient: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub glow: &'static str,
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredentialDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub level: SkillLevel,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    /// ISO `YYYY-MM-DD`
    pub date: &'static str,
    /// Display-only verification hash
    pub hash: &'static str,
    /// ZEN score weight
    pub score: u32,
    pub colors: CardColors,
}

impl CredentialDescriptor {
    /// Parsed issuance date. `None` only for malformed table entries.
    pub fn issued_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Title without the `ZEN ` brand prefix, as listed in the sidebar
    pub fn short_title(&self) -> &'static str {
        self.title.strip_prefix("ZEN ").unwrap_or(self.title)
    }
}

/// Look up a catalog entry by identifier
pub fn find(id: &str) -> Option<&'static CredentialDescriptor> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Catalog entries of one category, in table order
pub fn by_category(category: Category) -> impl Iterator<Item = &'static CredentialDescriptor> {
    CATALOG.iter().filter(move |c| c.category == category)
}

/// Sum of every score weight in the catalog
pub fn max_score() -> u32 {
    CATALOG.iter().map(|c| c.score).sum()
}
