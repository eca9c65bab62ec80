// src/insight/mod.rs
//! Rule-based "AI coach"
//!
//! Maps the active credential set to three capped percentages, a status
//! tier, a next-step recommendation and a short portfolio narrative. The
//! whole thing is a pure function of the set; nothing is cached.

mod narrative;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, CredentialDescriptor};

pub use narrative::narrative;

/// Score ceiling for every derived percentage
pub const SCORE_CAP: u32 = 100;

/// Career status tier, ordered from entry level upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Education-Ready")]
    EducationReady,
    #[serde(rename = "Workforce-Ready")]
    WorkforceReady,
    #[serde(rename = "Trainer-Level")]
    TrainerLevel,
    Architect,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EducationReady => "Education-Ready",
            Self::WorkforceReady => "Workforce-Ready",
            Self::TrainerLevel => "Trainer-Level",
            Self::Architect => "Architect",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived coaching result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResult {
    pub literacy_score: u32,
    pub automation_readiness: u32,
    pub web3_fluency: u32,
    pub recommendation: String,
    pub narrative: String,
    pub status: Status,
}

pub const REC_VANGUARD_MOD1: &str =
    "You have the basics. Move to Vanguard Mod 1 to apply this mindset professionally.";
pub const REC_VANGUARD_MOD2: &str =
    "Time to build leverage. Enroll in Vanguard Mod 2: Automation.";
pub const REC_BLOCKCHAIN: &str =
    "Your automation skills are strong. secure your portfolio with Blockchain Literacy.";
pub const REC_EDUCATOR: &str =
    "You are operating at an Architect level. Consider the ZEN Educator Track to mentor others.";
pub const REC_FOUNDATIONS: &str = "Start with the ZEN AI Pioneer Foundations to build a base.";

/// Per-category counts of a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CategoryCounts {
    youth: u32,
    vanguard: u32,
    web3: u32,
    specialized: u32,
}

impl CategoryCounts {
    fn tally(cards: &[CredentialDescriptor]) -> Self {
        let mut counts = Self::default();
        for card in cards {
            match card.category {
                Category::Youth => counts.youth += 1,
                Category::Vanguard => counts.vanguard += 1,
                Category::Web3 => counts.web3 += 1,
                Category::Specialized => counts.specialized += 1,
            }
        }
        counts
    }
}

/// Status tiers, evaluated in order; a later satisfied rule overrides an
/// earlier one.
pub fn classify(literacy: u32, automation: u32, web3: u32) -> Status {
    let mut status = Status::EducationReady;
    if automation > 60 {
        status = Status::WorkforceReady;
    }
    if literacy > 80 && automation > 50 {
        status = Status::TrainerLevel;
    }
    if web3 > 50 && literacy > 90 {
        status = Status::Architect;
    }
    status
}

/// First matching recommendation rule wins
fn recommend(cards: &[CredentialDescriptor], automation: u32, web3: u32, status: Status) -> &'static str {
    let has_pioneer = cards.iter().any(|c| c.id.contains("pioneer"));
    let has_vanguard1 = cards.iter().any(|c| c.id == "vanguard-1");

    if has_pioneer && !has_vanguard1 {
        REC_VANGUARD_MOD1
    } else if has_vanguard1 && automation < 40 {
        REC_VANGUARD_MOD2
    } else if automation > 60 && web3 < 20 {
        REC_BLOCKCHAIN
    } else if status == Status::Architect {
        REC_EDUCATOR
    } else {
        REC_FOUNDATIONS
    }
}

/// Analyze an active set. Empty input is valid.
pub fn analyze(cards: &[CredentialDescriptor]) -> InsightResult {
    let counts = CategoryCounts::tally(cards);

    let literacy = (10 + 15 * counts.youth + 10 * counts.vanguard + 5 * counts.specialized).min(SCORE_CAP);
    let automation = (5 + 15 * counts.vanguard + 5 * counts.specialized).min(SCORE_CAP);
    let web3 = (25 * counts.web3).min(SCORE_CAP);

    let status = classify(literacy, automation, web3);
    let recommendation = recommend(cards, automation, web3, status);

    InsightResult {
        literacy_score: literacy,
        automation_readiness: automation,
        web3_fluency: web3,
        recommendation: recommendation.to_string(),
        narrative: narrative(cards.len(), automation, web3, status),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CATALOG};

    fn cards(ids: &[&str]) -> Vec<CredentialDescriptor> {
        ids.iter().map(|id| *catalog::find(id).unwrap()).collect()
    }

    #[test]
    fn test_empty_selection() {
        let insight = analyze(&[]);
        assert_eq!(insight.literacy_score, 10);
        assert_eq!(insight.automation_readiness, 5);
        assert_eq!(insight.web3_fluency, 0);
        assert_eq!(insight.status, Status::EducationReady);
        assert_eq!(insight.recommendation, REC_FOUNDATIONS);
    }

    #[test]
    fn test_youth_plus_vanguard_is_education_ready() {
        let insight = analyze(&cards(&["pioneer-1", "vanguard-1"]));
        assert_eq!(insight.literacy_score, 35);
        assert_eq!(insight.automation_readiness, 20);
        assert_eq!(insight.status, Status::EducationReady);
        // vanguard-1 present and automation < 40
        assert_eq!(insight.recommendation, REC_VANGUARD_MOD2);
    }

    #[test]
    fn test_four_vanguard_is_workforce_ready() {
        let insight = analyze(&cards(&["vanguard-1", "vanguard-2", "vanguard-3", "vanguard-4"]));
        assert_eq!(insight.automation_readiness, 65);
        assert_eq!(insight.literacy_score, 50);
        assert_eq!(insight.status, Status::WorkforceReady);
        assert_eq!(insight.recommendation, REC_BLOCKCHAIN);
    }

    #[test]
    fn test_pioneer_without_vanguard1() {
        let insight = analyze(&cards(&["pioneer-2", "spec-1"]));
        assert_eq!(insight.recommendation, REC_VANGUARD_MOD1);
    }

    #[test]
    fn test_full_catalog_is_trainer_level() {
        let insight = analyze(CATALOG);
        // 10 + 30 + 40 + 20
        assert_eq!(insight.literacy_score, 100);
        // 5 + 60 + 20
        assert_eq!(insight.automation_readiness, 85);
        assert_eq!(insight.web3_fluency, 50);
        assert_eq!(insight.status, Status::TrainerLevel);
    }

    #[test]
    fn test_classify_later_rules_win() {
        assert_eq!(classify(10, 61, 0), Status::WorkforceReady);
        assert_eq!(classify(81, 61, 0), Status::TrainerLevel);
        assert_eq!(classify(91, 61, 51), Status::Architect);
        assert_eq!(classify(91, 0, 51), Status::Architect);
        assert_eq!(classify(90, 61, 100), Status::TrainerLevel);
    }

    #[test]
    fn test_scores_capped() {
        let many: Vec<_> = std::iter::repeat(*catalog::find("vanguard-2").unwrap())
            .take(20)
            .collect();
        let insight = analyze(&many);
        assert_eq!(insight.literacy_score, 100);
        assert_eq!(insight.automation_readiness, 100);
    }

    #[test]
    fn test_status_serializes_display_name() {
        let json = serde_json::to_string(&Status::TrainerLevel).unwrap();
        assert_eq!(json, "\"Trainer-Level\"");
    }
}
