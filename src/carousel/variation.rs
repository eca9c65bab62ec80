// src/carousel/variation.rs
// Deterministic per-card cosmetic variation keyed by card id

use serde::Serialize;

use crate::catalog::{Category, CredentialDescriptor};

const PM_MULTIPLIER: u64 = 16807;
const PM_MODULUS: u64 = 2_147_483_647;

/// Stable seed for an id: sum of its UTF-16 code units
pub fn id_seed(id: &str) -> u64 {
    id.encode_utf16().map(u64::from).sum()
}

/// Park–Miller minimal standard generator, yields values in [0, 1)
#[derive(Debug, Clone)]
pub struct ParkMiller {
    state: u64,
}

impl ParkMiller {
    pub fn new(seed: u64) -> Self {
        // A zero state would be a fixed point
        let state = match seed % PM_MODULUS {
            0 => 1,
            s => s,
        };
        Self { state }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * PM_MULTIPLIER) % PM_MODULUS;
        (self.state - 1) as f64 / (PM_MODULUS - 1) as f64
    }
}

impl Iterator for ParkMiller {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CosmicSystem {
    Vortex,
    Rings,
    Nebula,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckLayout {
    TacticalHud,
    DataFall,
}

/// Background motif rendered behind a card, picked per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualMotif {
    CosmicForge { system: CosmicSystem },
    CyberDeck { layout: DeckLayout },
    CryptoLattice { nodes: u32 },
    SonicField { bars: u32 },
}

impl VisualMotif {
    fn pick(category: Category, seed: u64) -> Self {
        let mut rng = ParkMiller::new(seed);
        let r = rng.next_f64();
        match category {
            Category::Youth => Self::CosmicForge {
                system: match (r * 3.0) as u32 {
                    0 => CosmicSystem::Vortex,
                    1 => CosmicSystem::Rings,
                    _ => CosmicSystem::Nebula,
                },
            },
            Category::Vanguard => Self::CyberDeck {
                layout: if r < 0.5 { DeckLayout::TacticalHud } else { DeckLayout::DataFall },
            },
            Category::Web3 => Self::CryptoLattice {
                nodes: (6.0 + r * 6.0) as u32,
            },
            Category::Specialized => Self::SonicField { bars: 12 },
        }
    }
}

/// Cosmetic values for one card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardVariation {
    pub seed: u64,
    /// Resting rotation offset in [-5, 5) degrees
    pub tilt_offset_deg: f64,
    pub motif: VisualMotif,
}

impl CardVariation {
    pub fn for_card(card: &CredentialDescriptor) -> Self {
        let seed = id_seed(card.id);
        let tilt_offset_deg = ParkMiller::new(seed).next_f64() * 10.0 - 5.0;
        Self {
            seed,
            tilt_offset_deg,
            motif: VisualMotif::pick(card.category, seed),
        }
    }
}
