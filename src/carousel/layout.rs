// src/carousel/layout.rs
// Ring placement of active cards

use serde::Serialize;

use crate::catalog::CredentialDescriptor;

/// Smallest ring radius once more than one card is shown, px
pub const MIN_RING_RADIUS: f64 = 350.0;
/// Radius before per-card growth, px
pub const RING_BASE: f64 = 280.0;
/// Growth per active card, px
pub const RING_GROWTH_PER_CARD: f64 = 25.0;

/// Ring radius for `count` active cards; a lone card sits at the center
pub fn ring_radius(count: usize) -> f64 {
    if count > 1 {
        MIN_RING_RADIUS.max(RING_BASE + count as f64 * RING_GROWTH_PER_CARD)
    } else {
        0.0
    }
}

/// Angular spacing between neighbours, degrees
pub fn spacing_deg(count: usize) -> f64 {
    360.0 / count.max(1) as f64
}

/// Where one card sits on the ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPlacement {
    pub id: &'static str,
    pub index: usize,
    pub angle_deg: f64,
    pub radius: f64,
    /// Position in the stage plane (x right, z toward the viewer)
    pub x: f64,
    pub z: f64,
}

impl CardPlacement {
    pub fn css(&self) -> String {
        format!("rotateY({}deg) translateZ({}px)", self.angle_deg, self.radius)
    }
}

/// Place `cards` at equal spacing around the ring, in order
pub fn ring_layout(cards: &[CredentialDescriptor]) -> Vec<CardPlacement> {
    let count = cards.len();
    let radius = ring_radius(count);
    let spacing = spacing_deg(count);

    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let angle_deg = index as f64 * spacing;
            let theta = angle_deg.to_radians();
            CardPlacement {
                id: card.id,
                index,
                angle_deg,
                radius,
                x: radius * theta.sin(),
                z: radius * theta.cos(),
            }
        })
        .collect()
}

/// Index of the card currently facing the viewer for a stage rotation
pub fn front_index(rotation_deg: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let spacing = spacing_deg(count);
    // Card i faces forward when i * spacing + rotation ≡ 0 (mod 360)
    let facing = (-rotation_deg).rem_euclid(360.0);
    Some(((facing / spacing).round() as usize) % count)
}
