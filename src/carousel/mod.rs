// src/carousel/mod.rs
//! 3D card carousel: layout and rotation physics
//!
//! Active cards sit at equal spacing on a ring; the ring spins on its own
//! (idle-spin), can be grabbed and flung (user-drag), and banks into the
//! turn through a spring-smoothed tilt. All of it is plain per-frame
//! arithmetic driven by the host's frame callback.

mod layout;
mod physics;
mod spring;
mod variation;

use serde::{Deserialize, Serialize};

pub use layout::{CardPlacement, front_index, ring_layout, ring_radius, spacing_deg};
pub use physics::{CarouselMode, FrameSample, RotationModel, StageTransform};
pub use spring::CriticalSpring;
pub use variation::{CardVariation, CosmicSystem, DeckLayout, ParkMiller, VisualMotif, id_seed};

/// Frame length the physics constants are expressed against (60 fps)
pub const REFERENCE_FRAME_MS: f64 = 16.66;

/// Longest frame delta the model will integrate in one step
pub const MAX_FRAME_MS: f64 = 100.0;

/// Physics parameters for the rotation model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselTuning {
    /// Idle spin, degrees per reference frame
    pub base_speed: f64,
    /// Fraction of the excess velocity kept per reference frame
    pub friction: f64,
    /// Velocity within this distance of `base_speed` snaps to it
    pub snap_epsilon: f64,
    /// Degrees of rotation per pixel dragged
    pub drag_sensitivity: f64,
    /// Pointer speed (px/s) to velocity divisor while dragging
    pub drag_velocity_divisor: f64,
    /// Pointer speed (px/s) to velocity divisor on release
    pub fling_divisor: f64,
    /// Velocity bound for drags and flings
    pub max_fling: f64,
    /// Tilt per unit of velocity (negative leans into the turn)
    pub tilt_gain: f64,
    /// Tilt bound in degrees
    pub max_tilt: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            base_speed: 0.2,
            friction: 0.97,
            snap_epsilon: 0.001,
            drag_sensitivity: 0.4,
            drag_velocity_divisor: 60.0,
            fling_divisor: 45.0,
            max_fling: 12.0,
            tilt_gain: -2.0,
            max_tilt: 15.0,
        }
    }
}

impl CarouselTuning {
    /// Clamp every parameter into a range where the model cannot diverge
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        let positive_or = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };

        let max_fling = positive_or(self.max_fling, d.max_fling);
        Self {
            base_speed: finite_or(self.base_speed, d.base_speed).clamp(-max_fling, max_fling),
            friction: finite_or(self.friction, d.friction).clamp(0.0, 0.999),
            snap_epsilon: positive_or(self.snap_epsilon, d.snap_epsilon),
            drag_sensitivity: finite_or(self.drag_sensitivity, d.drag_sensitivity),
            drag_velocity_divisor: positive_or(self.drag_velocity_divisor, d.drag_velocity_divisor),
            fling_divisor: positive_or(self.fling_divisor, d.fling_divisor),
            max_fling,
            tilt_gain: finite_or(self.tilt_gain, d.tilt_gain),
            max_tilt: positive_or(self.max_tilt, d.max_tilt),
        }
    }
}
