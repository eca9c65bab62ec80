// src/carousel/physics.rs
// Idle-spin / drag rotation model with banking tilt

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::spring::CriticalSpring;
use super::{CarouselTuning, MAX_FRAME_MS, REFERENCE_FRAME_MS};

/// Tilt spring stiffness; damping is the matching critical value (20)
pub const TILT_STIFFNESS: f64 = 100.0;
pub const TILT_MASS: f64 = 1.0;

/// Fixed stage pitch, degrees
pub const STAGE_PITCH_DEG: f64 = 10.0;

/// Fixed stage depth offset, px
pub const STAGE_DEPTH: f64 = -50.0;

/// Which branch of the frame update runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselMode {
    /// Spinning on its own, relaxing toward base speed
    IdleSpin,
    /// Pointer is down; angle follows the pointer directly
    Dragging,
}

impl Default for CarouselMode {
    fn default() -> Self {
        Self::IdleSpin
    }
}

/// Stage transform for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTransform {
    pub rotate_y: f64,
    pub rotate_x: f64,
    pub rotate_z: f64,
    pub z: f64,
}

impl StageTransform {
    pub fn css(&self) -> String {
        format!(
            "translateZ({:.0}px) rotateY({:.2}deg) rotateX({:.0}deg) rotateZ({:.2}deg)",
            self.z, self.rotate_y, self.rotate_x, self.rotate_z
        )
    }
}

/// What a frame produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub mode: CarouselMode,
    pub velocity: f64,
    pub tilt_target: f64,
    pub stage: StageTransform,
}

/// Rotation state of the carousel stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationModel {
    tuning: CarouselTuning,
    mode: CarouselMode,
    /// Accumulated angle in [0, 360)
    rotation: f64,
    /// Degrees per reference frame
    velocity: f64,
    tilt: CriticalSpring,
}

impl Default for RotationModel {
    fn default() -> Self {
        Self::new(CarouselTuning::default())
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

impl RotationModel {
    pub fn new(tuning: CarouselTuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            velocity: tuning.base_speed,
            tuning,
            mode: CarouselMode::IdleSpin,
            rotation: 0.0,
            tilt: CriticalSpring::new(TILT_STIFFNESS, TILT_MASS),
        }
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == CarouselMode::Dragging
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn tilt(&self) -> f64 {
        self.tilt.value
    }

    fn clamp_velocity(&self, v: f64) -> f64 {
        finite_or_zero(v).clamp(-self.tuning.max_fling, self.tuning.max_fling)
    }

    fn advance(&mut self, degrees: f64) {
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
    }

    /// Banking target: clamped linear function of velocity
    pub fn tilt_target(&self) -> f64 {
        let max = self.tuning.max_tilt;
        (self.velocity * self.tuning.tilt_gain).clamp(-max, max)
    }

    /// Run one frame of `delta_ms` milliseconds
    pub fn frame(&mut self, delta_ms: f64) -> FrameSample {
        let delta_ms = finite_or_zero(delta_ms).clamp(0.0, MAX_FRAME_MS);
        let time_factor = delta_ms / REFERENCE_FRAME_MS;

        if self.mode == CarouselMode::IdleSpin {
            let base = self.tuning.base_speed;
            if (self.velocity - base).abs() > self.tuning.snap_epsilon {
                // Per-frame friction scaled to the actual frame length
                let keep = self.tuning.friction.powf(time_factor);
                self.velocity = self.velocity * keep + base * (1.0 - keep);
            } else {
                self.velocity = base;
            }
            self.advance(self.velocity * time_factor);
        }

        let tilt_target = self.tilt_target();
        self.tilt.step(tilt_target, delta_ms / 1000.0);

        trace!(
            "[CAROUSEL] frame dt={:.2}ms v={:.3} rot={:.2} tilt={:.2}",
            delta_ms, self.velocity, self.rotation, self.tilt.value
        );

        FrameSample {
            mode: self.mode,
            velocity: self.velocity,
            tilt_target,
            stage: self.stage(),
        }
    }

    /// Pointer down: stop the spin and hand the angle to the pointer
    pub fn begin_drag(&mut self) {
        debug!("[CAROUSEL] drag start at {:.2}deg", self.rotation);
        self.mode = CarouselMode::Dragging;
        self.velocity = 0.0;
    }

    /// Pointer moved by `delta_x` px at `pointer_speed` px/s
    pub fn drag_move(&mut self, delta_x: f64, pointer_speed: f64) {
        if self.mode != CarouselMode::Dragging {
            self.begin_drag();
        }
        self.advance(finite_or_zero(delta_x) * self.tuning.drag_sensitivity);
        self.velocity =
            self.clamp_velocity(finite_or_zero(pointer_speed) / self.tuning.drag_velocity_divisor);
    }

    /// Pointer up: fling with the release speed, then decay back to idle
    pub fn release(&mut self, release_speed: f64) {
        let fling = self.clamp_velocity(finite_or_zero(release_speed) / self.tuning.fling_divisor);
        debug!("[CAROUSEL] fling {:.3}deg/frame from release speed {:.1}px/s", fling, release_speed);
        self.mode = CarouselMode::IdleSpin;
        self.velocity = fling;
    }

    pub fn stage(&self) -> StageTransform {
        StageTransform {
            rotate_y: self.rotation,
            rotate_x: STAGE_PITCH_DEG,
            rotate_z: self.tilt.value,
            z: STAGE_DEPTH,
        }
    }
}
