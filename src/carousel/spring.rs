// src/carousel/spring.rs
// Critically damped spring, integrated in closed form

use serde::{Deserialize, Serialize};

/// Spring with damping `2 * sqrt(stiffness * mass)`.
///
/// Stepped with the exact solution of the damped oscillator, so any
/// frame length is stable and the value never overshoots its target
/// when starting from rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalSpring {
    pub value: f64,
    pub velocity: f64,
    omega: f64,
}

impl CriticalSpring {
    pub fn new(stiffness: f64, mass: f64) -> Self {
        let omega = if stiffness > 0.0 && mass > 0.0 {
            (stiffness / mass).sqrt()
        } else {
            1.0
        };
        Self { value: 0.0, velocity: 0.0, omega }
    }

    /// Natural frequency in rad/s
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Damping coefficient that makes a spring of this stiffness critical
    pub fn critical_damping(stiffness: f64, mass: f64) -> f64 {
        2.0 * (stiffness * mass).sqrt()
    }

    /// Advance `dt` seconds toward `target`
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let w = self.omega;
        let offset = self.value - target;
        let carry = self.velocity + w * offset;
        let decay = (-w * dt).exp();

        self.value = target + (offset + carry * dt) * decay;
        self.velocity = (self.velocity - w * carry * dt) * decay;
        self.value
    }

    pub fn is_settled(&self, target: f64, tolerance: f64) -> bool {
        (self.value - target).abs() <= tolerance && self.velocity.abs() <= tolerance
    }
}
