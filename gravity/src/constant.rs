use nalgebra::Vector3;
use rotations::RotationTrait;
use serde::{Deserialize, Serialize};

use crate::{GravityFrames, GravityModel};

/// Standard gravity (m/s^2).
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Fixed-magnitude gravity along the local vertical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConstantGravity {
    pub magnitude: f64,
}

impl ConstantGravity {
    pub fn new(magnitude: f64) -> Self {
        Self { magnitude }
    }
}

impl Default for ConstantGravity {
    fn default() -> Self {
        Self {
            magnitude: STANDARD_GRAVITY,
        }
    }
}

impl GravityModel for ConstantGravity {
    fn body_acceleration(&self, frames: &GravityFrames) -> Vector3<f64> {
        frames
            .local_to_body
            .rotate(&Vector3::new(0.0, 0.0, self.magnitude))
    }
}
