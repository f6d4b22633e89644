use nalgebra::Vector3;
use rotations::RotationTrait;
use serde::{Deserialize, Serialize};

use crate::{GravityFrames, GravityModel};

/// Oblate-planet gravity. The acceleration vector, including the oblateness
/// correction, is computed upstream in the Earth-fixed frame; this model
/// carries it into the body frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OblateGravity;

impl GravityModel for OblateGravity {
    fn body_acceleration(&self, frames: &GravityFrames) -> Vector3<f64> {
        frames.ecef_to_body.rotate(&frames.oblate_gravity_ecef)
    }
}
