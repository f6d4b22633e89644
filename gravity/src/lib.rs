use constant::ConstantGravity;
use nalgebra::Vector3;
use oblate::OblateGravity;
use rotations::RotationMatrix;
use serde::{Deserialize, Serialize};

pub mod constant;
pub mod oblate;

/// Per-tick frame context for evaluating gravity in the body frame.
///
/// The oblate vector arrives precomputed in the Earth-fixed frame; this crate
/// only rotates it.
#[derive(Debug, Clone, Copy)]
pub struct GravityFrames<'a> {
    /// Local-level to body rotation.
    pub local_to_body: &'a RotationMatrix,
    /// Earth-fixed to body rotation.
    pub ecef_to_body: &'a RotationMatrix,
    /// Gravitational acceleration of the oblate planet model, Earth-fixed
    /// frame.
    pub oblate_gravity_ecef: Vector3<f64>,
}

/// Persistent gravity model selection, settable externally and read every
/// tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Gravity {
    Constant(ConstantGravity),
    Oblate(OblateGravity),
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity::Oblate(OblateGravity)
    }
}

impl GravityModel for Gravity {
    fn body_acceleration(&self, frames: &GravityFrames) -> Vector3<f64> {
        match self {
            Gravity::Constant(g) => g.body_acceleration(frames),
            Gravity::Oblate(g) => g.body_acceleration(frames),
        }
    }
}

pub trait GravityModel {
    // returns gravitational acceleration expressed in the body frame
    fn body_acceleration(&self, frames: &GravityFrames) -> Vector3<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::STANDARD_GRAVITY;
    use approx::assert_abs_diff_eq;
    use rotations::RotationTrait;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-12;

    fn frames<'a>(
        local_to_body: &'a RotationMatrix,
        ecef_to_body: &'a RotationMatrix,
        oblate_gravity_ecef: Vector3<f64>,
    ) -> GravityFrames<'a> {
        GravityFrames {
            local_to_body,
            ecef_to_body,
            oblate_gravity_ecef,
        }
    }

    #[test]
    fn test_constant_points_down_local_vertical() {
        let identity = RotationMatrix::identity();
        let gravity = Gravity::Constant(ConstantGravity::default());
        let g = gravity.body_acceleration(&frames(&identity, &identity, Vector3::zeros()));

        assert_abs_diff_eq!(g[0], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(g[2], STANDARD_GRAVITY, epsilon = TOL);
    }

    #[test]
    fn test_constant_follows_local_to_body_rotation() {
        // body pitched 90 degrees: local-vertical gravity lands on the body x axis
        let local_to_body = RotationMatrix::about_y(FRAC_PI_2);
        let identity = RotationMatrix::identity();
        let gravity = Gravity::Constant(ConstantGravity::new(5.0));
        let g = gravity.body_acceleration(&frames(&local_to_body, &identity, Vector3::zeros()));

        assert_abs_diff_eq!(g[0], 5.0, epsilon = TOL);
        assert_abs_diff_eq!(g[2], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_oblate_rotates_precomputed_vector() {
        let identity = RotationMatrix::identity();
        let ecef_to_body = RotationMatrix::about_z(FRAC_PI_2);
        let g_ecef = Vector3::new(0.1, 0.0, 9.78);
        let gravity = Gravity::Oblate(OblateGravity);
        let g = gravity.body_acceleration(&frames(&identity, &ecef_to_body, g_ecef));
        let expected = ecef_to_body.rotate(&g_ecef);

        assert_abs_diff_eq!(g[0], expected[0], epsilon = TOL);
        assert_abs_diff_eq!(g[1], expected[1], epsilon = TOL);
        assert_abs_diff_eq!(g[2], expected[2], epsilon = TOL);
    }

    #[test]
    fn test_oblate_ignores_local_to_body() {
        let local_to_body = RotationMatrix::about_x(1.2);
        let identity = RotationMatrix::identity();
        let g_ecef = Vector3::new(0.0, 0.0, 9.81);
        let gravity = Gravity::default();
        let g = gravity.body_acceleration(&frames(&local_to_body, &identity, g_ecef));

        assert_abs_diff_eq!(g[2], 9.81, epsilon = TOL);
    }
}
