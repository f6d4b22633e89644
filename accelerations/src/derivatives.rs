use nalgebra::Vector3;
use rotations::Quaternion;
use serde::{Deserialize, Serialize};

/// The most recently completed derivative evaluation.
///
/// Invariant: never partially updated. A run either rewrites every field or
/// leaves all of them alone, so consumers never observe a torn state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateDerivatives {
    /// Rotational rate derivative relative to the Earth-fixed frame, body
    /// frame.
    pub omega_dot_ecef: Vector3<f64>,
    /// Rotational rate derivative relative to the inertial frame, body frame.
    pub omega_dot_inertial: Vector3<f64>,
    /// Translational rate derivative relative to the Earth-fixed frame, body
    /// frame.
    pub velocity_dot_ecef: Vector3<f64>,
    /// Translational rate derivative relative to the inertial frame, inertial
    /// frame.
    pub velocity_dot_inertial: Vector3<f64>,
    /// Gravitational acceleration, body frame.
    pub gravity_body: Vector3<f64>,
    /// Net non-gravitational acceleration, body frame.
    pub body_acceleration: Vector3<f64>,
    /// Attitude quaternion derivative.
    pub attitude_dot: Quaternion,
}

impl Default for RateDerivatives {
    fn default() -> Self {
        Self {
            omega_dot_ecef: Vector3::zeros(),
            omega_dot_inertial: Vector3::zeros(),
            velocity_dot_ecef: Vector3::zeros(),
            velocity_dot_inertial: Vector3::zeros(),
            gravity_body: Vector3::zeros(),
            body_acceleration: Vector3::zeros(),
            attitude_dot: Quaternion::ZERO,
        }
    }
}
