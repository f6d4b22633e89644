use mass_properties::MassProperties;
use nalgebra::Vector3;
use rotations::{Quaternion, RotationMatrix};
use serde::{Deserialize, Serialize};

/// Rotation context supplied fresh each tick by the transform-maintenance
/// subsystem, together with the planet rotation rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameTransforms {
    /// Inertial to body rotation.
    pub inertial_to_body: RotationMatrix,
    /// Body to inertial rotation.
    pub body_to_inertial: RotationMatrix,
    /// Earth-fixed to body rotation.
    pub ecef_to_body: RotationMatrix,
    /// Local-level to body rotation.
    pub local_to_body: RotationMatrix,
    /// Planet angular velocity, inertial frame.
    pub omega_planet: Vector3<f64>,
}

/// Read-only inputs consumed by one derivative evaluation. Owned by the
/// surrounding simulation and rebuilt every tick; this core never mutates
/// vehicle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateInputs {
    /// Total external force on the vehicle, body frame.
    pub force: Vector3<f64>,
    /// Total external moment on the vehicle, body frame.
    pub moment: Vector3<f64>,
    pub mass_properties: MassProperties,
    /// Angular velocity relative to the inertial frame, body frame.
    pub omega_inertial: Vector3<f64>,
    /// Angular velocity relative to the Earth-fixed frame, body frame.
    pub omega_ecef: Vector3<f64>,
    /// Linear velocity relative to the Earth-fixed frame, body frame.
    pub velocity_ecef: Vector3<f64>,
    /// Vehicle position, inertial frame.
    pub position_inertial: Vector3<f64>,
    /// Attitude quaternion, inertial to body.
    pub attitude_inertial: Quaternion,
    /// Precomputed oblate-planet gravity, Earth-fixed frame.
    pub oblate_gravity_ecef: Vector3<f64>,
    pub transforms: FrameTransforms,
    /// Base integration timestep (s).
    pub dt: f64,
    /// Integration-rate multiplier from the scheduler.
    pub rate: f64,
}

impl Default for StateInputs {
    fn default() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
            mass_properties: MassProperties::default(),
            omega_inertial: Vector3::zeros(),
            omega_ecef: Vector3::zeros(),
            velocity_ecef: Vector3::zeros(),
            position_inertial: Vector3::zeros(),
            attitude_inertial: Quaternion::IDENTITY,
            oblate_gravity_ecef: Vector3::zeros(),
            transforms: FrameTransforms::default(),
            dt: 0.0,
            rate: 1.0,
        }
    }
}
