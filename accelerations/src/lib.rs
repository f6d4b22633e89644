//! Per-tick derivatives of the rotational and translational rate states and
//! of the attitude quaternion, for a rigid vehicle over a rotating oblate
//! planet. The outer integrator advances the simulation with exactly the
//! derivatives computed here; ground contact is folded in by the friction
//! resolver before the step is handed back.

pub mod derivatives;
pub mod friction;
pub mod hooks;
pub mod inputs;

use contact::ConstraintProvider;
use gravity::{Gravity, GravityFrames, GravityModel};
use rotations::RotationTrait;
use serde::{Deserialize, Serialize};

pub use derivatives::RateDerivatives;
pub use hooks::{NoHooks, StepHooks};
pub use inputs::{FrameTransforms, StateInputs};

/// Derivative evaluation core. Owns the derivative state and the persistent
/// gravity-model selection; reads everything else fresh each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Accelerations {
    gravity: Gravity,
    derivatives: RateDerivatives,
}

impl Accelerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(gravity: Gravity) -> Self {
        Self {
            gravity,
            derivatives: RateDerivatives::default(),
        }
    }

    /// Currently selected gravity model.
    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    /// Selects a gravity model. Takes effect on the next evaluation.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    /// The most recently completed derivative evaluation.
    pub fn derivatives(&self) -> &RateDerivatives {
        &self.derivatives
    }

    /// Zeroes the derivative state.
    pub fn reset(&mut self) {
        self.derivatives = RateDerivatives::default();
    }

    /// Runs one scheduled derivative evaluation.
    ///
    /// Returns `false` without touching any state when `holding` is set, so
    /// a paused simulation or a trim routine can hold the previous
    /// derivatives. The contact resolve runs at the effective timestep
    /// `dt * rate`.
    pub fn run<P, H>(
        &mut self,
        inputs: &StateInputs,
        contacts: &mut P,
        hooks: &mut H,
        holding: bool,
    ) -> bool
    where
        P: ConstraintProvider + ?Sized,
        H: StepHooks + ?Sized,
    {
        if holding {
            return false;
        }

        hooks.pre_step();

        self.calculate_omega_dot(inputs);
        self.calculate_velocity_dot(inputs);
        self.calculate_attitude_dot(inputs);
        let _ = friction::resolve(
            &mut self.derivatives,
            inputs,
            contacts,
            inputs.dt * inputs.rate,
        );

        hooks.post_step();
        true
    }

    /// Seeds consistent starting derivatives before the first integration
    /// step: a full evaluation plus a zero-`dt` contact resolve.
    pub fn initialize<P>(&mut self, inputs: &StateInputs, contacts: &mut P)
    where
        P: ConstraintProvider + ?Sized,
    {
        self.calculate_omega_dot(inputs);
        self.calculate_velocity_dot(inputs);
        self.calculate_attitude_dot(inputs);
        let _ = friction::resolve(&mut self.derivatives, inputs, contacts, 0.0);
    }

    // Rigid-body Euler equation in the rotating body frame,
    // Jinv*(M - w x (J*w)), for the derivative of the inertial-referenced
    // angular velocity. The Earth-fixed variant subtracts the planet-rate
    // coupling w x (Ti2b*omega_planet).
    fn calculate_omega_dot(&mut self, inputs: &StateInputs) {
        let j = inputs.mass_properties.inertia();
        let jinv = inputs.mass_properties.inertia_inverse();
        let omega = &inputs.omega_inertial;

        self.derivatives.omega_dot_inertial = jinv * (inputs.moment - omega.cross(&(j * omega)));
        self.derivatives.omega_dot_ecef = self.derivatives.omega_dot_inertial
            - omega.cross(
                &inputs
                    .transforms
                    .inertial_to_body
                    .rotate(&inputs.transforms.omega_planet),
            );
    }

    // Translational rate derivatives. The Earth-fixed variant carries the
    // Coriolis and centripetal terms of the rotating frame plus gravity; the
    // inertial variant is the body acceleration plus gravity rotated out to
    // the inertial frame.
    fn calculate_velocity_dot(&mut self, inputs: &StateInputs) {
        let t = &inputs.transforms;
        let omega_planet_body = t.inertial_to_body.rotate(&t.omega_planet);

        self.derivatives.body_acceleration = inputs.force / inputs.mass_properties.mass();

        let coriolis = (inputs.omega_ecef + 2.0 * omega_planet_body).cross(&inputs.velocity_ecef);
        let centripetal = t.inertial_to_body.rotate(
            &t.omega_planet
                .cross(&t.omega_planet.cross(&inputs.position_inertial)),
        );

        self.derivatives.gravity_body = self.gravity.body_acceleration(&GravityFrames {
            local_to_body: &t.local_to_body,
            ecef_to_body: &t.ecef_to_body,
            oblate_gravity_ecef: inputs.oblate_gravity_ecef,
        });

        self.derivatives.velocity_dot_ecef = self.derivatives.body_acceleration - coriolis
            - centripetal
            + self.derivatives.gravity_body;
        self.derivatives.velocity_dot_inertial = t
            .body_to_inertial
            .rotate(&(self.derivatives.body_acceleration + self.derivatives.gravity_body));
    }

    fn calculate_attitude_dot(&mut self, inputs: &StateInputs) {
        self.derivatives.attitude_dot = inputs
            .attitude_inertial
            .derivative(&inputs.omega_inertial);
    }

    /// Telemetry names for the per-axis derivative values, paired with
    /// [`Accelerations::state_values`].
    pub fn state_names() -> [&'static str; 6] {
        [
            "pdot_rad_sec2",
            "qdot_rad_sec2",
            "rdot_rad_sec2",
            "udot_mps2",
            "vdot_mps2",
            "wdot_mps2",
        ]
    }

    /// Per-axis rotational and translational derivative values, Earth-fixed
    /// referenced, body frame.
    pub fn state_values(&self) -> [f64; 6] {
        let w = &self.derivatives.omega_dot_ecef;
        let v = &self.derivatives.velocity_dot_ecef;
        [w[0], w[1], w[2], v[0], v[1], v[2]]
    }
}
