use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One scalar constraint at a ground-contact point.
///
/// The jacobians map the constraint multiplier to a body-frame force and
/// moment. The bounds encode the unilateral normal-force or friction-cone
/// limit for this direction; the friction model updates them as the contact
/// state requires. `value` persists between ticks so the solver can warm
/// start from the previous solution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContactConstraint {
    pub force_jacobian: Vector3<f64>,
    pub moment_jacobian: Vector3<f64>,
    /// Current multiplier, rewritten by the resolver after every solve.
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl ContactConstraint {
    pub fn new(
        force_jacobian: Vector3<f64>,
        moment_jacobian: Vector3<f64>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            force_jacobian,
            moment_jacobian,
            value: 0.0,
            min,
            max,
        }
    }

    /// Constraint that can only push along its jacobian direction, the
    /// normal-force case.
    pub fn unilateral(force_jacobian: Vector3<f64>, moment_jacobian: Vector3<f64>) -> Self {
        Self::new(force_jacobian, moment_jacobian, 0.0, f64::INFINITY)
    }
}

/// Capability the ground-contact subsystem exposes to the derivative core.
///
/// The provider owns constraint identity and bounds; the core reads the
/// jacobians and bounds and rewrites only each multiplier value, then signals
/// `update_forces_and_moments` so the provider's force and moment outputs
/// stay consistent with the multipliers it now holds.
pub trait ConstraintProvider {
    /// Ordered set of active contact constraints.
    fn constraints(&self) -> &[ContactConstraint];

    fn constraints_mut(&mut self) -> &mut [ContactConstraint];

    /// Terrain linear velocity at the contact frame, Earth-fixed frame.
    fn terrain_velocity(&self) -> Vector3<f64>;

    /// Terrain angular velocity at the contact frame, Earth-fixed frame.
    fn terrain_angular_velocity(&self) -> Vector3<f64>;

    /// Recompute provider-side forces and moments from the updated
    /// multipliers.
    fn update_forces_and_moments(&mut self);
}

/// Minimal provider over a fixed constraint set and steady terrain. Real
/// ground-reaction subsystems implement [`ConstraintProvider`] themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticContactSet {
    pub constraints: Vec<ContactConstraint>,
    pub terrain_velocity: Vector3<f64>,
    pub terrain_angular_velocity: Vector3<f64>,
}

impl StaticContactSet {
    pub fn new(constraints: Vec<ContactConstraint>) -> Self {
        Self {
            constraints,
            terrain_velocity: Vector3::zeros(),
            terrain_angular_velocity: Vector3::zeros(),
        }
    }
}

impl ConstraintProvider for StaticContactSet {
    fn constraints(&self) -> &[ContactConstraint] {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut [ContactConstraint] {
        &mut self.constraints
    }

    fn terrain_velocity(&self) -> Vector3<f64> {
        self.terrain_velocity
    }

    fn terrain_angular_velocity(&self) -> Vector3<f64> {
        self.terrain_angular_velocity
    }

    fn update_forces_and_moments(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unilateral_bounds() {
        let c = ContactConstraint::unilateral(Vector3::new(0.0, 0.0, -1.0), Vector3::zeros());

        assert_eq!(c.min, 0.0);
        assert_eq!(c.max, f64::INFINITY);
        assert_eq!(c.value, 0.0);
    }

    #[test]
    fn test_static_set_round_trip() {
        let mut set = StaticContactSet::new(vec![ContactConstraint::new(
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.5, 0.0, 0.0),
            -10.0,
            10.0,
        )]);

        set.constraints_mut()[0].value = 3.5;
        assert_eq!(set.constraints()[0].value, 3.5);
        assert_eq!(set.terrain_velocity(), Vector3::zeros());
    }
}
