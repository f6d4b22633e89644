//! Resolves the contact constraint forces just before the equations of
//! motion are integrated, using Lagrange multipliers and the projected
//! Gauss-Seidel method.
//!
//! The vehicle is a single rigid body with possibly several points of
//! contact against the ground, so the effective-mass matrix J·M⁻¹·Jᵀ is
//! dense and is assembled in full. Contact forces are resolved in the body
//! frame.

use contact::{ConstraintProvider, ContactConstraint};
use nalgebra::Vector3;
use rotations::RotationTrait;

use crate::derivatives::RateDerivatives;
use crate::inputs::StateInputs;

/// Sweep cap for the projected Gauss-Seidel iteration.
pub const MAX_SWEEPS: usize = 50;

/// Early-exit threshold on the sum of absolute multiplier changes across one
/// sweep.
pub const TOLERANCE: f64 = 1e-5;

/// Convergence record of one resolve.
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    /// Sweeps actually run.
    pub sweeps: usize,
    /// Sum of absolute multiplier changes after each sweep.
    pub sweep_changes: Vec<f64>,
}

impl SolveStats {
    /// Whether the last sweep met the tolerance. Cap exhaustion without
    /// meeting it is best effort, not an error.
    pub fn converged(&self) -> bool {
        self.sweep_changes.last().is_some_and(|&c| c < TOLERANCE)
    }
}

/// Resolves the contact constraint forces and folds them into the rate
/// derivatives.
///
/// With no active constraints the derivatives are left untouched and `None`
/// is returned. When `dt > 0` the targets include a velocity-correction term
/// that drives the residual sliding between vehicle and ground to zero over
/// one step; `dt == 0` balances current accelerations only, which seeds the
/// one-shot initialization pass.
///
/// Converged multipliers are written back into each constraint so the next
/// solve warm starts, and the provider is signalled to recompute its force
/// and moment outputs.
pub fn resolve<P>(
    derivatives: &mut RateDerivatives,
    inputs: &StateInputs,
    provider: &mut P,
    dt: f64,
) -> Option<SolveStats>
where
    P: ConstraintProvider + ?Sized,
{
    let terrain_velocity = provider.terrain_velocity();
    let terrain_angular_velocity = provider.terrain_angular_velocity();

    let constraints = provider.constraints();
    let n = constraints.len();
    if n == 0 {
        return None;
    }

    let inv_mass = inputs.mass_properties.inverse_mass();
    let jinv = *inputs.mass_properties.inertia_inverse();
    let mut lambda: Vec<f64> = constraints.iter().map(|c| c.value).collect();

    // Effective-mass matrix J*M^-1*J^T, row major. Symmetric, so only the
    // upper triangle is computed and the lower is mirrored.
    let mut a = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..i {
            a[i * n + j] = a[j * n + i];
        }
        for j in i..n {
            a[i * n + j] = constraints[i]
                .force_jacobian
                .dot(&(inv_mass * constraints[j].force_jacobian))
                + constraints[i]
                    .moment_jacobian
                    .dot(&(jinv * constraints[j].moment_jacobian));
        }
    }

    // Rates the contact forces have to cancel.
    let tec2b = &inputs.transforms.ecef_to_body;
    let mut vdot = derivatives.velocity_dot_ecef;
    let mut wdot = derivatives.omega_dot_ecef;
    if dt > 0.0 {
        // Zeroes out the relative movement between vehicle and ground.
        vdot += (inputs.velocity_ecef - tec2b.rotate(&terrain_velocity)) / dt;
        wdot += (inputs.omega_ecef - tec2b.rotate(&terrain_angular_velocity)) / dt;
    }

    // Right hand side, with every row of `a` and `rhs` scaled by the
    // diagonal so the Gauss-Seidel update needs no division.
    let mut rhs = vec![0.0; n];
    for i in 0..n {
        let d = 1.0 / a[i * n + i];

        rhs[i] = -(constraints[i].force_jacobian.dot(&vdot)
            + constraints[i].moment_jacobian.dot(&wdot))
            * d;
        for j in 0..n {
            a[i * n + j] *= d;
        }
    }

    let stats = projected_gauss_seidel(&a, &rhs, &mut lambda, constraints);

    // Total contact force and moment.
    let mut fc = Vector3::zeros();
    let mut mc = Vector3::zeros();
    for (i, constraint) in constraints.iter().enumerate() {
        fc += lambda[i] * constraint.force_jacobian;
        mc += lambda[i] * constraint.moment_jacobian;
    }

    let accel = inv_mass * fc;
    let omega_dot = jinv * mc;

    derivatives.velocity_dot_ecef += accel;
    derivatives.velocity_dot_inertial += inputs.transforms.body_to_inertial.rotate(&accel);
    derivatives.omega_dot_ecef += omega_dot;
    derivatives.omega_dot_inertial += omega_dot;

    // Write the multipliers back so the next solve warm starts from them.
    for (constraint, value) in provider.constraints_mut().iter_mut().zip(&lambda) {
        constraint.value = *value;
    }
    provider.update_forces_and_moments();

    Some(stats)
}

// In-place sweep: each multiplier update sees the values every other
// multiplier currently holds, then clamps to its bounds. Bound transitions
// between sticking, sliding and separating resolve implicitly across sweeps;
// rows are never removed from the system.
fn projected_gauss_seidel(
    a: &[f64],
    rhs: &[f64],
    lambda: &mut [f64],
    constraints: &[ContactConstraint],
) -> SolveStats {
    let n = rhs.len();
    let mut stats = SolveStats::default();

    for _ in 0..MAX_SWEEPS {
        let mut change = 0.0;

        for i in 0..n {
            let lambda0 = lambda[i];
            let mut dlambda = rhs[i];

            for j in 0..n {
                dlambda -= a[i * n + j] * lambda[j];
            }

            lambda[i] = (lambda0 + dlambda).clamp(constraints[i].min, constraints[i].max);
            change += (lambda[i] - lambda0).abs();
        }

        stats.sweeps += 1;
        stats.sweep_changes.push(change);

        if change < TOLERANCE {
            break;
        }
    }

    stats
}
