use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::Mul;
use thiserror::Error;

/// A quaternion representing the attitude of a body frame relative to a
/// reference frame, stored scalar-last.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Errors that can occur when creating a `Quaternion`.
#[derive(Debug, Clone, Copy, Error)]
pub enum QuaternionErrors {
    #[error("got zero magnitude quaternion")]
    ZeroMagnitude,
}

impl Quaternion {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// The zero quaternion. Not a rotation; the rest state for a quaternion
    /// rate.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn mag(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(&self) -> Result<Self, QuaternionErrors> {
        let mag = self.mag();
        if mag < f64::EPSILON {
            return Err(QuaternionErrors::ZeroMagnitude);
        }
        Ok(Quaternion::new(
            self.x / mag,
            self.y / mag,
            self.z / mag,
            self.w / mag,
        ))
    }

    /// Time derivative of a reference-to-body attitude quaternion for body
    /// rates `omega`, q̇ = ½ q ⊗ (0, ω).
    ///
    /// # Arguments
    ///
    /// * `omega` - Angular velocity of the body relative to the reference
    ///   frame, expressed in the body frame.
    ///
    /// # Returns
    ///
    /// The quaternion rate. Not normalized, since a derivative is not a
    /// rotation.
    pub fn derivative(&self, omega: &Vector3<f64>) -> Quaternion {
        let (p, q, r) = (omega[0], omega[1], omega[2]);
        Quaternion::new(
            0.5 * (self.w * p - self.z * q + self.y * r),
            0.5 * (self.z * p + self.w * q - self.x * r),
            0.5 * (-self.y * p + self.x * q + self.w * r),
            -0.5 * (self.x * p + self.y * q + self.z * r),
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize().unwrap();
        assert_abs_diff_eq!(q.mag(), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(q.x, 1.0 / 30.0_f64.sqrt(), epsilon = TOL);
    }

    #[test]
    fn test_normalize_zero_magnitude() {
        assert!(Quaternion::ZERO.normalize().is_err());
    }

    #[test]
    fn test_derivative_identity_attitude() {
        let q = Quaternion::IDENTITY;
        let qdot = q.derivative(&Vector3::new(0.2, 0.0, 0.0));

        assert_abs_diff_eq!(qdot.x, 0.1, epsilon = TOL);
        assert_abs_diff_eq!(qdot.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(qdot.z, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(qdot.w, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_derivative_orthogonal_to_attitude() {
        // d/dt (q.q) = 2 q.qdot = 0 for a unit attitude quaternion
        let q = Quaternion::new(0.3, -0.4, 0.1, 0.8).normalize().unwrap();
        let qdot = q.derivative(&Vector3::new(0.05, -0.02, 0.4));

        assert_abs_diff_eq!(q.dot(&qdot), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_derivative_zero_rates() {
        let q = Quaternion::new(0.3, -0.4, 0.1, 0.8).normalize().unwrap();
        let qdot = q.derivative(&Vector3::zeros());

        assert_abs_diff_eq!(qdot.mag(), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_scalar_scaling() {
        let qdot = Quaternion::IDENTITY.derivative(&Vector3::new(0.2, 0.0, 0.0)) * 2.0;

        assert_abs_diff_eq!(qdot.x, 0.2, epsilon = TOL);
        assert_abs_diff_eq!(qdot.w, 0.0, epsilon = TOL);
    }
}
