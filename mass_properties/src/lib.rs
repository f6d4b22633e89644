use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MassPropertiesErrors {
    #[error("Ixx cant be less than or equal to zero")]
    IxxLessThanOrEqualToZero,
    #[error("Iyy cant be less than or equal to zero")]
    IyyLessThanOrEqualToZero,
    #[error("Izz cant be less than or equal to zero")]
    IzzLessThanOrEqualToZero,
    #[error("inertia tensor is not invertible")]
    InertiaNotInvertible,
    #[error("mass cannot be less than or equal to zero")]
    MassLessThanOrEqualToZero,
}

/// Mass and inertia of a rigid body, with the inertia inverse precomputed at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassProperties {
    mass: f64,
    inertia: Matrix3<f64>,
    inertia_inverse: Matrix3<f64>,
}

impl MassProperties {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Result<Self, MassPropertiesErrors> {
        if mass <= f64::EPSILON {
            return Err(MassPropertiesErrors::MassLessThanOrEqualToZero);
        }
        if inertia[(0, 0)] <= f64::EPSILON {
            return Err(MassPropertiesErrors::IxxLessThanOrEqualToZero);
        }
        if inertia[(1, 1)] <= f64::EPSILON {
            return Err(MassPropertiesErrors::IyyLessThanOrEqualToZero);
        }
        if inertia[(2, 2)] <= f64::EPSILON {
            return Err(MassPropertiesErrors::IzzLessThanOrEqualToZero);
        }
        let inertia_inverse = inertia
            .try_inverse()
            .ok_or(MassPropertiesErrors::InertiaNotInvertible)?;
        Ok(Self {
            mass,
            inertia,
            inertia_inverse,
        })
    }

    /// Builds from a diagonal inertia tensor, the common case for a vehicle
    /// whose body axes are principal axes.
    pub fn from_diagonal(
        mass: f64,
        ixx: f64,
        iyy: f64,
        izz: f64,
    ) -> Result<Self, MassPropertiesErrors> {
        Self::new(mass, Matrix3::from_diagonal(&nalgebra::Vector3::new(ixx, iyy, izz)))
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    pub fn inertia(&self) -> &Matrix3<f64> {
        &self.inertia
    }

    pub fn inertia_inverse(&self) -> &Matrix3<f64> {
        &self.inertia_inverse
    }
}

impl Default for MassProperties {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: Matrix3::identity(),
            inertia_inverse: Matrix3::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rejects_nonpositive_mass() {
        assert!(MassProperties::new(0.0, Matrix3::identity()).is_err());
        assert!(MassProperties::new(-2.0, Matrix3::identity()).is_err());
    }

    #[test]
    fn test_rejects_nonpositive_diagonal() {
        assert!(MassProperties::from_diagonal(1.0, 0.0, 1.0, 1.0).is_err());
        assert!(MassProperties::from_diagonal(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(MassProperties::from_diagonal(1.0, 1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_inverse_is_precomputed() {
        let mp = MassProperties::from_diagonal(10.0, 2.0, 4.0, 8.0).unwrap();
        let product = mp.inertia() * mp.inertia_inverse();

        assert_abs_diff_eq!(product, Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(mp.inverse_mass(), 0.1, epsilon = 1e-12);
    }
}
