pub mod quaternion;
pub mod rotation_matrix;

use nalgebra::Vector3;

pub use quaternion::{Quaternion, QuaternionErrors};
pub use rotation_matrix::RotationMatrix;

pub mod prelude {
    pub use crate::quaternion::*;
    pub use crate::rotation_matrix::*;
    pub use crate::RotationTrait;
}

/// Trait defining rotation and transformation operations.
pub trait RotationTrait {
    /// Rotates a vector by the rotation (active, "alibi").
    fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64>;

    /// Transforms a vector by the rotation (passive, "alias").
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64>;

    fn inv(&self) -> Self;

    fn identity() -> Self;
}
