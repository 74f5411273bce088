use nalgebra::{UnitQuaternion, Vector3};

use crate::provider::LiveKinematics;

/// Rotational state of a body in some frame. Identity is the identity rotation
/// with zero angular rates.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationState {
    pub rotation: UnitQuaternion<f64>,
    pub angular_velocity: Vector3<f64>,
    pub angular_acceleration: Vector3<f64>,
}

impl OrientationState {
    pub fn identity() -> Self {
        OrientationState {
            rotation: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }

    pub fn new(
        rotation: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
        angular_acceleration: Vector3<f64>,
    ) -> Self {
        OrientationState {
            rotation,
            angular_velocity,
            angular_acceleration,
        }
    }

    pub fn from_live(kinematics: &LiveKinematics) -> Self {
        OrientationState {
            rotation: kinematics.rotation,
            angular_velocity: kinematics.angular_velocity,
            angular_acceleration: kinematics.angular_acceleration,
        }
    }
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::identity()
    }
}
