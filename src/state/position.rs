use nalgebra::Vector3;

use crate::provider::{LiveKinematics, OriginOffset};

/// Translational state of a body in some frame: position and its first three
/// time derivatives. Identity is all-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub jerk: Vector3<f64>,
}

impl PositionState {
    pub fn identity() -> Self {
        PositionState {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            jerk: Vector3::zeros(),
        }
    }

    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration: Vector3<f64>,
        jerk: Vector3<f64>,
    ) -> Self {
        PositionState {
            position,
            velocity,
            acceleration,
            jerk,
        }
    }

    /// Snapshot a live body, re-anchoring position and velocity against the
    /// floating-origin offset when one is active. Acceleration and jerk are
    /// offset-free.
    pub fn from_live(kinematics: &LiveKinematics, origin: Option<&OriginOffset>) -> Self {
        let origin_position = origin.map(|o| o.position).unwrap_or_else(Vector3::zeros);
        let origin_velocity = origin.map(|o| o.velocity).unwrap_or_else(Vector3::zeros);

        PositionState {
            position: kinematics.position - origin_position,
            velocity: kinematics.velocity - origin_velocity,
            acceleration: kinematics.acceleration,
            jerk: kinematics.jerk,
        }
    }
}

impl Default for PositionState {
    fn default() -> Self {
        Self::identity()
    }
}
