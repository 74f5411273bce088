use nalgebra::Vector3;

use crate::provider::LiveKinematics;

/// Effective and declared scale of a body.
///
/// `lossy_scale` is the world scale after parent scaling has been applied;
/// `local_scale` is the body's own declared scale. Identity is (1,1,1) for both.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    pub lossy_scale: Vector3<f64>,
    pub local_scale: Vector3<f64>,
}

impl ScaleState {
    pub fn identity() -> Self {
        ScaleState {
            lossy_scale: Vector3::new(1.0, 1.0, 1.0),
            local_scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn new(lossy_scale: Vector3<f64>, local_scale: Vector3<f64>) -> Self {
        ScaleState {
            lossy_scale,
            local_scale,
        }
    }

    pub fn from_live(kinematics: &LiveKinematics) -> Self {
        ScaleState {
            lossy_scale: kinematics.lossy_scale,
            local_scale: kinematics.local_scale,
        }
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod scale_test {
    use super::*;

    #[test]
    fn test_identity() {
        let identity = ScaleState::identity();
        assert_eq!(identity.lossy_scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(identity.local_scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(identity, ScaleState::default());
    }
}
