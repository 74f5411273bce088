use nalgebra::{UnitQuaternion, Vector3};

use crate::kepler_coordinates::KeplerCoordinates;
use crate::state::orientation::OrientationState;
use crate::state::position::PositionState;
use crate::state::scale::ScaleState;

/// A complete kinematic snapshot — scale, translation and rotation — in *some*
/// frame. Which frame is not part of the type; see
/// [`AbsoluteState`](crate::state::AbsoluteState) for the universal-frame marker.
///
/// Constructors accept `Option` sub-states: absent always means identity,
/// never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub scale: ScaleState,
    pub coordinates: PositionState,
    pub orientation: OrientationState,
}

impl MovementState {
    pub fn identity() -> Self {
        MovementState {
            scale: ScaleState::identity(),
            coordinates: PositionState::identity(),
            orientation: OrientationState::identity(),
        }
    }

    pub fn new(
        scale: Option<ScaleState>,
        coordinates: Option<PositionState>,
        orientation: Option<OrientationState>,
    ) -> Self {
        MovementState {
            scale: scale.unwrap_or_default(),
            coordinates: coordinates.unwrap_or_default(),
            orientation: orientation.unwrap_or_default(),
        }
    }

    pub fn lossy_scale(&self) -> Vector3<f64> {
        self.scale.lossy_scale
    }

    pub fn local_scale(&self) -> Vector3<f64> {
        self.scale.local_scale
    }

    pub fn position(&self) -> Vector3<f64> {
        self.coordinates.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.coordinates.velocity
    }

    pub fn acceleration(&self) -> Vector3<f64> {
        self.coordinates.acceleration
    }

    pub fn jerk(&self) -> Vector3<f64> {
        self.coordinates.jerk
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        self.orientation.rotation
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.orientation.angular_velocity
    }

    pub fn angular_acceleration(&self) -> Vector3<f64> {
        self.orientation.angular_acceleration
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::identity()
    }
}

/// A kinematic snapshot whose translation is carried as Keplerian orbital
/// elements instead of Cartesian coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerState {
    pub scale: ScaleState,
    pub coordinates: KeplerCoordinates,
    pub orientation: OrientationState,
}

impl KeplerState {
    pub fn new(
        scale: Option<ScaleState>,
        coordinates: KeplerCoordinates,
        orientation: Option<OrientationState>,
    ) -> Self {
        KeplerState {
            scale: scale.unwrap_or_default(),
            coordinates,
            orientation: orientation.unwrap_or_default(),
        }
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        self.orientation.rotation
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.orientation.angular_velocity
    }

    pub fn angular_acceleration(&self) -> Vector3<f64> {
        self.orientation.angular_acceleration
    }
}

#[cfg(test)]
mod movement_test {
    use super::*;

    #[test]
    fn test_absent_substates_collapse_to_identity() {
        let movement = MovementState::new(None, None, None);
        assert_eq!(movement, MovementState::identity());
        assert_eq!(movement.position(), Vector3::zeros());
        assert_eq!(movement.rotation(), UnitQuaternion::identity());
        assert_eq!(movement.lossy_scale(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_kepler_state_defaults() {
        let coordinates = KeplerCoordinates::from_true_anomaly(0.1, 50.0, 0.0, 0.0, 0.0, 0.0);
        let state = KeplerState::new(None, coordinates, None);
        assert_eq!(state.scale, ScaleState::identity());
        assert_eq!(state.orientation, OrientationState::identity());
        assert_eq!(state.coordinates, coordinates);
    }
}
