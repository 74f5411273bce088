use nalgebra::{UnitQuaternion, Vector3};

use crate::constants::BodyId;
use crate::provider::BodyProvider;
use crate::skyframe_errors::SkyframeError;
use crate::state::movement::MovementState;
use crate::state::orientation::OrientationState;
use crate::state::position::PositionState;
use crate::state::scale::ScaleState;

/// A [`MovementState`] known to be expressed in the universal frame.
///
/// The marker is carried by composition: the wrapped movement is plain data,
/// and only this wrapper offers the rigid-body point-kinematics and the
/// forward/inverse transforms between the body's local frame and the
/// universal frame.
///
/// An `AbsoluteState` is only constructible from a live body with a currently
/// valid physical state; a missing snapshot yields
/// [`SkyframeError::Unavailable`], never a partial or zeroed state.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsoluteState {
    movement: MovementState,
}

impl AbsoluteState {
    pub fn new(movement: MovementState) -> Self {
        AbsoluteState { movement }
    }

    /// Snapshot a live body into the universal frame.
    ///
    /// Position and velocity are re-anchored against the provider's
    /// floating-origin offset when one is active.
    pub fn from_provider(
        id: &BodyId,
        provider: &impl BodyProvider,
    ) -> Result<Self, SkyframeError> {
        let kinematics = provider
            .live_kinematics(id)
            .ok_or_else(|| SkyframeError::Unavailable(id.clone()))?;
        let origin = provider.origin_offset();

        Ok(AbsoluteState::new(MovementState::new(
            Some(ScaleState::from_live(&kinematics)),
            Some(PositionState::from_live(&kinematics, origin.as_ref())),
            Some(OrientationState::from_live(&kinematics)),
        )))
    }

    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    pub fn scale(&self) -> &ScaleState {
        &self.movement.scale
    }

    pub fn lossy_scale(&self) -> Vector3<f64> {
        self.movement.lossy_scale()
    }

    pub fn position(&self) -> Vector3<f64> {
        self.movement.position()
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.movement.velocity()
    }

    pub fn acceleration(&self) -> Vector3<f64> {
        self.movement.acceleration()
    }

    pub fn jerk(&self) -> Vector3<f64> {
        self.movement.jerk()
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        self.movement.rotation()
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.movement.angular_velocity()
    }

    pub fn angular_acceleration(&self) -> Vector3<f64> {
        self.movement.angular_acceleration()
    }

    // ---------------------------------------------------------------------
    // Rigid-body point kinematics
    // ---------------------------------------------------------------------

    /// World velocity of a point rigidly attached to this body.
    pub fn point_velocity(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        self.point_tangential_velocity(world_point) + self.velocity()
    }

    /// Rotational contribution `ω × (p - x)` to a point's world velocity.
    pub fn point_tangential_velocity(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        self.angular_velocity().cross(&(world_point - self.position()))
    }

    /// World acceleration of a point rigidly attached to this body:
    /// linear + centripetal + tangential terms.
    pub fn point_acceleration(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        let arm = world_point - self.position();
        self.acceleration()
            + self.angular_velocity().cross(&self.angular_velocity().cross(&arm))
            + self.angular_acceleration().cross(&arm)
    }

    /// Tangential term `α × (p - x)` alone.
    pub fn point_tangential_acceleration(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        self.angular_acceleration().cross(&(world_point - self.position()))
    }

    /// Centripetal term `ω × (ω × (p - x))` alone.
    pub fn point_centripetal_acceleration(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        let arm = world_point - self.position();
        self.angular_velocity().cross(&self.angular_velocity().cross(&arm))
    }

    // ---------------------------------------------------------------------
    // Local ⇄ universal frame transforms
    // ---------------------------------------------------------------------

    pub fn transform_direction(&self, local_direction: Vector3<f64>) -> Vector3<f64> {
        self.rotation() * local_direction
    }

    pub fn inverse_transform_direction(&self, world_direction: Vector3<f64>) -> Vector3<f64> {
        self.rotation().inverse() * world_direction
    }

    /// Map a point from this body's scaled, rotated local frame to the world.
    pub fn transform_point(&self, local_point: Vector3<f64>) -> Vector3<f64> {
        self.position() + self.rotation() * local_point.component_mul(&self.lossy_scale())
    }

    /// Map a world point into this body's scaled, rotated local frame.
    pub fn inverse_transform_point(&self, world_point: Vector3<f64>) -> Vector3<f64> {
        (self.rotation().inverse() * (world_point - self.position()))
            .component_div(&self.lossy_scale())
    }

    pub fn transform_rotation(&self, local_rotation: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        self.rotation() * local_rotation
    }

    pub fn inverse_transform_rotation(
        &self,
        world_rotation: UnitQuaternion<f64>,
    ) -> UnitQuaternion<f64> {
        self.rotation().inverse() * world_rotation
    }
}
