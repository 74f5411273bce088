//! # Host write-back adapter
//!
//! State computation is pure; pushing a computed [`AbsoluteState`] onto a live
//! host body is a separate step. [`FrameUpdate`] is the complete record the
//! orchestrating loop hands to the host: world position/velocity re-offset to
//! the host's floating origin, rotation and angular velocity, and — for bodies
//! in a suspended physics mode — the cached relative-motion hint against a
//! designated parent.

use nalgebra::{UnitQuaternion, Vector3};

use crate::constants::BodyId;
use crate::provider::OriginOffset;
use crate::state::absolute::AbsoluteState;

/// Cached relative-motion hint for a body whose physics is suspended.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspendedHint {
    pub parent: BodyId,
    /// Velocity relative to the parent, expressed in the parent's local axes.
    pub relative_velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
}

/// Everything the host needs to push one computed state onto a live body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub angular_velocity: Vector3<f64>,
    pub suspended: Option<SuspendedHint>,
}

impl FrameUpdate {
    /// Translate a universal-frame state back into host world coordinates.
    pub fn from_absolute(state: &AbsoluteState, origin: Option<&OriginOffset>) -> Self {
        let origin_position = origin.map(|o| o.position).unwrap_or_else(Vector3::zeros);
        let origin_velocity = origin.map(|o| o.velocity).unwrap_or_else(Vector3::zeros);

        tracing::debug!(
            "write-back: position {:?}, velocity {:?}, acceleration {:?}",
            state.position(),
            state.velocity(),
            state.acceleration()
        );

        FrameUpdate {
            position: state.position() + origin_position,
            velocity: state.velocity() + origin_velocity,
            acceleration: state.acceleration(),
            rotation: state.rotation(),
            angular_velocity: state.angular_velocity(),
            suspended: None,
        }
    }

    /// Attach the suspended-body hint: the would-be velocity relative to
    /// `parent`, rotated into the parent's local axes.
    ///
    /// With no parent state the relative velocity is zero — a suspended body
    /// with no parent is simply at rest in its own frame.
    pub fn with_suspended_hint(
        mut self,
        state: &AbsoluteState,
        parent: BodyId,
        parent_state: Option<&AbsoluteState>,
    ) -> Self {
        let relative_velocity = parent_state
            .map(|ps| {
                ps.inverse_transform_direction(state.velocity() - ps.point_velocity(state.position()))
            })
            .unwrap_or_else(Vector3::zeros);

        self.suspended = Some(SuspendedHint {
            parent,
            relative_velocity,
            angular_velocity: state.angular_velocity(),
        });
        self
    }
}
