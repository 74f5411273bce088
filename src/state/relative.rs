//! # Frame composition engine
//!
//! A [`RelativeState`] bundles up to three alternative representations of one
//! body's motion relative to a single parent:
//!
//! - `relative`: a frame-translated snapshot (translation only, no rotation
//!   removal), for bodies co-moving with the parent without frame rotation;
//! - `surface`: the motion fully expressed in the parent's rotating, scaled
//!   local frame;
//! - `orbit`: Keplerian elements, valid only while the conic lies strictly
//!   inside the parent's orbit-validity band.
//!
//! The forward direction ([`absolute_state`](RelativeState::absolute_state))
//! composes the parent's universal-frame state with whichever representation is
//! authoritative (orbit, then surface, then relative). The reverse direction
//! ([`from_global`](RelativeState::from_global)) classifies the target against
//! the parent's radii and derives every representation the regime supports.
//!
//! Classification is stateless and recomputed per query; there is no
//! hysteresis band around the radius thresholds, so a body oscillating near a
//! boundary may switch representations between consecutive queries.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::constants::BodyId;
use crate::gravity::{BodySize, Gravity};
use crate::orbit_conversion;
use crate::parent_search;
use crate::provider::BodyProvider;
use crate::skyframe_errors::SkyframeError;
use crate::state::absolute::AbsoluteState;
use crate::state::movement::{KeplerState, MovementState};
use crate::state::orientation::OrientationState;
use crate::state::position::PositionState;
use crate::state::scale::ScaleState;

/// Up to three alternative representations of a body's motion relative to one
/// parent. See the module documentation for the selection and classification
/// rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeState {
    parent: BodyId,
    relative: Option<MovementState>,
    surface: Option<MovementState>,
    orbit: Option<KeplerState>,
}

impl RelativeState {
    pub fn parent(&self) -> &BodyId {
        &self.parent
    }

    pub fn relative(&self) -> Option<&MovementState> {
        self.relative.as_ref()
    }

    pub fn surface(&self) -> Option<&MovementState> {
        self.surface.as_ref()
    }

    pub fn orbit(&self) -> Option<&KeplerState> {
        self.orbit.as_ref()
    }

    /// Bundle holding only a frame-translated snapshot.
    pub fn from_relative(parent: BodyId, relative: MovementState) -> Self {
        RelativeState {
            parent,
            relative: Some(relative),
            surface: None,
            orbit: None,
        }
    }

    /// Bundle holding only a parent-surface-frame snapshot.
    pub fn from_surface(parent: BodyId, surface: MovementState) -> Self {
        RelativeState {
            parent,
            relative: None,
            surface: Some(surface),
            orbit: None,
        }
    }

    /// Bundle holding only an orbital-element snapshot. Returns `None` unless
    /// the elements describe a usable conic.
    pub fn from_kepler(parent: BodyId, orbit: KeplerState) -> Option<Self> {
        if !orbit.coordinates.is_orbit() {
            return None;
        }
        Some(RelativeState {
            parent,
            relative: None,
            surface: None,
            orbit: Some(orbit),
        })
    }

    // ---------------------------------------------------------------------
    // Forward: Relative -> Absolute
    // ---------------------------------------------------------------------

    /// Compose this bundle with the parent's universal-frame state.
    ///
    /// Selection order per field: the orbit representation wins when its
    /// elements describe a real conic and a gravity model is available; the
    /// surface representation wins when the parent state is present; the plain
    /// relative snapshot is the last resort. An empty bundle yields
    /// [`SkyframeError::Unavailable`] — never a zeroed state.
    ///
    /// Arguments
    /// ---------
    /// * `parent_state`: the parent's current universal-frame state, if any.
    /// * `gravity`: the parent's gravity model, if any.
    /// * `elapsed_time`: elapsed simulation time, advances the orbital elements.
    pub fn absolute_state(
        &self,
        parent_state: Option<&AbsoluteState>,
        gravity: Option<&Gravity>,
        elapsed_time: f64,
    ) -> Result<AbsoluteState, SkyframeError> {
        let unavailable = || SkyframeError::Unavailable(self.parent.clone());

        let scale = self
            .absolute_scale(parent_state, gravity)
            .ok_or_else(unavailable)?;
        let coordinates = self
            .absolute_coordinates(parent_state, gravity, elapsed_time)
            .ok_or_else(unavailable)?;
        let orientation = self
            .absolute_orientation(parent_state, gravity)
            .ok_or_else(unavailable)?;

        Ok(AbsoluteState::new(MovementState::new(
            Some(scale),
            Some(coordinates),
            Some(orientation),
        )))
    }

    /// The orbit representation, when it is selectable at all.
    fn usable_orbit<'a>(&'a self, gravity: Option<&'a Gravity>) -> Option<(&'a KeplerState, &'a Gravity)> {
        match (&self.orbit, gravity) {
            (Some(orbit), Some(gravity)) if orbit.coordinates.is_orbit() => Some((orbit, gravity)),
            _ => None,
        }
    }

    fn absolute_scale(
        &self,
        parent_state: Option<&AbsoluteState>,
        gravity: Option<&Gravity>,
    ) -> Option<ScaleState> {
        if let Some((orbit, _)) = self.usable_orbit(gravity) {
            Some(orbit.scale.clone())
        } else if let (Some(_), Some(surface)) = (parent_state, &self.surface) {
            Some(surface.scale.clone())
        } else {
            self.relative.as_ref().map(|relative| relative.scale.clone())
        }
    }

    fn absolute_coordinates(
        &self,
        parent_state: Option<&AbsoluteState>,
        gravity: Option<&Gravity>,
        elapsed_time: f64,
    ) -> Option<PositionState> {
        if let Some((orbit, gravity)) = self.usable_orbit(gravity) {
            Some(self.coordinates_from_orbit(orbit, gravity, parent_state, elapsed_time))
        } else if let (Some(parent), Some(surface)) = (parent_state, &self.surface) {
            Some(Self::coordinates_from_surface(parent, surface))
        } else if let Some(relative) = &self.relative {
            Some(Self::coordinates_from_relative(parent_state, relative))
        } else {
            None
        }
    }

    fn coordinates_from_orbit(
        &self,
        orbit: &KeplerState,
        gravity: &Gravity,
        parent_state: Option<&AbsoluteState>,
        elapsed_time: f64,
    ) -> PositionState {
        let (mut position, mut velocity) =
            orbit_conversion::to_cartesian(gravity, elapsed_time, &orbit.coordinates);
        tracing::trace!(
            "orbit {} -> local position {:?}, velocity {:?}",
            orbit.coordinates,
            position,
            velocity
        );

        if let Some(parent) = parent_state {
            // A coexisting surface vector is the better direction authority;
            // keep the orbit-derived radius and point it along the surface
            // position instead of trusting either representation alone.
            match self
                .surface
                .as_ref()
                .and_then(|surface| surface.position().try_normalize(f64::EPSILON))
            {
                Some(direction) => {
                    position = parent.transform_point(direction * position.norm());
                    velocity += parent.velocity();
                }
                None => {
                    position += parent.position();
                    velocity += parent.velocity();
                }
            }
        }

        PositionState::new(position, velocity, Vector3::zeros(), Vector3::zeros())
    }

    fn coordinates_from_surface(parent: &AbsoluteState, surface: &MovementState) -> PositionState {
        let position = parent.transform_point(surface.position());
        let velocity = surface.velocity() + parent.point_velocity(position);
        let acceleration = surface.acceleration() + parent.point_acceleration(position);
        let jerk = surface.jerk() + parent.jerk();

        PositionState::new(position, velocity, acceleration, jerk)
    }

    fn coordinates_from_relative(
        parent_state: Option<&AbsoluteState>,
        relative: &MovementState,
    ) -> PositionState {
        let mut position = relative.position();
        let mut velocity = relative.velocity();
        let mut acceleration = relative.acceleration();
        let mut jerk = relative.jerk();

        if let Some(parent) = parent_state {
            position += parent.position();
            velocity += parent.velocity();
            acceleration += parent.acceleration();
            jerk += parent.jerk();
        }

        PositionState::new(position, velocity, acceleration, jerk)
    }

    fn absolute_orientation(
        &self,
        parent_state: Option<&AbsoluteState>,
        gravity: Option<&Gravity>,
    ) -> Option<OrientationState> {
        if let Some((orbit, _)) = self.usable_orbit(gravity) {
            Some(Self::compose_orientation(parent_state, &orbit.orientation))
        } else if let (Some(_), Some(surface)) = (parent_state, &self.surface) {
            Some(Self::compose_orientation(parent_state, &surface.orientation))
        } else {
            self.relative
                .as_ref()
                .map(|relative| relative.orientation.clone())
        }
    }

    /// Orientation transport into the universal frame: the parent rotation is
    /// composed onto the local rotation and the angular rates are rotated into
    /// world axes on top of the parent's own rates.
    fn compose_orientation(
        parent_state: Option<&AbsoluteState>,
        local: &OrientationState,
    ) -> OrientationState {
        match parent_state {
            Some(parent) => OrientationState::new(
                parent.transform_rotation(local.rotation),
                parent.angular_velocity() + parent.transform_direction(local.angular_velocity),
                parent.angular_acceleration()
                    + parent.transform_direction(local.angular_acceleration),
            ),
            None => local.clone(),
        }
    }

    /// Inverse orientation transport out of the universal frame.
    fn inverse_orientation(parent: &AbsoluteState, world: &OrientationState) -> OrientationState {
        OrientationState::new(
            parent.inverse_transform_rotation(world.rotation),
            parent.inverse_transform_direction(world.angular_velocity - parent.angular_velocity()),
            parent.inverse_transform_direction(
                world.angular_acceleration - parent.angular_acceleration(),
            ),
        )
    }

    // ---------------------------------------------------------------------
    // Reverse: Absolute x Absolute(parent) -> Relative
    // ---------------------------------------------------------------------

    /// Derive the full representation bundle of `target` relative to `parent`.
    ///
    /// The plain relative snapshot always exists. The surface representation is
    /// added when the target lies within the parent's influence radius
    /// (boundary inclusive); the orbit representation is attempted in the open
    /// band between the physical and influence radii and kept only when the
    /// derived conic's perigee clears the parent's surface and its apogee stays
    /// under the influence radius.
    ///
    /// Squared distances are compared throughout; no square root is taken.
    pub fn from_global(
        parent: BodyId,
        parent_state: Option<&AbsoluteState>,
        parent_gravity: Option<&Gravity>,
        parent_size: Option<&BodySize>,
        target_scale: &ScaleState,
        target: &AbsoluteState,
        elapsed_time: f64,
    ) -> Self {
        let parent = if parent_state.is_some() {
            parent
        } else {
            BodyId::None
        };
        let relative = Self::relative_movement(parent_state, target_scale, target);

        let mut surface = None;
        let mut orbit = None;
        if let (Some(parent_state), Some(size)) = (parent_state, parent_size) {
            let distance = relative.position().norm_squared();

            if distance <= size.influence * size.influence {
                surface = Some(Self::surface_movement(parent_state, target_scale, target));
            }

            if size.size * size.size < distance && distance < size.influence * size.influence {
                if let Some(kepler) = Self::kepler_movement(
                    parent_state,
                    parent_gravity,
                    target_scale,
                    target,
                    elapsed_time,
                ) {
                    if kepler.coordinates.is_orbit()
                        && size.size < kepler.coordinates.perigee()
                        && kepler.coordinates.apogee() < size.influence
                    {
                        orbit = Some(kepler);
                    } else {
                        tracing::trace!(
                            "orbit {} outside validity band of ({}, {}), discarded",
                            kepler.coordinates,
                            size.size,
                            size.influence
                        );
                    }
                }
            }
        }

        RelativeState {
            parent,
            relative: Some(relative),
            surface,
            orbit,
        }
    }

    /// Frame-translated snapshot: `target - parent`, translation only. With no
    /// parent state the target is already universal and passes through.
    pub fn relative_movement(
        parent_state: Option<&AbsoluteState>,
        target_scale: &ScaleState,
        target: &AbsoluteState,
    ) -> MovementState {
        let coordinates = match parent_state {
            Some(parent) => PositionState::new(
                target.position() - parent.position(),
                target.velocity() - parent.velocity(),
                target.acceleration() - parent.acceleration(),
                target.jerk() - parent.jerk(),
            ),
            None => target.movement().coordinates.clone(),
        };

        MovementState::new(
            Some(target_scale.clone()),
            Some(coordinates),
            Some(target.movement().orientation.clone()),
        )
    }

    /// Full inverse point-kinematics into the parent's rotating, scaled frame.
    pub fn surface_movement(
        parent_state: &AbsoluteState,
        target_scale: &ScaleState,
        target: &AbsoluteState,
    ) -> MovementState {
        let position = parent_state.inverse_transform_point(target.position());
        let velocity = target.velocity() - parent_state.point_velocity(target.position());
        let acceleration =
            target.acceleration() - parent_state.point_acceleration(target.position());
        let jerk = target.jerk() - parent_state.jerk();

        MovementState::new(
            Some(target_scale.clone()),
            Some(PositionState::new(position, velocity, acceleration, jerk)),
            Some(Self::inverse_orientation(
                parent_state,
                &target.movement().orientation,
            )),
        )
    }

    /// Keplerian elements of the target's motion about the parent, or `None`
    /// when no gravity model is available.
    pub fn kepler_movement(
        parent_state: &AbsoluteState,
        parent_gravity: Option<&Gravity>,
        target_scale: &ScaleState,
        target: &AbsoluteState,
        elapsed_time: f64,
    ) -> Option<KeplerState> {
        let gravity = parent_gravity?;
        let coordinates = orbit_conversion::to_kepler(
            gravity,
            elapsed_time,
            target.position() - parent_state.position(),
            target.velocity() - parent_state.velocity(),
        );
        tracing::trace!("derived orbit {} about parent", coordinates);

        Some(KeplerState::new(
            Some(target_scale.clone()),
            coordinates,
            Some(Self::inverse_orientation(
                parent_state,
                &target.movement().orientation,
            )),
        ))
    }

    /// Build the bundle against the dominant parent of `target`'s current
    /// position, excluding the identifiers in `exclude`.
    ///
    /// Errors
    /// ------
    /// * [`SkyframeError::Unavailable`] when the target has no live snapshot.
    /// * [`SkyframeError::NoParent`] when no candidate's influence sphere
    ///   contains the target; the caller then treats the target as expressed
    ///   directly in the universal frame.
    pub fn from_closest_influence<P: BodyProvider>(
        target: &BodyId,
        provider: &P,
        exclude: &HashSet<BodyId>,
        candidates: &[BodyId],
        elapsed_time: f64,
    ) -> Result<Self, SkyframeError> {
        let target_state = AbsoluteState::from_provider(target, provider)?;

        let parent = parent_search::find_dominant_parent(
            provider,
            &target_state.position(),
            exclude,
            candidates,
        )
        .ok_or(SkyframeError::NoParent)?;

        let parent_state = AbsoluteState::from_provider(&parent, provider).ok();
        let parent_gravity = provider.gravity(&parent);
        let parent_size = provider.size(&parent);
        let target_scale = target_state.scale().clone();

        Ok(Self::from_global(
            parent,
            parent_state.as_ref(),
            parent_gravity.as_ref(),
            parent_size.as_ref(),
            &target_scale,
            &target_state,
            elapsed_time,
        ))
    }
}

impl std::fmt::Display for RelativeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(parent: {}, relative: {}, surface: {}, orbit: {})",
            self.parent,
            self.relative.is_some(),
            self.surface.is_some(),
            self.orbit
                .as_ref()
                .map(|o| o.coordinates.to_string())
                .unwrap_or_else(|| "-".to_string())
        )
    }
}

#[cfg(test)]
mod relative_test {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;

    fn assert_vector_eq(a: &Vector3<f64>, b: &Vector3<f64>, tol: f64) {
        assert_relative_eq!(a.x, b.x, epsilon = tol);
        assert_relative_eq!(a.y, b.y, epsilon = tol);
        assert_relative_eq!(a.z, b.z, epsilon = tol);
    }

    fn absolute(position: Vector3<f64>, velocity: Vector3<f64>) -> AbsoluteState {
        AbsoluteState::new(MovementState::new(
            None,
            Some(PositionState::new(
                position,
                velocity,
                Vector3::zeros(),
                Vector3::zeros(),
            )),
            None,
        ))
    }

    fn rotating_parent() -> AbsoluteState {
        AbsoluteState::new(MovementState::new(
            None,
            Some(PositionState::new(
                Vector3::new(50.0, -20.0, 10.0),
                Vector3::new(1.0, 0.5, -0.25),
                Vector3::new(0.01, 0.0, 0.02),
                Vector3::zeros(),
            )),
            Some(OrientationState::new(
                UnitQuaternion::from_euler_angles(0.2, 0.9, -0.4),
                Vector3::new(0.0, 0.3, 0.1),
                Vector3::new(0.05, 0.0, 0.0),
            )),
        ))
    }

    #[test]
    fn test_identity_parent_composition() {
        // Composing with an identity parent state returns the original state.
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let movement = MovementState::new(
            None,
            Some(PositionState::new(
                Vector3::new(7.0, 8.0, 9.0),
                Vector3::new(0.1, 0.2, 0.3),
                Vector3::new(0.0, -0.1, 0.0),
                Vector3::zeros(),
            )),
            Some(OrientationState::new(
                UnitQuaternion::from_euler_angles(0.5, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::zeros(),
            )),
        );

        let bundle = RelativeState::from_relative(BodyId::from("ember-twin"), movement.clone());
        let composed = bundle
            .absolute_state(Some(&parent_state), None, 0.0)
            .unwrap();
        assert_eq!(composed.movement(), &movement);
    }

    #[test]
    fn test_empty_bundle_is_unavailable() {
        let bundle = RelativeState {
            parent: BodyId::from("ash-twin"),
            relative: None,
            surface: None,
            orbit: None,
        };
        assert_eq!(
            bundle.absolute_state(None, None, 0.0),
            Err(SkyframeError::Unavailable(BodyId::from("ash-twin")))
        );
    }

    #[test]
    fn test_surface_round_trip_under_rotating_parent() {
        let parent_state = rotating_parent();
        let size = BodySize::new(30.0, 500.0);
        let target = AbsoluteState::new(MovementState::new(
            None,
            Some(PositionState::new(
                Vector3::new(90.0, -15.0, 4.0),
                Vector3::new(0.2, -0.8, 0.6),
                Vector3::new(0.0, 0.01, 0.0),
                Vector3::zeros(),
            )),
            Some(OrientationState::new(
                UnitQuaternion::from_euler_angles(-0.1, 0.4, 0.9),
                Vector3::new(0.02, -0.3, 0.15),
                Vector3::zeros(),
            )),
        ));

        let bundle = RelativeState::from_global(
            BodyId::from("giants-deep"),
            Some(&parent_state),
            None,
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );
        // Inside the influence radius, with no gravity model: surface and
        // relative representations, no orbit.
        assert!(bundle.relative().is_some());
        assert!(bundle.surface().is_some());
        assert!(bundle.orbit().is_none());

        let composed = bundle
            .absolute_state(Some(&parent_state), None, 0.0)
            .unwrap();
        assert_vector_eq(&composed.position(), &target.position(), 1e-9);
        assert_vector_eq(&composed.velocity(), &target.velocity(), 1e-9);
        assert_vector_eq(&composed.acceleration(), &target.acceleration(), 1e-9);
        assert_vector_eq(
            &composed.angular_velocity(),
            &target.angular_velocity(),
            1e-9,
        );
        assert_relative_eq!(
            composed.rotation().angle_to(&target.rotation()),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_circular_orbit_classification() {
        let gravity = Gravity::new(400.0, 2.0);
        let size = BodySize::new(50.0, 200.0);
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let target = absolute(Vector3::new(100.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0));

        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            Some(&parent_state),
            Some(&gravity),
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );

        // Between surface and influence, on a bound conic inside the band:
        // all three representations coexist.
        assert!(bundle.relative().is_some());
        assert!(bundle.surface().is_some());
        let orbit = bundle.orbit().expect("orbit representation expected");
        assert_relative_eq!(orbit.coordinates.eccentricity, 0.0, epsilon = 1e-9);
        assert_relative_eq!(orbit.coordinates.semi_major_radius, 100.0, epsilon = 1e-9);

        let composed = bundle
            .absolute_state(Some(&parent_state), Some(&gravity), 0.0)
            .unwrap();
        assert_vector_eq(&composed.position(), &target.position(), 1e-6);
        assert_vector_eq(&composed.velocity(), &target.velocity(), 1e-8);
    }

    #[test]
    fn test_influence_boundary_is_surface_only() {
        // Exactly at the influence radius: surface kept (inclusive bound),
        // orbit excluded (open band).
        let gravity = Gravity::new(400.0, 2.0);
        let size = BodySize::new(50.0, 200.0);
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let target = absolute(Vector3::new(200.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            Some(&parent_state),
            Some(&gravity),
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );
        assert!(bundle.surface().is_some());
        assert!(bundle.orbit().is_none());
    }

    #[test]
    fn test_beyond_influence_is_relative_only() {
        let size = BodySize::new(50.0, 200.0);
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let target = absolute(Vector3::new(500.0, 0.0, 0.0), Vector3::zeros());

        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            Some(&parent_state),
            None,
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );
        assert!(bundle.relative().is_some());
        assert!(bundle.surface().is_none());
        assert!(bundle.orbit().is_none());
    }

    #[test]
    fn test_sub_surface_keeps_surface_but_not_orbit() {
        // Inside the physical radius the orbit band never opens.
        let gravity = Gravity::new(400.0, 2.0);
        let size = BodySize::new(50.0, 200.0);
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let target = absolute(Vector3::new(30.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0));

        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            Some(&parent_state),
            Some(&gravity),
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );
        assert!(bundle.surface().is_some());
        assert!(bundle.orbit().is_none());
    }

    #[test]
    fn test_escape_trajectory_is_discarded() {
        // Well above escape speed between the radii: the conic leaves the
        // validity band and only surface/relative survive.
        let gravity = Gravity::new(400.0, 2.0);
        let size = BodySize::new(50.0, 200.0);
        let parent_state = absolute(Vector3::zeros(), Vector3::zeros());
        let target = absolute(Vector3::new(100.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 50.0));

        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            Some(&parent_state),
            Some(&gravity),
            Some(&size),
            &ScaleState::identity(),
            &target,
            0.0,
        );
        assert!(bundle.surface().is_some());
        assert!(bundle.orbit().is_none());
    }

    #[test]
    fn test_missing_parent_state_collapses_to_universal() {
        let target = absolute(Vector3::new(10.0, 20.0, 30.0), Vector3::new(1.0, 0.0, 0.0));
        let bundle = RelativeState::from_global(
            BodyId::from("timber-hearth"),
            None,
            None,
            None,
            &ScaleState::identity(),
            &target,
            0.0,
        );

        assert_eq!(bundle.parent(), &BodyId::None);
        assert!(bundle.surface().is_none());
        assert!(bundle.orbit().is_none());

        // Passing straight through with no parent restores the target.
        let composed = bundle.absolute_state(None, None, 0.0).unwrap();
        assert_eq!(composed.movement(), target.movement());
    }
}
