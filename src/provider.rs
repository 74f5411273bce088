//! # Live-body providers
//!
//! The math engine never owns rigid bodies; it pulls read-only snapshots from the
//! host through the [`BodyProvider`] trait and pushes results back through the
//! [`writeback`](crate::writeback) adapter. Providers are passed explicitly into
//! every entry point — there is no global registry.
//!
//! [`BodyTable`] is the bundled lookup-table implementation: a `HashMap` keyed by
//! [`BodyId`] holding each body's snapshot, dimensions and gravity model. Hosts
//! with their own object model implement [`BodyProvider`] directly.

use std::collections::HashMap;

use nalgebra::{UnitQuaternion, Vector3};

use crate::constants::BodyId;
use crate::gravity::{BodySize, Gravity};

/// One read-only kinematic snapshot of a live body, in host world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveKinematics {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub jerk: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub angular_velocity: Vector3<f64>,
    pub angular_acceleration: Vector3<f64>,
    pub lossy_scale: Vector3<f64>,
    pub local_scale: Vector3<f64>,
}

impl Default for LiveKinematics {
    fn default() -> Self {
        LiveKinematics {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            jerk: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
            lossy_scale: Vector3::new(1.0, 1.0, 1.0),
            local_scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Floating-origin offset of the host world, subtracted from every live
/// position/velocity so that universal-frame states stay anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OriginOffset {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// Read-only access to the host's celestial bodies.
///
/// Every accessor returns `None` for bodies the host cannot currently answer
/// for; the engine propagates that as
/// [`Unavailable`](crate::skyframe_errors::SkyframeError::Unavailable) rather
/// than substituting zeros.
pub trait BodyProvider {
    /// Current kinematic snapshot of `id`, or `None` when the body has no
    /// valid physical state this instant.
    fn live_kinematics(&self, id: &BodyId) -> Option<LiveKinematics>;

    /// Physical and influence radii of `id`.
    fn size(&self, id: &BodyId) -> Option<BodySize>;

    /// Gravity model of `id`, or `None` for bodies that exert none.
    fn gravity(&self, id: &BodyId) -> Option<Gravity>;

    /// Active floating-origin offset, if the host uses one.
    fn origin_offset(&self) -> Option<OriginOffset> {
        None
    }

    fn physical_radius(&self, id: &BodyId) -> Option<f64> {
        self.size(id).map(|s| s.size)
    }

    fn influence_radius(&self, id: &BodyId) -> Option<f64> {
        self.size(id).map(|s| s.influence)
    }
}

/// Everything the table knows about one body.
#[derive(Debug, Clone, Default)]
pub struct BodyRecord {
    pub kinematics: Option<LiveKinematics>,
    pub size: Option<BodySize>,
    pub gravity: Option<Gravity>,
}

/// `HashMap`-backed [`BodyProvider`] for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct BodyTable {
    bodies: HashMap<BodyId, BodyRecord>,
    origin: Option<OriginOffset>,
}

impl BodyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BodyId, record: BodyRecord) {
        self.bodies.insert(id, record);
    }

    pub fn set_origin_offset(&mut self, origin: Option<OriginOffset>) {
        self.origin = origin;
    }

    /// All registered body identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &BodyId> {
        self.bodies.keys()
    }
}

impl BodyProvider for BodyTable {
    fn live_kinematics(&self, id: &BodyId) -> Option<LiveKinematics> {
        self.bodies.get(id).and_then(|r| r.kinematics.clone())
    }

    fn size(&self, id: &BodyId) -> Option<BodySize> {
        self.bodies.get(id).and_then(|r| r.size)
    }

    fn gravity(&self, id: &BodyId) -> Option<Gravity> {
        self.bodies.get(id).and_then(|r| r.gravity)
    }

    fn origin_offset(&self) -> Option<OriginOffset> {
        self.origin
    }
}

#[cfg(test)]
mod provider_test {
    use super::*;

    #[test]
    fn test_body_table_lookup() {
        let mut table = BodyTable::new();
        table.insert(
            BodyId::from("brittle-hollow"),
            BodyRecord {
                kinematics: Some(LiveKinematics::default()),
                size: Some(BodySize::new(300.0, 4000.0)),
                gravity: Some(Gravity::new(1200.0, 2.0)),
            },
        );

        let id = BodyId::from("brittle-hollow");
        assert!(table.live_kinematics(&id).is_some());
        assert_eq!(table.physical_radius(&id), Some(300.0));
        assert_eq!(table.influence_radius(&id), Some(4000.0));
        assert_eq!(table.gravity(&id).map(|g| g.mu), Some(1200.0));

        let unknown = BodyId::from("quantum-moon");
        assert_eq!(table.live_kinematics(&unknown), None);
        assert_eq!(table.size(&unknown), None);
        assert_eq!(table.origin_offset(), None);
    }
}
