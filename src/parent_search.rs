//! # Dominant-parent search
//!
//! Given a target position, find the closest body whose gravitational-influence
//! sphere contains it. The search is a pure function over a
//! [`BodyProvider`](crate::provider::BodyProvider): candidates without a live
//! snapshot or a size record never qualify, and a caller-supplied exclusion set
//! keeps a body from being its own parent.

use std::collections::HashSet;

use itertools::Itertools;
use nalgebra::Vector3;

use crate::constants::BodyId;
use crate::provider::BodyProvider;
use crate::state::position::PositionState;

/// Rank `candidates` by squared distance from `position`, nearest first.
///
/// Candidates without a live snapshot are dropped. Candidate positions are
/// re-anchored against the provider's floating-origin offset so they compare
/// against universal-frame target positions.
pub fn rank_by_distance<P: BodyProvider>(
    provider: &P,
    position: &Vector3<f64>,
    candidates: &[BodyId],
) -> Vec<(BodyId, f64)> {
    let origin = provider.origin_offset();

    candidates
        .iter()
        .filter_map(|id| {
            provider.live_kinematics(id).map(|kinematics| {
                let body_position = PositionState::from_live(&kinematics, origin.as_ref()).position;
                (id.clone(), (position - body_position).norm_squared())
            })
        })
        .sorted_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .collect()
}

/// The nearest body, not in `exclude`, whose influence sphere contains
/// `position`. `None` means the target is treated as expressed directly in
/// the universal frame.
///
/// Squared distances are compared throughout; no square root is taken.
pub fn find_dominant_parent<P: BodyProvider>(
    provider: &P,
    position: &Vector3<f64>,
    exclude: &HashSet<BodyId>,
    candidates: &[BodyId],
) -> Option<BodyId> {
    rank_by_distance(provider, position, candidates)
        .into_iter()
        .find(|(id, distance)| {
            !exclude.contains(id)
                && provider
                    .size(id)
                    .is_some_and(|size| *distance < size.influence * size.influence)
        })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod parent_search_test {
    use super::*;
    use crate::gravity::BodySize;
    use crate::provider::{BodyRecord, BodyTable, LiveKinematics};

    fn body_at(position: Vector3<f64>, influence: f64) -> BodyRecord {
        BodyRecord {
            kinematics: Some(LiveKinematics {
                position,
                ..LiveKinematics::default()
            }),
            size: Some(BodySize::new(influence / 10.0, influence)),
            gravity: None,
        }
    }

    fn table() -> (BodyTable, Vec<BodyId>) {
        let mut table = BodyTable::new();
        table.insert(BodyId::from("sun"), body_at(Vector3::zeros(), 10_000.0));
        table.insert(
            BodyId::from("planet"),
            body_at(Vector3::new(1000.0, 0.0, 0.0), 300.0),
        );
        table.insert(
            BodyId::from("moon"),
            body_at(Vector3::new(1100.0, 0.0, 0.0), 50.0),
        );
        let candidates = vec![
            BodyId::from("sun"),
            BodyId::from("planet"),
            BodyId::from("moon"),
        ];
        (table, candidates)
    }

    #[test]
    fn test_ranking_is_nearest_first() {
        let (table, candidates) = table();
        let ranked = rank_by_distance(&table, &Vector3::new(1090.0, 0.0, 0.0), &candidates);
        assert_eq!(ranked[0].0, BodyId::from("moon"));
        assert_eq!(ranked[1].0, BodyId::from("planet"));
        assert_eq!(ranked[2].0, BodyId::from("sun"));
    }

    #[test]
    fn test_nearest_containing_body_wins() {
        let (table, candidates) = table();
        let position = Vector3::new(1090.0, 0.0, 0.0);

        let parent = find_dominant_parent(&table, &position, &HashSet::new(), &candidates);
        assert_eq!(parent, Some(BodyId::from("moon")));

        // Excluding the moon falls through to the planet.
        let exclude: HashSet<BodyId> = [BodyId::from("moon")].into_iter().collect();
        let parent = find_dominant_parent(&table, &position, &exclude, &candidates);
        assert_eq!(parent, Some(BodyId::from("planet")));
    }

    #[test]
    fn test_no_containing_sphere_means_no_parent() {
        let (table, candidates) = table();
        let far_away = Vector3::new(100_000.0, 0.0, 0.0);
        assert_eq!(
            find_dominant_parent(&table, &far_away, &HashSet::new(), &candidates),
            None
        );
        assert_eq!(
            find_dominant_parent(&table, &Vector3::zeros(), &HashSet::new(), &[]),
            None
        );
    }

    #[test]
    fn test_bodies_without_state_never_qualify() {
        let mut table = BodyTable::new();
        table.insert(
            BodyId::from("ghost"),
            BodyRecord {
                kinematics: None,
                size: Some(BodySize::new(10.0, 1000.0)),
                gravity: None,
            },
        );
        let candidates = vec![BodyId::from("ghost")];
        assert_eq!(
            find_dominant_parent(&table, &Vector3::zeros(), &HashSet::new(), &candidates),
            None
        );
    }
}
