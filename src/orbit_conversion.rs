//! # Orbit conversion engine
//!
//! Pure conversions between Cartesian state vectors and [`KeplerCoordinates`],
//! given a parent [`Gravity`] model and the elapsed simulation time.
//!
//! Both directions are exact inverses of each other (within floating-point
//! tolerance) for any non-degenerate conic. The internal math runs in the
//! orbital-mechanics axis convention; a fixed permutation (swap Y and Z, its own
//! inverse) is applied to every vector on the way in and out.
//!
//! Near-polar orbits (inclination within [`POLAR_GUARD`](crate::constants::POLAR_GUARD)
//! of 0° or 180°) would make the ascending-node angle numerically singular. For
//! those, the permutation is applied a second time, the inclination is recomputed
//! in the re-permuted frame, and a ±90° compensation is applied to the final
//! reported inclination.
//!
//! Degenerate input (zero angular momentum, parabolic energy) is not
//! special-cased beyond IEEE float behavior; callers gate on
//! [`KeplerCoordinates::is_orbit`].

use nalgebra::Vector3;

use crate::constants::{POLAR_GUARD, RADEG};
use crate::ellipse;
use crate::gravity::Gravity;
use crate::kepler::principal_angle;
use crate::kepler_coordinates::KeplerCoordinates;

/// Swap the Y and Z components. Self-inverse; maps between the host's axis
/// convention and the orbital-mechanics convention used internally.
pub(crate) fn permute_axes(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, v.z, v.y)
}

/// Convert a Cartesian state (position/velocity in the parent's frame) to
/// Keplerian elements.
///
/// Arguments
/// ---------
/// * `gravity`: parent gravity model `{mu, exponent}`.
/// * `elapsed_time`: elapsed simulation time in seconds. The returned elements
///   are re-anchored by subtracting it from the time since periapsis, so the
///   same set stays valid at any future instant.
/// * `position`, `velocity`: Cartesian state relative to the parent.
///
/// Return
/// ------
/// * A [`KeplerCoordinates`] set with all angles in `[0°, 360°)`. Degenerate
///   input propagates as NaN fields; check [`KeplerCoordinates::is_orbit`].
pub fn to_kepler(
    gravity: &Gravity,
    elapsed_time: f64,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
) -> KeplerCoordinates {
    let mut position = permute_axes(&position);
    let mut velocity = permute_axes(&velocity);
    let product = position.dot(&velocity);
    let mut momentum = position.cross(&velocity);
    let angular_momentum = momentum.norm();

    let mu = gravity.mu;
    let radius = position.norm();
    let speed = velocity.norm();

    let (semi_major_radius, eccentricity) = if !gravity.is_inverse_square() {
        let specific_energy = speed.powi(2) / 2.0 - mu;
        let eccentricity = (((2.0 * specific_energy) / mu + 2.0).abs().sqrt() - 1.0).abs();
        let semi_major_radius =
            angular_momentum / (mu.sqrt() * (1.0 - eccentricity.powi(2)));
        (semi_major_radius, eccentricity)
    } else {
        let specific_energy = speed.powi(2) / 2.0 - mu / radius;
        let semi_major_radius = (mu / (2.0 * specific_energy)).abs();
        let eccentricity = (1.0
            + (2.0 * specific_energy * angular_momentum.powi(2)) / mu.powi(2))
        .abs()
        .sqrt();
        (semi_major_radius, eccentricity)
    };

    let mut inclination = principal_angle((momentum.z / angular_momentum).acos());

    // Re-permute away from the ascending-node singularity near 0° / 180°.
    let mut adjustment = 0.0;
    if inclination % std::f64::consts::PI < POLAR_GUARD
        || inclination % std::f64::consts::PI > std::f64::consts::PI - POLAR_GUARD
    {
        adjustment = if std::f64::consts::FRAC_PI_2 < inclination
            && inclination < 3.0 * std::f64::consts::FRAC_PI_2
        {
            90.0
        } else {
            -90.0
        };
        position = permute_axes(&position);
        velocity = permute_axes(&velocity);
        momentum = position.cross(&velocity);
        inclination = principal_angle((momentum.z / angular_momentum).acos());
    }

    let ascending = principal_angle(momentum.x.atan2(-momentum.y));
    let latitude = principal_angle(
        (position.z / inclination.sin())
            .atan2(position.x * ascending.cos() + position.y * ascending.sin()),
    );

    let rectum = ellipse::axis_rectum(semi_major_radius, eccentricity);
    let true_anomaly = if !gravity.is_inverse_square() {
        principal_angle(((1.0 / mu).sqrt() * product).atan2(rectum - radius))
    } else {
        principal_angle(((rectum / mu).sqrt() * product).atan2(rectum - radius))
    };
    let periapse = principal_angle(latitude - true_anomaly);

    let kepler = KeplerCoordinates::from_true_anomaly(
        eccentricity,
        semi_major_radius,
        inclination / RADEG,
        periapse / RADEG,
        ascending / RADEG,
        true_anomaly / RADEG,
    );

    KeplerCoordinates::from_time_since_periapsis(
        gravity,
        eccentricity,
        semi_major_radius,
        inclination / RADEG + adjustment,
        periapse / RADEG,
        ascending / RADEG,
        kepler.time_since_periapsis(gravity) - elapsed_time,
    )
}

/// Convert Keplerian elements back to a Cartesian state in the parent's frame.
///
/// The element set is first advanced by `elapsed_time` (time since periapsis +
/// elapsed), then evaluated at the resulting true anomaly. Open conics carry no
/// time anchor and are evaluated at their stored anomaly.
pub fn to_cartesian(
    gravity: &Gravity,
    elapsed_time: f64,
    kepler: &KeplerCoordinates,
) -> (Vector3<f64>, Vector3<f64>) {
    let advanced = if kepler.eccentricity < 1.0 {
        KeplerCoordinates::from_time_since_periapsis(
            gravity,
            kepler.eccentricity,
            kepler.semi_major_radius,
            kepler.inclination,
            kepler.periapse_angle,
            kepler.ascending_angle,
            kepler.time_since_periapsis(gravity) + elapsed_time,
        )
    } else {
        *kepler
    };
    to_cartesian_at_anomaly(gravity, &advanced)
}

/// Evaluate position and velocity at the element set's stored true anomaly,
/// without any time advance.
///
/// Position and velocity are computed in the orbital plane from the true
/// anomaly and the semi-latus rectum, rotated into the parent frame through
/// the ascending-node / inclination / periapse composition, then permuted back
/// into the host axis convention.
pub fn to_cartesian_at_anomaly(
    gravity: &Gravity,
    kepler: &KeplerCoordinates,
) -> (Vector3<f64>, Vector3<f64>) {
    let eccentricity = kepler.eccentricity;
    let inclination = kepler.inclination * RADEG;
    let periapse = kepler.periapse_angle * RADEG;
    let ascending = kepler.ascending_angle * RADEG;
    let nu = kepler.true_anomaly * RADEG;

    let rectum = ellipse::axis_rectum(kepler.semi_major_radius, eccentricity);
    let radius = ellipse::radius_at(kepler.semi_major_radius, eccentricity, nu);

    let (sin_ascend, cos_ascend) = ascending.sin_cos();
    let (sin_periapse, cos_periapse) = periapse.sin_cos();
    let (sin_incl, cos_incl) = inclination.sin_cos();

    let plane_x = radius * nu.cos();
    let plane_y = radius * nu.sin();

    let rate = gravity.plane_angular_rate(rectum);
    let plane_vx = -rate * nu.sin();
    let plane_vy = rate * (eccentricity + nu.cos());

    let rotate = |x: f64, y: f64| {
        Vector3::new(
            x * (cos_periapse * cos_ascend - sin_periapse * cos_incl * sin_ascend)
                - y * (sin_periapse * cos_ascend + cos_periapse * cos_incl * sin_ascend),
            x * (cos_periapse * sin_ascend + sin_periapse * cos_incl * cos_ascend)
                - y * (sin_periapse * sin_ascend - cos_periapse * cos_incl * cos_ascend),
            x * sin_periapse * sin_incl + y * cos_periapse * sin_incl,
        )
    };

    (
        permute_axes(&rotate(plane_x, plane_y)),
        permute_axes(&rotate(plane_vx, plane_vy)),
    )
}

/// State vector at periapsis.
pub fn periapsis(gravity: &Gravity, kepler: &KeplerCoordinates) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.periapsis())
}

/// State vector at apoapsis.
pub fn apoapsis(gravity: &Gravity, kepler: &KeplerCoordinates) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.apoapsis())
}

/// State vector at the ascending node.
pub fn ascending(gravity: &Gravity, kepler: &KeplerCoordinates) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.ascending())
}

/// State vector at the descending node.
pub fn descending(gravity: &Gravity, kepler: &KeplerCoordinates) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.descending())
}

/// State vector at the outbound semi-minor-axis crossing.
pub fn semi_minor_ascending(
    gravity: &Gravity,
    kepler: &KeplerCoordinates,
) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.semi_minor_ascending())
}

/// State vector at the inbound semi-minor-axis crossing.
pub fn semi_minor_descending(
    gravity: &Gravity,
    kepler: &KeplerCoordinates,
) -> (Vector3<f64>, Vector3<f64>) {
    to_cartesian_at_anomaly(gravity, &kepler.semi_minor_descending())
}
