//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerCoordinates`] struct, the **classical orbital element
//! representation** used by the frame composition engine for bodies in free orbit
//! around a parent.
//!
//! ## What are the elements?
//!
//! 1. **e** – Eccentricity (unitless)
//! 2. **a** – Semi-major radius (world units)
//! 3. **i** – Inclination (degrees)
//! 4. **ω** – Periapse angle / argument of periapsis (degrees)
//! 5. **Ω** – Ascending-node angle (degrees)
//! 6. **ν** – True anomaly (degrees)
//!
//! Together with a parent [`Gravity`](crate::gravity::Gravity) model these fully describe
//! the conic and the body's place on it. The epoch anchor is carried as the derivable
//! **time since periapsis**: [`from_time_since_periapsis`](KeplerCoordinates::from_time_since_periapsis)
//! and [`time_since_periapsis`](KeplerCoordinates::time_since_periapsis) convert between
//! the two anchorings so the same element set stays valid at any future instant.
//!
//! ## Units
//!
//! - Lengths: world units
//! - Angles: **degrees**, normalized to `[0°, 360°)`
//! - Time: seconds
//!
//! ## Degeneracies
//!
//! Degenerate Cartesian input (zero angular momentum, parabolic energy) is not
//! special-cased: the affected fields come out as NaN or non-physical magnitudes and
//! [`is_orbit`](KeplerCoordinates::is_orbit) reports the set as unusable. Callers fall
//! back to a surface or relative representation in that case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RADEG};
use crate::gravity::Gravity;
use crate::kepler::{
    eccentric_to_mean_anomaly, eccentric_to_true_anomaly, principal_angle, principal_degree,
    solve_eccentric_anomaly, true_to_eccentric_anomaly,
};
use crate::skyframe_errors::SkyframeError;

/// Keplerian orbital elements of a body relative to one parent.
///
/// Angles are degrees in `[0°, 360°)`; see the module documentation for units
/// and degeneracy handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerCoordinates {
    pub eccentricity: f64,
    pub semi_major_radius: f64,
    pub inclination: Degree,
    pub periapse_angle: Degree,
    pub ascending_angle: Degree,
    pub true_anomaly: Degree,
}

impl KeplerCoordinates {
    /// Build an element set anchored at an explicit true anomaly.
    ///
    /// All four angles are normalized to `[0°, 360°)`; eccentricity and semi-major
    /// radius are stored as given.
    pub fn from_true_anomaly(
        eccentricity: f64,
        semi_major_radius: f64,
        inclination: Degree,
        periapse_angle: Degree,
        ascending_angle: Degree,
        true_anomaly: Degree,
    ) -> Self {
        KeplerCoordinates {
            eccentricity,
            semi_major_radius,
            inclination: principal_degree(inclination),
            periapse_angle: principal_degree(periapse_angle),
            ascending_angle: principal_degree(ascending_angle),
            true_anomaly: principal_degree(true_anomaly),
        }
    }

    /// Build an element set anchored at a time offset from periapsis passage.
    ///
    /// The mean anomaly `M = n · t` is solved back to a true anomaly through
    /// Kepler's equation. When the solve fails (hyperbolic or NaN input) the true
    /// anomaly is NaN and the resulting set reports [`is_orbit`](Self::is_orbit) = false.
    ///
    /// Arguments
    /// ---------
    /// * `gravity`: parent gravity model, fixes the mean motion.
    /// * `eccentricity`, `semi_major_radius`, `inclination`, `periapse_angle`,
    ///   `ascending_angle`: the orbit geometry, angles in degrees.
    /// * `time_since_periapsis`: seconds since (or until, if negative) periapsis passage.
    pub fn from_time_since_periapsis(
        gravity: &Gravity,
        eccentricity: f64,
        semi_major_radius: f64,
        inclination: Degree,
        periapse_angle: Degree,
        ascending_angle: Degree,
        time_since_periapsis: f64,
    ) -> Self {
        let mean_motion = gravity.mean_motion(semi_major_radius, eccentricity);
        let mean_anomaly = principal_angle(mean_motion * time_since_periapsis);
        let true_anomaly = solve_eccentric_anomaly(mean_anomaly, eccentricity)
            .map(|e_anomaly| eccentric_to_true_anomaly(e_anomaly, eccentricity) / RADEG)
            .unwrap_or(f64::NAN);

        Self::from_true_anomaly(
            eccentricity,
            semi_major_radius,
            inclination,
            periapse_angle,
            ascending_angle,
            true_anomaly,
        )
    }

    /// Time elapsed since the last periapsis passage, in `[0, T)`.
    pub fn time_since_periapsis(&self, gravity: &Gravity) -> f64 {
        let e_anomaly = true_to_eccentric_anomaly(self.true_anomaly * RADEG, self.eccentricity);
        let mean_anomaly = eccentric_to_mean_anomaly(e_anomaly, self.eccentricity);
        mean_anomaly / gravity.mean_motion(self.semi_major_radius, self.eccentricity)
    }

    /// Orbital period of the closed orbit under `gravity`.
    pub fn orbital_period(&self, gravity: &Gravity) -> f64 {
        crate::constants::DPI / gravity.mean_motion(self.semi_major_radius, self.eccentricity)
    }

    /// Periapsis distance `a (1 - e)`.
    pub fn perigee(&self) -> f64 {
        self.semi_major_radius * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance `a (1 + e)`.
    pub fn apogee(&self) -> f64 {
        self.semi_major_radius * (1.0 + self.eccentricity)
    }

    /// Semi-minor axis `a sqrt(1 - e²)` of the closed conic.
    pub fn semi_minor_radius(&self) -> f64 {
        crate::ellipse::semi_minor_axis(self.semi_major_radius, self.eccentricity)
    }

    /// Whether the element set describes a usable conic.
    ///
    /// Requires every field finite, a positive semi-major radius, a non-negative
    /// eccentricity and a non-parabolic conic.
    pub fn is_orbit(&self) -> bool {
        self.eccentricity.is_finite()
            && self.semi_major_radius.is_finite()
            && self.inclination.is_finite()
            && self.periapse_angle.is_finite()
            && self.ascending_angle.is_finite()
            && self.true_anomaly.is_finite()
            && self.semi_major_radius > 0.0
            && self.eccentricity >= 0.0
            && (1.0 - self.eccentricity).abs() > f64::EPSILON
    }

    /// Validity gate returning the explicit degenerate-orbit marker.
    pub fn validated(self) -> Result<Self, SkyframeError> {
        if self.is_orbit() {
            Ok(self)
        } else {
            Err(SkyframeError::DegenerateOrbit {
                eccentricity: self.eccentricity,
                semi_major_radius: self.semi_major_radius,
            })
        }
    }

    fn at_true_anomaly(&self, true_anomaly: Degree) -> Self {
        Self::from_true_anomaly(
            self.eccentricity,
            self.semi_major_radius,
            self.inclination,
            self.periapse_angle,
            self.ascending_angle,
            true_anomaly,
        )
    }

    /// The same orbit anchored at periapsis (ν = 0°).
    pub fn periapsis(&self) -> Self {
        self.at_true_anomaly(0.0)
    }

    /// The same orbit anchored at apoapsis (ν = 180°).
    pub fn apoapsis(&self) -> Self {
        self.at_true_anomaly(180.0)
    }

    /// The same orbit anchored at the ascending node (ν = −ω).
    pub fn ascending(&self) -> Self {
        self.at_true_anomaly(-self.periapse_angle)
    }

    /// The same orbit anchored at the descending node (ν = 180° − ω).
    pub fn descending(&self) -> Self {
        self.at_true_anomaly(180.0 - self.periapse_angle)
    }

    /// The same orbit anchored at the semi-minor-axis crossing on the way out
    /// (cos ν = −e, altitude increasing).
    pub fn semi_minor_ascending(&self) -> Self {
        self.at_true_anomaly((-self.eccentricity).acos() / RADEG)
    }

    /// The same orbit anchored at the semi-minor-axis crossing on the way back in.
    pub fn semi_minor_descending(&self) -> Self {
        self.at_true_anomaly(-(-self.eccentricity).acos() / RADEG)
    }
}

impl fmt::Display for KeplerCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(e = {:.6}, a = {:.6}, i = {:.6}°, ω = {:.6}°, Ω = {:.6}°, ν = {:.6}°)",
            self.eccentricity,
            self.semi_major_radius,
            self.inclination,
            self.periapse_angle,
            self.ascending_angle,
            self.true_anomaly
        )
    }
}
