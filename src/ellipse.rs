//! Conic-section geometry helpers shared by the element types and the
//! orbit conversion engine.

/// Semi-latus rectum `p = a (1 - e²)` of a conic with semi-major radius `a`
/// and eccentricity `e`.
pub(crate) fn axis_rectum(semi_major_radius: f64, eccentricity: f64) -> f64 {
    semi_major_radius * (1.0 - eccentricity.powi(2))
}

/// Semi-minor axis `b = a sqrt(1 - e²)` of a closed conic.
pub(crate) fn semi_minor_axis(semi_major_radius: f64, eccentricity: f64) -> f64 {
    semi_major_radius * (1.0 - eccentricity.powi(2)).sqrt()
}

/// Orbit radius at true anomaly `nu` (radians): `r = p / (1 + e cos ν)`.
pub(crate) fn radius_at(semi_major_radius: f64, eccentricity: f64, nu: f64) -> f64 {
    axis_rectum(semi_major_radius, eccentricity) / (1.0 + eccentricity * nu.cos())
}
