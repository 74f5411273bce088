use crate::constants::DPI;

/// Principal value of an angle in radians, in `[0, 2π)`.
pub(crate) fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Principal value of an angle in degrees, in `[0°, 360°)`.
pub(crate) fn principal_degree(a: f64) -> f64 {
    a.rem_euclid(360.0)
}

/// Eccentric anomaly from true anomaly for a closed orbit (`e < 1`).
///
/// Uses the atan2 form `E = atan2(sqrt(1 - e²) sin ν, e + cos ν)` which stays
/// well-conditioned near the apsides.
pub(crate) fn true_to_eccentric_anomaly(nu: f64, eccentricity: f64) -> f64 {
    let root = (1.0 - eccentricity.powi(2)).sqrt();
    principal_angle((root * nu.sin()).atan2(eccentricity + nu.cos()))
}

/// True anomaly from eccentric anomaly for a closed orbit (`e < 1`).
pub(crate) fn eccentric_to_true_anomaly(e_anomaly: f64, eccentricity: f64) -> f64 {
    let root = (1.0 - eccentricity.powi(2)).sqrt();
    principal_angle((root * e_anomaly.sin()).atan2(e_anomaly.cos() - eccentricity))
}

/// Mean anomaly from eccentric anomaly (Kepler's equation, forward direction).
pub(crate) fn eccentric_to_mean_anomaly(e_anomaly: f64, eccentricity: f64) -> f64 {
    principal_angle(e_anomaly - eccentricity * e_anomaly.sin())
}

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly using a
/// Newton iteration.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly in radians.
/// * `eccentricity`: orbit eccentricity, must be in `[0, 1)` for convergence.
///
/// Return
/// ------
/// * `Some(E)` in `[0, 2π)` when the iteration converges, `None` otherwise
///   (hyperbolic input, NaN input, or no convergence within the iteration cap).
pub(crate) fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> Option<f64> {
    const ITX: usize = 50;

    if !mean_anomaly.is_finite() || !(0.0..1.0).contains(&eccentricity) {
        return None;
    }

    let contr = 100.0 * f64::EPSILON;
    let m = principal_angle(mean_anomaly);

    // Starting guess: M itself is fine for small e; π is safer for high e.
    let mut e_anomaly = if eccentricity < 0.8 { m } else { std::f64::consts::PI };

    for _ in 0..ITX {
        let du = -(e_anomaly - eccentricity * e_anomaly.sin() - m)
            / (1.0 - eccentricity * e_anomaly.cos());
        e_anomaly += du;
        if du.abs() < contr * 1e3 {
            return Some(principal_angle(e_anomaly));
        }
    }

    None
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_principal_angle() {
        assert_relative_eq!(principal_angle(-PI), PI, epsilon = 1e-12);
        assert_relative_eq!(principal_angle(3.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(principal_degree(-90.0), 270.0);
        assert_eq!(principal_degree(720.5), 0.5);
    }

    #[test]
    fn test_anomaly_round_trip() {
        for &e in &[0.0, 0.1, 0.5, 0.9] {
            for &nu in &[0.0, 0.7, PI / 2.0, PI, 4.2, 6.0] {
                let ecc_anomaly = true_to_eccentric_anomaly(nu, e);
                let back = eccentric_to_true_anomaly(ecc_anomaly, e);
                assert_relative_eq!(back, principal_angle(nu), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_solve_circular() {
        // e = 0: E = M in one step.
        let m = 1.234;
        assert_relative_eq!(solve_eccentric_anomaly(m, 0.0).unwrap(), m, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_satisfies_kepler_equation() {
        for &e in &[0.1, 0.3, 0.6, 0.9] {
            for &m in &[0.0, 0.5, 1.5, PI, 5.0] {
                let e_anomaly = solve_eccentric_anomaly(m, e).unwrap();
                let residual = e_anomaly - e * e_anomaly.sin() - principal_angle(m);
                assert!(
                    principal_angle(residual).min(DPI - principal_angle(residual)) < 1e-10,
                    "residual too large for e={e}, m={m}"
                );
            }
        }
    }

    #[test]
    fn test_solve_mean_round_trip() {
        for &e in &[0.0, 0.2, 0.7] {
            for &m in &[0.3, 2.0, 4.5] {
                let e_anomaly = solve_eccentric_anomaly(m, e).unwrap();
                assert_relative_eq!(
                    eccentric_to_mean_anomaly(e_anomaly, e),
                    m,
                    epsilon = 1e-10
                );
            }
        }
    }

    #[test]
    fn test_solve_rejects_degenerate_input() {
        assert_eq!(solve_eccentric_anomaly(f64::NAN, 0.5), None);
        assert_eq!(solve_eccentric_anomaly(1.0, 1.0), None);
        assert_eq!(solve_eccentric_anomaly(1.0, 1.7), None);
        assert_eq!(solve_eccentric_anomaly(1.0, -0.1), None);
    }
}
