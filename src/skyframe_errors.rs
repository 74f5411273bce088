use thiserror::Error;

use crate::constants::BodyId;

/// Error taxonomy of the kinematic-state engine.
///
/// All three variants are recoverable: callers fall back to a simpler frame
/// representation (orbit → surface → relative → universal) and a single body's
/// failure never aborts computation for other bodies. None of the engine's
/// code paths panic; every operation either returns a fully-populated value or
/// one of these markers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyframeError {
    #[error("live body state unavailable: {0}")]
    Unavailable(BodyId),

    #[error("degenerate orbit (eccentricity: {eccentricity}, semi-major radius: {semi_major_radius})")]
    DegenerateOrbit {
        eccentricity: f64,
        semi_major_radius: f64,
    },

    #[error("no body's influence sphere contains the target position")]
    NoParent,
}

#[cfg(test)]
mod skyframe_errors_test {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SkyframeError::Unavailable(BodyId::from("attlerock")).to_string(),
            "live body state unavailable: attlerock"
        );
        assert_eq!(
            SkyframeError::NoParent.to_string(),
            "no body's influence sphere contains the target position"
        );
    }
}
