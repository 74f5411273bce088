//! # Constants and type definitions for Skyframe
//!
//! This module centralizes the **angular constants**, **conversion factors**, and **common type
//! definitions** used throughout the `skyframe` library. It also defines the tagged identifier
//! used to name celestial bodies.
//!
//! ## Overview
//!
//! - Angular constants and unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//! - The [`BodyId`] identifier, including its "no body" sentinel
//!
//! These definitions are used by all main modules, including the orbit conversion engine,
//! the frame composition engine, and the parent search.

use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Half-width of the guard band around 0° and 180° inclination (0.25° in radians).
///
/// Inside this band the ascending-node computation is numerically singular and the
/// orbit conversion engine switches to its re-permuted inclination procedure.
pub const POLAR_GUARD: Radian = std::f64::consts::PI / 720.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;

// -------------------------------------------------------------------------------------------------
// Identifiers
// -------------------------------------------------------------------------------------------------

/// Identifier of a celestial body known to the host simulation.
///
/// The math engine never branches on specific bodies; every physical constant is
/// looked up through a [`BodyProvider`](crate::provider::BodyProvider). `BodyId::None`
/// is the explicit "no body" sentinel used when a target has no dominant parent and
/// is expressed directly in the universal frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyId {
    /// No body; the universal frame itself.
    None,
    /// A named body (e.g. `"timber-hearth"`).
    Named(String),
}

impl BodyId {
    pub fn is_none(&self) -> bool {
        matches!(self, BodyId::None)
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyId::None => write!(f, "none"),
            BodyId::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for BodyId {
    fn from(name: &str) -> Self {
        BodyId::Named(name.to_string())
    }
}

impl From<String> for BodyId {
    fn from(name: String) -> Self {
        BodyId::Named(name)
    }
}
