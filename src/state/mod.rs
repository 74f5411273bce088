//! Immutable kinematic state value types and the frame composition engine.
//!
//! Every type here is a value object: computed fresh from live body data each
//! query, never cached, never mutated after construction. An absent sub-state
//! always collapses to the type's identity element.

pub mod absolute;
pub mod movement;
pub mod orientation;
pub mod position;
pub mod relative;
pub mod scale;

pub use absolute::AbsoluteState;
pub use movement::{KeplerState, MovementState};
pub use orientation::OrientationState;
pub use position::PositionState;
pub use relative::RelativeState;
pub use scale::ScaleState;
