//! Gesture state machines and coordinate transforms.
//!
//! The engines keep their per-gesture state in explicit enums rather than
//! scattered flags or state attached to rendered elements, making
//! impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - gesture state machine enums and helper methods
//! - `coords` - snap, clamp, round, and fraction/pixel conversions

pub mod coords;
mod state;

pub use state::{SpatialGesture, TimelineGesture};
