//! Pointer-interaction engine for a scheduling/board UI.
//!
//! Two sibling engines share one pattern (coordinate transform + snap +
//! clamp + commit) applied to different coordinate spaces:
//!
//! - [`SpatialEngine`] - free-form 2D placement of cards on a bounded
//!   surface, positions normalized to (0..1, 0..1).
//! - [`TimelineEngine`] - one-dimensional vertical scheduling in
//!   minutes-since-day-start, snapped to a 15-minute grid.
//!
//! The engines are headless. They read live geometry and committed entity
//! attributes through the [`SpatialSurface`]/[`TimelineSurface`] traits,
//! return advisory [`VisualHint`]s from every handler for the host to
//! render, and emit exactly one committed [`Intent`] per completed gesture
//! through an [`IntentSink`]. Invalid or out-of-precondition input is a
//! silent no-op; there is no error path inside a gesture.

pub mod config;
pub mod constants;
pub mod dropzone;
pub mod hit;
pub mod input;
pub mod intent;
pub mod perf;
pub mod shortcuts;
pub mod spatial;
pub mod timeline;
pub mod types;

pub use config::{ConfigError, TimelineConfig};
pub use dropzone::DropZoneTracker;
pub use intent::{Intent, IntentSink, VisualHint};
pub use spatial::SpatialEngine;
pub use timeline::TimelineEngine;
pub use types::{
    BlockId, BlockView, DropZone, ItemId, ItemView, Point, Rect, SpatialSurface, TimelineHit,
    TimelineSurface,
};
