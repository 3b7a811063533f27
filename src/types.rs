//! Core types for the interaction engines.
//!
//! Entities are *read through* the engines, never owned by them: the host
//! (renderer + external state owner) holds the authoritative items and
//! blocks, and the engines query a snapshot of the relevant attributes
//! through the [`SpatialSurface`]/[`TimelineSurface`] traits at gesture
//! start and at commit. Nothing here is cached across gestures.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen pixels, as reported by live layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// A rect with a non-positive extent cannot host a gesture; transforms
    /// against it degrade to no-movement instead of dividing by zero.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Host-assigned identifier of a placed item (spatial card or sidebar item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-assigned identifier of a scheduled block on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Read-through entity views
// ============================================================================

/// Snapshot of a placed item's last committed attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView {
    /// Committed fractional position, 0..1 on each axis.
    pub x: f64,
    pub y: f64,
    /// Item is in a "ghost" state (an in-flight external operation, e.g.
    /// currently being dragged in from a sidebar) and must not start a
    /// gesture.
    pub disabled: bool,
}

impl ItemView {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, disabled: false }
    }
}

/// Snapshot of a scheduled block's last committed attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockView {
    /// Minutes since midnight, a multiple of the grid step.
    pub start_minute: i32,
    /// Minutes, at least one grid step.
    pub duration_minutes: i32,
}

// ============================================================================
// Pointer-down targets
// ============================================================================

/// Raw description of what a timeline pointer-down landed on. The engine's
/// dispatcher decides priority: a resize handle wins over the block body,
/// and a button inside a block suppresses dragging.
#[derive(Debug, Clone, Default)]
pub struct TimelineHit {
    /// Block whose resize handle is under the pointer.
    pub resize_handle: Option<BlockId>,
    /// Block whose body is under the pointer.
    pub block: Option<BlockId>,
    /// Pointer is on a button inside the block.
    pub button: bool,
}

impl TimelineHit {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn on_block(id: impl Into<String>) -> Self {
        Self { block: Some(BlockId(id.into())), ..Self::default() }
    }

    pub fn on_resize_handle(id: impl Into<String>) -> Self {
        let id = BlockId(id.into());
        Self {
            resize_handle: Some(id.clone()),
            block: Some(id),
            button: false,
        }
    }

    pub fn on_block_button(id: impl Into<String>) -> Self {
        Self {
            block: Some(BlockId(id.into())),
            button: true,
            ..Self::default()
        }
    }
}

/// Drop target currently under an external drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropZone {
    /// Empty timeline space.
    Surface,
    /// An existing scheduled block.
    Block(BlockId),
}

// ============================================================================
// Surface traits - the live-layout / entity read seam
// ============================================================================

/// Host-side view of the spatial surface.
///
/// `rect()` must reflect live layout; the engine reads it fresh at gesture
/// start and at commit because layout can change between interactions.
/// `item_center()` is the item's *rendered* center in surface-relative
/// pixels, i.e. wherever the host currently draws it, including any visual
/// hints applied during the active gesture.
pub trait SpatialSurface {
    fn rect(&self) -> Rect;
    fn item(&self, id: &ItemId) -> Option<ItemView>;
    fn item_center(&self, id: &ItemId) -> Option<Point>;
    fn items(&self) -> Vec<ItemId>;
}

/// Host-side view of the timeline surface.
pub trait TimelineSurface {
    fn rect(&self) -> Rect;
    /// Current vertical scroll offset of the timeline viewport in pixels.
    fn scroll_top(&self) -> f64;
    fn block(&self, id: &BlockId) -> Option<BlockView>;
    fn blocks(&self) -> Vec<BlockId>;
}
