//! Gesture state machines - one explicit enum per engine.
//!
//! A gesture is one complete pointer-down-to-up (or cancel) sequence. Each
//! engine owns exactly one gesture slot; a pointer-down while a gesture is
//! active is ignored (single-pointer assumption), and pointer-cancel takes
//! the same cleanup path as pointer-up so no state is ever orphaned.
//!
//! ## State transitions
//!
//! ```text
//! SpatialGesture:
//!   Idle -> MovingItem   (pointer down on an enabled item)
//!   Any  -> Idle         (pointer up / cancel)
//!
//! TimelineGesture:
//!   Idle -> Resizing     (pointer down on a resize handle)
//!   Idle -> MovingBlock  (pointer down on a block body, not a button)
//!   Any  -> Idle         (pointer up / cancel)
//! ```

use crate::types::{BlockId, ItemId, Point};

/// Per-gesture state of the spatial engine.
#[derive(Debug, Clone, Default)]
pub enum SpatialGesture {
    /// No active input operation.
    #[default]
    Idle,

    /// An item is captured and following the pointer.
    MovingItem {
        /// Item under the pointer at gesture start.
        item: ItemId,
        /// Screen position of the pointer at gesture start.
        start_pointer: Point,
        /// Item center at gesture start, surface-relative pixels.
        start_center: Point,
        /// Set once displacement crosses the click-vs-drag threshold.
        moved: bool,
    },
}

impl SpatialGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn moving_item(&self) -> Option<&ItemId> {
        match self {
            Self::MovingItem { item, .. } => Some(item),
            Self::Idle => None,
        }
    }

    pub fn start_moving(&mut self, item: ItemId, start_pointer: Point, start_center: Point) {
        *self = Self::MovingItem { item, start_pointer, start_center, moved: false };
    }

    pub fn mark_moved(&mut self) {
        if let Self::MovingItem { moved, .. } = self {
            *moved = true;
        }
    }

    pub fn has_moved(&self) -> bool {
        matches!(self, Self::MovingItem { moved: true, .. })
    }

    /// Reset to Idle, returning the finished gesture for commit handling.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Per-gesture state of the timeline engine. Only one of the two drag
/// sub-machines may be active at a time.
#[derive(Debug, Clone, Default)]
pub enum TimelineGesture {
    /// No active input operation.
    #[default]
    Idle,

    /// A block body is captured and following the pointer vertically.
    MovingBlock {
        block: BlockId,
        /// Pointer Y at gesture start, screen pixels.
        start_y: f64,
        /// Block start time at gesture start, minutes.
        start_minute: i32,
        /// Snapped + clamped candidate start, updated on every move.
        pending_minute: Option<i32>,
    },

    /// A block's resize handle is captured; duration follows the pointer.
    Resizing {
        block: BlockId,
        start_y: f64,
        /// Block duration at gesture start, minutes.
        start_duration: i32,
        /// Snapped candidate duration, updated on every move.
        pending_duration: Option<i32>,
    },
}

impl TimelineGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::MovingBlock { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn block(&self) -> Option<&BlockId> {
        match self {
            Self::MovingBlock { block, .. } | Self::Resizing { block, .. } => Some(block),
            Self::Idle => None,
        }
    }

    pub fn start_moving(&mut self, block: BlockId, start_y: f64, start_minute: i32) {
        *self = Self::MovingBlock { block, start_y, start_minute, pending_minute: None };
    }

    pub fn start_resizing(&mut self, block: BlockId, start_y: f64, start_duration: i32) {
        *self = Self::Resizing { block, start_y, start_duration, pending_duration: None };
    }

    pub fn set_pending_minute(&mut self, minute: i32) {
        if let Self::MovingBlock { pending_minute, .. } = self {
            *pending_minute = Some(minute);
        }
    }

    pub fn set_pending_duration(&mut self, duration: i32) {
        if let Self::Resizing { pending_duration, .. } = self {
            *pending_duration = Some(duration);
        }
    }

    /// Reset to Idle, returning the finished gesture for commit handling.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
