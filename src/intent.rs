//! Engine outputs: the committed intent stream and the visual-hint stream.
//!
//! These are deliberately two separate interfaces. An [`Intent`] is the
//! single, discrete notification emitted at gesture end - the authoritative
//! new value, dispatched fire-and-forget to the external state owner. A
//! [`VisualHint`] is a continuous, purely advisory rendering adjustment
//! made during an active gesture; it is never persisted and is discarded
//! if the gesture is cancelled. Keeping them apart lets a headless test
//! assert on commits without a renderer.

use crate::types::{BlockId, ItemId};
use serde::{Deserialize, Serialize};

/// A committed state change, exactly one per completed gesture.
///
/// Serializes as the outbound event wire shape consumed by the state
/// owner, e.g. `{"event":"move_block","block_id":"b1","start_minute":570}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Intent {
    /// A spatial item moved to a new fractional position (4 decimal places).
    MoveItem { id: ItemId, x: f64, y: f64 },
    /// A scheduled block moved to a new start time.
    MoveBlock { block_id: BlockId, start_minute: i32 },
    /// A scheduled block's duration changed.
    ResizeBlock { block_id: BlockId, duration_minutes: i32 },
    /// An item dropped onto empty timeline space becomes a block.
    ScheduleItem { item_id: ItemId, start_minute: i32 },
    /// An item dropped onto an existing block merges into it.
    AddItemToBlock { block_id: BlockId, item_id: ItemId },
}

/// One-way outlet for committed intents.
///
/// Dispatch is fire-and-forget: the engine does not wait for
/// acknowledgement and does not retry. The next gesture simply starts from
/// whatever the host renders by then.
pub trait IntentSink {
    fn dispatch(&mut self, intent: Intent);
}

/// Recording sink for tests and buffering hosts.
impl IntentSink for Vec<Intent> {
    fn dispatch(&mut self, intent: Intent) {
        self.push(intent);
    }
}

/// Advisory rendering adjustment emitted while a gesture is active (and by
/// the idempotent layout pass). The host applies these to its presentation
/// only; no entity state changes until an [`Intent`] commits.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualHint {
    /// Render the item centered at this fractional position.
    PlaceItem { id: ItemId, x: f64, y: f64 },
    /// Raise the item above its siblings for the duration of the drag.
    LiftItem { id: ItemId },
    /// Restore the item's resting presentation.
    SettleItem { id: ItemId },
    /// Render the block's top edge at this offset from the day start, px.
    BlockTop { id: BlockId, top: f64 },
    /// Render the block at this height, px.
    BlockHeight { id: BlockId, height: f64 },
    /// Raise/dim the block while it is being dragged.
    LiftBlock { id: BlockId },
    /// Restore the block's resting presentation.
    SettleBlock { id: BlockId },
    /// An external drag hovers over this block; show its drop affordance.
    HighlightBlock { id: BlockId },
    /// An external drag hovers over empty timeline space; highlight the
    /// whole surface.
    HighlightSurface,
    /// Remove all drop-affordance highlights.
    ClearHighlights,
}
