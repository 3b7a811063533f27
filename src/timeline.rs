//! Vertical scheduling engine.
//!
//! One pointer-down dispatcher feeds two independent gesture sub-machines:
//! a resize handle takes priority over a general block-body hit, and a
//! button inside a block suppresses dragging. Pointer deltas convert to
//! minutes through the mount-time pixels-per-minute scale, snap to the
//! 15-minute grid, and - for moves - clamp into the visible day window.
//! Exactly one intent commits per completed gesture, and only when the
//! pending value differs from the block's committed value.
//!
//! External drops from a sidebar drag source land here too: over a block
//! they merge (`AddItemToBlock`), over empty space they schedule a new
//! block at the snapped drop time (`ScheduleItem`). The drop minute is
//! deliberately not clamped to the day window, matching the established
//! behavior for fresh drops.

use crate::config::TimelineConfig;
use crate::constants::MIN_BLOCK_MINUTES;
use crate::dropzone::DropZoneTracker;
use crate::input::coords::{clamp_start_minute, delta_to_minutes, minute_to_offset, snap_to_grid};
use crate::input::TimelineGesture;
use crate::intent::{Intent, IntentSink, VisualHint};
use crate::profile_scope;
use crate::types::{BlockId, ItemId, Point, TimelineHit, TimelineSurface};
use tracing::debug;

/// Pointer-interaction engine for the timeline surface.
pub struct TimelineEngine<I> {
    config: TimelineConfig,
    intents: I,
    gesture: TimelineGesture,
    dropzone: DropZoneTracker,
}

impl<I: IntentSink> TimelineEngine<I> {
    pub fn new(config: TimelineConfig, intents: I) -> Self {
        Self {
            config,
            intents,
            gesture: TimelineGesture::Idle,
            dropzone: DropZoneTracker::default(),
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn sink(&self) -> &I {
        &self.intents
    }

    pub fn into_sink(self) -> I {
        self.intents
    }

    /// Reapply time-derived styling from current committed attributes.
    /// Idempotent; run on mount and after every host re-render.
    pub fn layout_pass(&self, surface: &impl TimelineSurface) -> Vec<VisualHint> {
        let mut hints = Vec::new();
        for id in surface.blocks() {
            let Some(view) = surface.block(&id) else { continue };
            hints.push(VisualHint::BlockTop {
                id: id.clone(),
                top: minute_to_offset(view.start_minute, &self.config),
            });
            hints.push(VisualHint::BlockHeight {
                id,
                height: f64::from(view.duration_minutes) * self.config.pixels_per_minute,
            });
        }
        hints
    }

    /// Pointer down: dispatch to the resize or move sub-machine based on
    /// what the pointer landed on. Ignored while a gesture is active.
    pub fn on_pointer_down(
        &mut self,
        pos: Point,
        hit: &TimelineHit,
        surface: &impl TimelineSurface,
    ) -> Vec<VisualHint> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }

        if let Some(block) = &hit.resize_handle {
            let Some(view) = surface.block(block) else {
                return Vec::new();
            };
            self.gesture.start_resizing(block.clone(), pos.y, view.duration_minutes);
            debug!(block = %block, "resize gesture started");
            return Vec::new();
        }

        let Some(block) = &hit.block else {
            return Vec::new();
        };
        if hit.button {
            // Buttons inside a block keep their own click behavior.
            return Vec::new();
        }
        let Some(view) = surface.block(block) else {
            return Vec::new();
        };
        self.gesture.start_moving(block.clone(), pos.y, view.start_minute);
        debug!(block = %block, "move gesture started");
        vec![VisualHint::LiftBlock { id: block.clone() }]
    }

    /// Pointer moved. Updates the block's visual offset or height only;
    /// the snapped candidate is stored on the gesture for commit.
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<VisualHint> {
        profile_scope!("timeline_pointer_move");

        match self.gesture.clone() {
            TimelineGesture::Resizing { block, start_y, start_duration, .. } => {
                let d_minutes = delta_to_minutes(pos.y - start_y, self.config.pixels_per_minute);
                let candidate = f64::from(MIN_BLOCK_MINUTES)
                    .max(f64::from(start_duration) + d_minutes);
                let duration = snap_to_grid(candidate);
                self.gesture.set_pending_duration(duration);
                vec![VisualHint::BlockHeight {
                    id: block,
                    height: f64::from(duration) * self.config.pixels_per_minute,
                }]
            }
            TimelineGesture::MovingBlock { block, start_y, start_minute, .. } => {
                let d_minutes = delta_to_minutes(pos.y - start_y, self.config.pixels_per_minute);
                let candidate = snap_to_grid(f64::from(start_minute) + d_minutes);
                let minute = clamp_start_minute(candidate, &self.config);
                self.gesture.set_pending_minute(minute);
                vec![VisualHint::BlockTop {
                    id: block,
                    top: minute_to_offset(minute, &self.config),
                }]
            }
            TimelineGesture::Idle => Vec::new(),
        }
    }

    /// Pointer released. Commits at most one `MoveBlock` or `ResizeBlock`
    /// intent; a pending value equal to the committed one is suppressed.
    pub fn on_pointer_up(&mut self, surface: &impl TimelineSurface) -> Vec<VisualHint> {
        match self.gesture.take() {
            TimelineGesture::Resizing { block, pending_duration, .. } => {
                if let Some(duration) = pending_duration {
                    let changed = surface
                        .block(&block)
                        .is_some_and(|v| v.duration_minutes != duration);
                    if changed {
                        debug!(block = %block, duration, "committing block resize");
                        self.intents.dispatch(Intent::ResizeBlock {
                            block_id: block,
                            duration_minutes: duration,
                        });
                    }
                }
                Vec::new()
            }
            TimelineGesture::MovingBlock { block, pending_minute, .. } => {
                let hints = vec![VisualHint::SettleBlock { id: block.clone() }];
                if let Some(minute) = pending_minute {
                    let changed = surface
                        .block(&block)
                        .is_some_and(|v| v.start_minute != minute);
                    if changed {
                        debug!(block = %block, minute, "committing block move");
                        self.intents.dispatch(Intent::MoveBlock {
                            block_id: block,
                            start_minute: minute,
                        });
                    }
                }
                hints
            }
            TimelineGesture::Idle => Vec::new(),
        }
    }

    /// Pointer cancelled by the platform; identical cleanup to pointer up.
    pub fn on_pointer_cancel(&mut self, surface: &impl TimelineSurface) -> Vec<VisualHint> {
        self.on_pointer_up(surface)
    }

    // ------------------------------------------------------------------
    // External drag source (sidebar items)
    // ------------------------------------------------------------------

    /// External drag hovers over the surface; returns highlight hints when
    /// the drop zone changes.
    pub fn on_drag_over(&mut self, _pos: Point, over_block: Option<&BlockId>) -> Vec<VisualHint> {
        self.dropzone.update(over_block)
    }

    /// External drag left the surface bounds entirely.
    pub fn on_drag_leave(&mut self) -> Vec<VisualHint> {
        self.dropzone.leave()
    }

    /// External drop. Over a block the carried item merges into it;
    /// otherwise the drop position converts to a snapped minute. The drop
    /// minute is snapped but not clamped to the day window.
    pub fn on_drop(
        &mut self,
        pos: Point,
        over_block: Option<&BlockId>,
        item: &ItemId,
        surface: &impl TimelineSurface,
    ) -> Vec<VisualHint> {
        let hints = self.dropzone.leave();

        if let Some(block) = over_block {
            debug!(block = %block, item = %item, "committing drop onto block");
            self.intents.dispatch(Intent::AddItemToBlock {
                block_id: block.clone(),
                item_id: item.clone(),
            });
            return hints;
        }

        let rect = surface.rect();
        let offset_y = pos.y - rect.y + surface.scroll_top();
        let minute = snap_to_grid(
            f64::from(self.config.day_start)
                + delta_to_minutes(offset_y, self.config.pixels_per_minute),
        );
        debug!(item = %item, minute, "committing drop onto empty timeline");
        self.intents.dispatch(Intent::ScheduleItem { item_id: item.clone(), start_minute: minute });
        hints
    }
}
