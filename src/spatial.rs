//! Free-form 2D placement engine.
//!
//! Converts pointer deltas into a normalized (0..1, 0..1) position within a
//! bounded surface. During the drag the item follows the pointer under a
//! loose [0, 1] clamp for responsive feedback; at commit the final center
//! is re-read from the item's rendered position (absorbing any clamp
//! drift), clamped into the 0.02..0.98 margin, rounded to 4 decimal
//! places, and emitted as a single `MoveItem` intent - only if it differs
//! from the committed value. A tap that never crosses the 3px threshold is
//! a click and emits nothing.

use crate::constants::DRAG_THRESHOLD_PX;
use crate::input::coords::{
    center_to_fraction, clamp_margin, clamp_unit, fraction_to_center, round_coord,
};
use crate::input::SpatialGesture;
use crate::intent::{Intent, IntentSink, VisualHint};
use crate::profile_scope;
use crate::types::{ItemId, Point, SpatialSurface};
use tracing::{debug, warn};

/// Pointer-interaction engine for the spatial surface.
///
/// Holds only ephemeral gesture state; items are read through the
/// [`SpatialSurface`] on every transition.
pub struct SpatialEngine<I> {
    intents: I,
    gesture: SpatialGesture,
}

impl<I: IntentSink> SpatialEngine<I> {
    pub fn new(intents: I) -> Self {
        Self { intents, gesture: SpatialGesture::Idle }
    }

    /// The sink intents are dispatched into. Test hosts use `Vec<Intent>`.
    pub fn sink(&self) -> &I {
        &self.intents
    }

    pub fn into_sink(self) -> I {
        self.intents
    }

    /// Reapply position-derived styling from current committed attributes.
    /// Idempotent; run on mount and after every host re-render.
    pub fn layout_pass(&self, surface: &impl SpatialSurface) -> Vec<VisualHint> {
        surface
            .items()
            .into_iter()
            .filter_map(|id| {
                let view = surface.item(&id)?;
                Some(VisualHint::PlaceItem { id, x: view.x, y: view.y })
            })
            .collect()
    }

    /// Pointer down on the surface. Captures the item under the pointer
    /// unless it is disabled, a gesture is already active, or the surface
    /// geometry is degenerate.
    pub fn on_pointer_down(
        &mut self,
        pos: Point,
        target: Option<&ItemId>,
        surface: &impl SpatialSurface,
    ) -> Vec<VisualHint> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }
        let Some(item) = target else {
            return Vec::new();
        };
        let Some(view) = surface.item(item) else {
            return Vec::new();
        };
        if view.disabled {
            debug!(item = %item, "ignoring pointer down on disabled item");
            return Vec::new();
        }
        let rect = surface.rect();
        if rect.is_degenerate() {
            warn!(?rect, "spatial surface has degenerate geometry; ignoring gesture");
            return Vec::new();
        }

        let start_center = fraction_to_center(view.x, view.y, &rect);
        self.gesture.start_moving(item.clone(), pos, start_center);
        debug!(item = %item, "spatial gesture started");
        vec![VisualHint::LiftItem { id: item.clone() }]
    }

    /// Pointer moved. Updates the item's visual position only; nothing
    /// commits until release.
    pub fn on_pointer_move(&mut self, pos: Point, surface: &impl SpatialSurface) -> Vec<VisualHint> {
        profile_scope!("spatial_pointer_move");

        let SpatialGesture::MovingItem { item, start_pointer, start_center, .. } = &self.gesture
        else {
            return Vec::new();
        };
        let item = item.clone();
        let (start_pointer, start_center) = (*start_pointer, *start_center);

        let dx = pos.x - start_pointer.x;
        let dy = pos.y - start_pointer.y;
        if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
            self.gesture.mark_moved();
        }

        let rect = surface.rect();
        let center = Point::new(start_center.x + dx, start_center.y + dy);
        let Some((fx, fy)) = center_to_fraction(center, &rect) else {
            return Vec::new();
        };

        vec![VisualHint::PlaceItem { id: item, x: clamp_unit(fx), y: clamp_unit(fy) }]
    }

    /// Pointer released. Commits at most one `MoveItem` intent.
    pub fn on_pointer_up(&mut self, surface: &impl SpatialSurface) -> Vec<VisualHint> {
        let SpatialGesture::MovingItem { item, moved, .. } = self.gesture.take() else {
            return Vec::new();
        };
        let hints = vec![VisualHint::SettleItem { id: item.clone() }];

        if !moved {
            // A click; left for the host's click handling.
            return hints;
        }

        // Recompute from the rendered center rather than the accumulated
        // delta so clamping drift cannot leak into the committed value.
        let rect = surface.rect();
        let Some(center) = surface.item_center(&item) else {
            return hints;
        };
        let Some((fx, fy)) = center_to_fraction(center, &rect) else {
            warn!(?rect, "spatial surface degenerate at commit; dropping gesture");
            return hints;
        };

        let x = round_coord(clamp_margin(fx));
        let y = round_coord(clamp_margin(fy));

        let committed = surface.item(&item);
        let unchanged = committed
            .is_some_and(|v| round_coord(v.x) == x && round_coord(v.y) == y);
        if unchanged {
            debug!(item = %item, "drag ended at committed position; suppressing intent");
            return hints;
        }

        debug!(item = %item, x, y, "committing item move");
        self.intents.dispatch(Intent::MoveItem { id: item, x, y });
        hints
    }

    /// Pointer cancelled by the platform; identical cleanup to pointer up.
    pub fn on_pointer_cancel(&mut self, surface: &impl SpatialSurface) -> Vec<VisualHint> {
        self.on_pointer_up(surface)
    }
}
