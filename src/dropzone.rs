//! Drop-target tracking for external drags.
//!
//! Tracks which drop target (empty surface vs. an existing block) sits
//! under the drag position, purely for the highlight affordance. Emits
//! hints only when the zone changes, clears everything when the drag
//! leaves the surface bounds, and carries no state between gestures.

use crate::intent::VisualHint;
use crate::types::{BlockId, DropZone};

#[derive(Debug, Default)]
pub struct DropZoneTracker {
    zone: Option<DropZone>,
}

impl DropZoneTracker {
    /// Current zone under the drag, if any.
    pub fn zone(&self) -> Option<&DropZone> {
        self.zone.as_ref()
    }

    /// Drag moved; returns the highlight hints for a zone change.
    pub fn update(&mut self, over_block: Option<&BlockId>) -> Vec<VisualHint> {
        let next = match over_block {
            Some(id) => DropZone::Block(id.clone()),
            None => DropZone::Surface,
        };
        if self.zone.as_ref() == Some(&next) {
            return Vec::new();
        }

        let mut hints = Vec::new();
        if self.zone.is_some() {
            hints.push(VisualHint::ClearHighlights);
        }
        hints.push(match &next {
            DropZone::Block(id) => VisualHint::HighlightBlock { id: id.clone() },
            DropZone::Surface => VisualHint::HighlightSurface,
        });
        self.zone = Some(next);
        hints
    }

    /// Drag left the surface entirely; clears all highlight state.
    pub fn leave(&mut self) -> Vec<VisualHint> {
        if self.zone.take().is_some() {
            vec![VisualHint::ClearHighlights]
        } else {
            Vec::new()
        }
    }
}
